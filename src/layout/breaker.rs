//! Greedy word-wrap line breaking driven by per-glyph advance widths.

use crate::source::{GlyphSource, Language, WritingMode};
use crate::units::Pt;

/// A font source pinned at one size, able to measure single characters.
/// The fitting driver re-uses one of these across its size search, adjusting
/// only `size` between passes.
pub(crate) struct Measure<'a, S: GlyphSource + ?Sized> {
    pub source: &'a S,
    pub language: Language,
    pub size: Pt,
}

impl<'a, S: GlyphSource + ?Sized> Measure<'a, S> {
    pub fn new(source: &'a S, language: Language, size: Pt) -> Measure<'a, S> {
        Measure {
            source,
            language,
            size,
        }
    }

    /// The advance of a single character at the current size
    fn char_width(&self, ch: char) -> Pt {
        let glyph = self.source.resolve_glyph(ch, self.language);
        self.size * self.source.advance_width(glyph, WritingMode::Horizontal)
    }
}

/// One visual line, as a half-open byte range into the text it was broken
/// from. The range excludes the line-break character or break-space that
/// ended the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LineSpan {
    pub start: usize,
    pub end: usize,
}

impl LineSpan {
    /// The slice of `text` this line covers
    pub fn of<'t>(&self, text: &'t str) -> &'t str {
        &text[self.start..self.end]
    }
}

/// The result of breaking a text into lines at one font size.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BrokenText {
    /// Every line of the text, in source order. Always holds at least one
    /// entry: the final line is emitted even when empty.
    pub lines: Vec<LineSpan>,
    /// The pen position at the widest line's break point, i.e. the measured
    /// width of the widest line
    pub max_width: Pt,
}

/// Partition `text` into lines no wider than `width`.
///
/// The text is scanned one code point at a time, accumulating a pen position
/// for the current line and remembering the most recent space seen on it.
/// An explicit `'\r'` or `'\n'` always ends the line (consuming itself). A
/// character whose advance would push the pen strictly past `width` ends the
/// line early: at the remembered space when there is one (the space is
/// consumed, and the scan resumes just after it so everything following the
/// space is re-measured on the new line), otherwise immediately before the
/// offending character, which then starts the new line. A character landing
/// exactly on `width` stays put.
///
/// Pass `Pt(f32::INFINITY)` to measure the text without any wrapping.
pub(crate) fn break_lines<S: GlyphSource + ?Sized>(
    measure: &Measure<'_, S>,
    text: &str,
    width: Pt,
) -> BrokenText {
    let mut lines: Vec<LineSpan> = Vec::new();
    let mut max_width = Pt(0.0);

    let mut line_start = 0;
    let mut space: Option<(usize, Pt)> = None;
    let mut x = Pt(0.0);

    let mut b = 0;
    while b < text.len() {
        let Some(ch) = text[b..].chars().next() else {
            break;
        };
        let next = b + ch.len_utf8();

        if ch == '\r' || ch == '\n' {
            lines.push(LineSpan {
                start: line_start,
                end: b,
            });
            if max_width < x {
                max_width = x;
            }
            line_start = next;
            x = Pt(0.0);
            space = None;
            b = next;
            continue;
        }

        if ch == ' ' {
            space = Some((b, x));
        }

        let w = measure.char_width(ch);
        if x + w > width {
            if let Some((space_at, space_x)) = space.take() {
                lines.push(LineSpan {
                    start: line_start,
                    end: space_at,
                });
                if max_width < space_x {
                    max_width = space_x;
                }
                // resume just after the consumed space
                line_start = space_at + 1;
                x = Pt(0.0);
                b = line_start;
                continue;
            } else {
                // no space on this line: hard break, the current character
                // opens the next line
                lines.push(LineSpan {
                    start: line_start,
                    end: b,
                });
                if max_width < x {
                    max_width = x;
                }
                line_start = b;
                x = w;
            }
        } else {
            x += w;
        }

        b = next;
    }

    // the final line runs to the end of the text, even when empty
    lines.push(LineSpan {
        start: line_start,
        end: text.len(),
    });
    if max_width < x {
        max_width = x;
    }

    BrokenText { lines, max_width }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{FaceMetrics, ResolvedGlyph};

    /// Every glyph is half an em wide.
    struct HalfEm;

    impl GlyphSource for HalfEm {
        fn resolve_glyph(&self, codepoint: char, _language: Language) -> ResolvedGlyph {
            ResolvedGlyph {
                face: 0,
                gid: codepoint as u16,
            }
        }

        fn advance_width(&self, _glyph: ResolvedGlyph, _mode: WritingMode) -> f32 {
            0.5
        }

        fn face_metrics(&self, _face: usize) -> FaceMetrics {
            FaceMetrics {
                ascent: 0.8,
                descent: -0.2,
            }
        }
    }

    fn lines_of(text: &str, size: f32, width: f32) -> Vec<String> {
        let measure = Measure::new(&HalfEm, Language::UNSPECIFIED, Pt(size));
        break_lines(&measure, text, Pt(width))
            .lines
            .iter()
            .map(|span| span.of(text).to_string())
            .collect()
    }

    #[test]
    fn unbounded_width_splits_only_at_newlines() {
        let lines = lines_of("Line1\nLine2\nLine3", 1.0, f32::INFINITY);
        assert_eq!(lines, vec!["Line1", "Line2", "Line3"]);
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        assert_eq!(lines_of("", 1.0, f32::INFINITY), vec![""]);
    }

    #[test]
    fn trailing_newline_emits_an_empty_final_line() {
        assert_eq!(lines_of("a\n", 1.0, f32::INFINITY), vec!["a", ""]);
    }

    #[test]
    fn crlf_pairs_emit_an_intervening_empty_line() {
        assert_eq!(lines_of("a\r\nb", 1.0, f32::INFINITY), vec!["a", "", "b"]);
    }

    #[test]
    fn breaks_at_the_last_space_and_consumes_it() {
        // at size 10 each glyph is 5 wide: "hello" measures 25, the space
        // lands exactly on 30 and stays, "w" would reach 35
        assert_eq!(lines_of("hello world", 10.0, 30.0), vec!["hello", "world"]);
    }

    #[test]
    fn a_glyph_landing_exactly_on_the_width_stays() {
        assert_eq!(lines_of("ab", 10.0, 10.0), vec!["ab"]);
    }

    #[test]
    fn words_wider_than_the_box_break_hard() {
        assert_eq!(lines_of("abcdef", 10.0, 10.0), vec!["ab", "cd", "ef"]);
    }

    #[test]
    fn text_after_a_break_space_is_remeasured_on_the_new_line() {
        // "aa bcd" at width 20: the pen reaches "aa b" = 20 exactly, "c"
        // overflows, and the scan rewinds to just after the space so that
        // "bcd" is measured from a fresh pen and fits as one line
        assert_eq!(lines_of("aa bcd", 10.0, 20.0), vec!["aa", "bcd"]);
    }

    #[test]
    fn max_width_reports_the_widest_line() {
        let text = "aa bbbb cc";
        let measure = Measure::new(&HalfEm, Language::UNSPECIFIED, Pt(10.0));
        let broken = break_lines(&measure, text, Pt(20.0));
        let lines: Vec<&str> = broken.lines.iter().map(|span| span.of(text)).collect();
        assert_eq!(lines, vec!["aa", "bbbb", "cc"]);
        assert_eq!(broken.max_width, Pt(20.0));
    }

    #[test]
    fn spaces_never_start_or_end_an_emitted_line() {
        for line in lines_of("one two three four five", 10.0, 42.0) {
            assert_eq!(line.trim(), line);
        }
    }
}
