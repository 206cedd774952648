//! Fitting a run of text into a fixed box by searching over font size.

use crate::block::TextBlock;
use crate::error::FitError;
use crate::rect::Rect;
use crate::source::{GlyphSource, Language, WritingMode};
use crate::transform::Transform;
use crate::units::Pt;

use super::breaker::{break_lines, Measure};
use super::place::place_run;

/// Inter-baseline distance, as a multiple of the font size
pub const LINE_HEIGHT: f32 = 1.2;

/// The most lines a fitted block may use. Text that would need more lines
/// than this is rejected with [`FitError::TooManyLines`] rather than laid
/// out with its tail dropped.
pub const MAX_LINES: usize = 100;

/// Fit `text` into `bounds`, choosing a single uniform font size and a set
/// of line breaks such that every line fits the box's width and the whole
/// block fits its height, then center the result in the box.
///
/// The search starts from the number of lines the text needs without any
/// wrapping, derives the font size that stacks that many lines into the
/// box's height (at [`LINE_HEIGHT`] times the size per line), and re-wraps
/// at that size against the box's width. Whenever wrapping needs more lines
/// than assumed, the assumed count grows by one and the process repeats;
/// shrinking the size can never increase the wrapped line count past its
/// bound, so the search always reaches a fixed point.
///
/// Coordinates are page space with y increasing upward: the first baseline
/// is anchored at the box's top edge (`bounds.y2`) and subsequent lines
/// step downward. Lines are placed left to right, top to bottom.
///
/// Degenerate inputs are not errors: empty text produces an empty block,
/// and a zero-sized box produces a zero-sized layout. The fit is a pure
/// function of its inputs; identical inputs place identical glyphs.
pub fn fit_text<S: GlyphSource + ?Sized>(
    source: &S,
    language: Language,
    text: &str,
    bounds: Rect,
) -> Result<TextBlock, FitError> {
    let width = bounds.width();
    let height = bounds.height();

    let mut measure = Measure::new(source, language, Pt(1.0));

    // how many lines the text needs before any wrapping
    let mut target = break_lines(&measure, text, Pt(f32::INFINITY)).lines.len();

    // grow the assumed line count (shrinking the font size) until the
    // wrapped text no longer needs more lines than assumed
    let broken = loop {
        if target > MAX_LINES {
            return Err(FitError::TooManyLines {
                needed: target,
                max: MAX_LINES,
            });
        }

        measure.size = height / (target as f32 * LINE_HEIGHT);
        let broken = break_lines(&measure, text, width);
        log::trace!(
            "assuming {target} lines: font size {}, wrapped to {} lines, widest {}",
            measure.size,
            broken.lines.len(),
            broken.max_width,
        );
        if broken.lines.len() <= target {
            break broken;
        }
        target += 1;
    };
    let size = measure.size;

    // anchor the first baseline at the top-left corner of the box, stepping
    // down one line-height per line
    let mut trm = Transform::scale(*size, *size).with_translate(bounds.x1, bounds.y2);
    let mut block = TextBlock::new();
    block.first_line = trm;
    for line in broken.lines.iter() {
        place_run(
            &mut block,
            source,
            trm,
            line.of(text),
            WritingMode::Horizontal,
            language,
        );
        trm = trm.pre_translate(0.0, -LINE_HEIGHT);
    }

    // center the assembled block in the box
    if let Some(placed) = block.bounds() {
        let (box_x, box_y) = bounds.center();
        let (placed_x, placed_y) = placed.center();
        block.translate(box_x - placed_x, box_y - placed_y);
    }

    log::debug!(
        "fitted {} lines at font size {}, widest {}",
        broken.lines.len(),
        size,
        broken.max_width,
    );

    Ok(block)
}
