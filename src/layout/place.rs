//! Glyph placement: a thin shim between line spans and the glyph container.

use crate::block::{PositionedGlyph, TextBlock};
use crate::source::{GlyphSource, Language, WritingMode};
use crate::transform::Transform;
use crate::units::Pt;

/// Append one run of text to `block`, glyph by glyph, starting at `trm`.
///
/// Each code point is resolved through `source` (which handles fallback
/// across faces), recorded at the current transform, and the transform is
/// advanced along the writing-mode axis by the glyph's advance: +x for
/// horizontal text, -y for vertical text. The advance happens in
/// pre-transform space, so a transform scaled by the font size moves the pen
/// by the advance at that size.
///
/// Returns the transform as advanced past the run's last glyph, for callers
/// that want to chain runs. The fitting driver keeps its own per-line
/// transform and ignores the return value.
pub fn place_run<S: GlyphSource + ?Sized>(
    block: &mut TextBlock,
    source: &S,
    mut trm: Transform,
    run: &str,
    mode: WritingMode,
    language: Language,
) -> Transform {
    for codepoint in run.chars() {
        let glyph = source.resolve_glyph(codepoint, language);
        let metrics = source.face_metrics(glyph.face);
        let advance = source.advance_width(glyph, mode);

        block.push(PositionedGlyph {
            glyph,
            codepoint,
            x: Pt(trm.e),
            y: Pt(trm.f),
            advance: Pt(advance * trm.a),
            ascent: Pt(metrics.ascent * trm.d),
            descent: Pt(metrics.descent * trm.d),
        });

        trm = match mode {
            WritingMode::Horizontal => trm.pre_translate(advance, 0.0),
            WritingMode::Vertical => trm.pre_translate(0.0, -advance),
        };
    }

    trm
}
