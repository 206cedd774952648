use crate::rect::Rect;
use crate::source::ResolvedGlyph;
use crate::transform::Transform;
use crate::units::Pt;

/// A single glyph fixed at a position in page space. Besides the position,
/// each record carries the scaled advance and vertical extents it was placed
/// with, so a block's bounding box can be computed from the records alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionedGlyph {
    /// The glyph and the face it resolved against
    pub glyph: ResolvedGlyph,
    /// The character the glyph was resolved from
    pub codepoint: char,
    /// The x-coordinate of the glyph origin, on the baseline
    pub x: Pt,
    /// The y-coordinate of the glyph origin, on the baseline
    pub y: Pt,
    /// The advance along the writing-mode axis, scaled to the placed size
    pub advance: Pt,
    /// Distance from the baseline to the top of the glyph's face, scaled
    pub ascent: Pt,
    /// Distance from the baseline to the bottom of the glyph's face, scaled
    /// (usually negative)
    pub descent: Pt,
}

/// An ordered collection of positioned glyphs making up one laid-out block
/// of text, along with the transform that placed the first line's first
/// glyph (which encodes the chosen font size in its scale).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TextBlock {
    pub glyphs: Vec<PositionedGlyph>,
    pub first_line: Transform,
}

impl TextBlock {
    pub fn new() -> TextBlock {
        TextBlock::default()
    }

    /// Append a positioned glyph to the block
    pub fn push(&mut self, glyph: PositionedGlyph) {
        self.glyphs.push(glyph);
    }

    /// The axis-aligned bounding box over all placed glyphs, computed from
    /// the glyph records on every call so that translating the glyphs can
    /// never leave a stale box behind. [`None`] if the block holds no glyphs.
    pub fn bounds(&self) -> Option<Rect> {
        let first = self.glyphs.first()?;
        let mut bounds = Rect {
            x1: first.x,
            y1: first.y + first.descent,
            x2: first.x + first.advance,
            y2: first.y + first.ascent,
        };
        for glyph in self.glyphs.iter().skip(1) {
            bounds.x1 = Pt(bounds.x1.min(*glyph.x));
            bounds.y1 = Pt(bounds.y1.min(*(glyph.y + glyph.descent)));
            bounds.x2 = Pt(bounds.x2.max(*(glyph.x + glyph.advance)));
            bounds.y2 = Pt(bounds.y2.max(*(glyph.y + glyph.ascent)));
        }
        Some(bounds)
    }

    /// Shift every placed glyph by a fixed offset
    pub fn translate(&mut self, dx: Pt, dy: Pt) {
        for glyph in self.glyphs.iter_mut() {
            glyph.x += dx;
            glyph.y += dy;
        }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}
