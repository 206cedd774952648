use crate::error::FitError;
use crate::source::{FaceMetrics, GlyphSource, Language, ResolvedGlyph, WritingMode};
use id_arena::{Arena, Id};
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};
use std::path::Path;

/// A parsed font face. Fonts can be TTF or OTF fonts; the face is kept in
/// memory in its entirety and queried for glyph coverage and metrics.
///
/// All metrics returned by this type are em fractions at a nominal size of 1,
/// so callers can scale them by whatever font size they are working at.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if
    /// the font could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, FitError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Load a font from a file on disk
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Font, FitError> {
        Font::load(std::fs::read(path)?)
    }

    /// Look up the glyph id for a character, if the face covers it
    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }

    /// The glyph id of U+FFFD REPLACEMENT CHARACTER, if the face has one
    pub fn replacement_glyph_id(&self) -> Option<u16> {
        self.face.as_face_ref().glyph_index('\u{FFFD}').map(|i| i.0)
    }

    /// The advance of a glyph along the writing-mode axis. Faces without
    /// vertical metrics fall back to their horizontal advances.
    pub fn advance(&self, gid: u16, mode: WritingMode) -> f32 {
        let face = self.face.as_face_ref();
        let gid = GlyphId(gid);
        let advance = match mode {
            WritingMode::Horizontal => face.glyph_hor_advance(gid),
            WritingMode::Vertical => face
                .glyph_ver_advance(gid)
                .or_else(|| face.glyph_hor_advance(gid)),
        };
        advance.unwrap_or_default() as f32 / face.units_per_em() as f32
    }

    /// Distance from the baseline to the top of the face (usually positive)
    pub fn ascent(&self) -> f32 {
        let face = self.face.as_face_ref();
        face.ascender() as f32 / face.units_per_em() as f32
    }

    /// Distance from the baseline to the bottom of the face (usually negative)
    pub fn descent(&self) -> f32 {
        let face = self.face.as_face_ref();
        face.descender() as f32 / face.units_per_em() as f32
    }
}

/// A primary font face plus an ordered list of fallback faces.
///
/// This is the production [`GlyphSource`]: characters resolve against the
/// first face in the stack that covers them. Characters no face covers
/// resolve to the primary face's replacement glyph, then its `'?'` glyph,
/// and finally its notdef glyph (id 0). Resolution always produces a
/// glyph, it never fails.
pub struct FontStack {
    faces: Arena<Font>,
    order: Vec<Id<Font>>,
}

impl FontStack {
    /// Create a stack with a single primary face
    pub fn new(primary: Font) -> FontStack {
        let mut faces = Arena::new();
        let id = faces.alloc(primary);
        FontStack {
            faces,
            order: vec![id],
        }
    }

    /// Append a fallback face to the end of the stack, returning its id
    pub fn add_fallback(&mut self, font: Font) -> Id<Font> {
        let id = self.faces.alloc(font);
        self.order.push(id);
        id
    }

    /// The number of faces in the stack, including the primary
    pub fn face_count(&self) -> usize {
        self.order.len()
    }

    fn face(&self, index: usize) -> &Font {
        &self.faces[self.order[index]]
    }
}

impl GlyphSource for FontStack {
    fn resolve_glyph(&self, codepoint: char, _language: Language) -> ResolvedGlyph {
        for (i, id) in self.order.iter().enumerate() {
            if let Some(gid) = self.faces[*id].glyph_id(codepoint) {
                return ResolvedGlyph { face: i, gid };
            }
        }

        let primary = self.face(0);
        let gid = primary
            .replacement_glyph_id()
            .or_else(|| primary.glyph_id('?'))
            .unwrap_or(0);
        ResolvedGlyph { face: 0, gid }
    }

    fn advance_width(&self, glyph: ResolvedGlyph, mode: WritingMode) -> f32 {
        self.face(glyph.face).advance(glyph.gid, mode)
    }

    fn face_metrics(&self, face: usize) -> FaceMetrics {
        let face = self.face(face);
        FaceMetrics {
            ascent: face.ascent(),
            descent: face.descent(),
        }
    }
}
