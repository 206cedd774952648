//! Fitting text into fixed page regions.
//!
//! The central entry point is [`fit_text`](crate::layout::fit_text), which
//! picks one uniform font size and a set of line breaks so that a run of
//! text fills a box without overflowing it, then centers the placed glyphs
//! inside the box. It is intended for short annotation-style text such as stamp
//! or free-text overlays drawn onto a fixed region of a document page.
//!
//! Measurement and glyph resolution go through the
//! [`GlyphSource`](crate::GlyphSource) capability, so the algorithms here
//! work identically against a real [`FontStack`](crate::FontStack) or a
//! fixed-metric stub in tests.
//!
//! # Example
//!
//! ```no_run
//! use text_fit::{layout, Font, FontStack, Language, Pt, Rect};
//!
//! let font = Font::load_file("assets/FiraMono-Regular.ttf").expect("can load font");
//! let fonts = FontStack::new(font);
//!
//! let stamp = Rect::from_origin_size(Pt(36.0), Pt(700.0), Pt(180.0), Pt(48.0));
//! let block = layout::fit_text(&fonts, Language::tag("en"), "APPROVED\nfor release", stamp)
//!     .expect("text fits");
//!
//! for glyph in &block.glyphs {
//!     println!("{} at ({}, {})", glyph.codepoint, glyph.x, glyph.y);
//! }
//! ```

mod breaker;
mod fit;
mod place;

pub use fit::{fit_text, LINE_HEIGHT, MAX_LINES};
pub use place::place_run;
