use text_fit::layout;
use text_fit::{Font, FontStack, Language, Pt, Rect};

fn main() {
    // load a font to measure and resolve glyphs with
    let path = std::env::args()
        .nth(1)
        .expect("usage: stamp <path-to-font.ttf>");
    let font = Font::load_file(path).expect("can load font");
    let fonts = FontStack::new(font);

    // a stamp-sized box near the top of a letter page
    let stamp = Rect::from_origin_size(Pt(36.0), Pt(700.0), Pt(216.0), Pt(54.0));

    let text = lipsum::lipsum_words(8);
    let block = layout::fit_text(&fonts, Language::tag("en"), &text, stamp).expect("text fits");

    println!("fitted {:?} at font size {}", text, block.first_line.a);
    for glyph in &block.glyphs {
        println!(
            "  {:?} (face {}, gid {}) at ({}, {})",
            glyph.codepoint, glyph.glyph.face, glyph.glyph.gid, glyph.x, glyph.y
        );
    }
    if let Some(bounds) = block.bounds() {
        println!(
            "bounding box: ({}, {}) to ({}, {})",
            bounds.x1, bounds.y1, bounds.x2, bounds.y2
        );
    }
}
