//! End-to-end tests against the linked FreeType library.
//!
//! These need a real font on disk. A handful of well-known system font paths
//! are probed; when none exists the tests skip rather than fail, so the suite
//! stays runnable on minimal containers.

use std::io::Write;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use smalt::{Error, KerningMode, Library, LineCap, LineJoin};

static TEST_FONT: Lazy<Option<PathBuf>> = Lazy::new(|| {
    const CANDIDATES: &[&str] = &[
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
        "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
        "/usr/share/fonts/gnu-free/FreeSans.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ];
    CANDIDATES.iter().map(PathBuf::from).find(|p| p.exists())
});

macro_rules! require_font {
    () => {
        match TEST_FONT.as_deref() {
            Some(font) => font,
            None => {
                eprintln!("no system font found, skipping");
                return;
            }
        }
    };
}

#[test]
fn version_is_freetype_2() {
    let library = Library::init().unwrap();
    let (major, _, _) = library.version();
    assert!(major >= 2);
}

#[test]
fn end_to_end_render() {
    let font = require_font!();
    let library = Library::init().unwrap();
    let mut face = library.new_face(font, 0).unwrap();
    face.set_char_size(0, 16 * 64, 96, 96).unwrap();

    let index = face.char_index('A' as u32);
    assert!(index > 0);

    let bitmap = face.load_glyph_rendered(index).unwrap();
    assert!(bitmap.width > 0);
    assert!(bitmap.rows > 0);
    assert!(bitmap.advance_x > 0);
    assert_eq!(bitmap.pixels.len(), (bitmap.width * bitmap.rows) as usize);
    // 'A' at 16pt/96dpi has to put ink somewhere.
    assert!(bitmap.pixels.iter().any(|&p| p > 0));
}

#[test]
fn char_index_returns_zero_for_unmapped_codepoint() {
    let font = require_font!();
    let library = Library::init().unwrap();
    let face = library.new_face(font, 0).unwrap();
    // Plane-16 private use; no ordinary text font maps it.
    assert_eq!(face.char_index(0x10FFFD), 0);
}

#[test]
fn face_metadata() {
    let font = require_font!();
    let library = Library::init().unwrap();
    let face = library.new_face(font, 0).unwrap();
    assert!(face.num_glyphs() > 0);
    assert!(face.family_name().is_some());
}

#[test]
fn new_face_fails_on_missing_file() {
    let library = Library::init().unwrap();
    let err = library
        .new_face(Path::new("/nonexistent/regular.ttf"), 0)
        .unwrap_err();
    assert!(matches!(err, Error::NewFace(_)));
}

#[test]
fn new_face_fails_on_non_font_file() {
    let library = Library::init().unwrap();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"this is not a font file").unwrap();
    let err = library.new_face(file.path(), 0).unwrap_err();
    assert!(matches!(err, Error::NewFace(_)));
}

#[test]
fn new_face_fails_on_out_of_range_index() {
    let font = require_font!();
    let library = Library::init().unwrap();
    let err = library.new_face(font, 99).unwrap_err();
    assert!(matches!(err, Error::NewFace(_)));
}

#[test]
fn load_glyph_fails_on_invalid_index() {
    let font = require_font!();
    let library = Library::init().unwrap();
    let mut face = library.new_face(font, 0).unwrap();
    face.set_char_size(0, 16 * 64, 96, 96).unwrap();
    let bad_index = face.num_glyphs() as u32 + 100;
    let err = face.load_glyph(bad_index).unwrap_err();
    assert!(matches!(err, Error::LoadGlyph(_)));
}

#[test]
fn kerning_is_idempotent_or_fails_without_table() {
    let font = require_font!();
    let library = Library::init().unwrap();
    let mut face = library.new_face(font, 0).unwrap();
    face.set_char_size(0, 16 * 64, 96, 96).unwrap();

    let a = face.char_index('A' as u32);
    let v = face.char_index('V' as u32);
    if face.has_kerning() {
        let first = face.kerning(a, v, KerningMode::Default).unwrap();
        let second = face.kerning(a, v, KerningMode::Default).unwrap();
        assert_eq!(first, second);
    } else {
        let err = face.kerning(a, a, KerningMode::Default).unwrap_err();
        assert!(matches!(err, Error::Kerning(_)));
    }
}

#[test]
fn extract_stroke_and_rasterize() {
    let font = require_font!();
    let library = Library::init().unwrap();
    let mut face = library.new_face(font, 0).unwrap();
    face.set_char_size(0, 16 * 64, 96, 96).unwrap();
    face.load_glyph(face.char_index('O' as u32)).unwrap();

    let mut stroker = library.new_stroker().unwrap();
    stroker.set(2 * 64, LineCap::Round, LineJoin::Round, 4 << 16);

    let plain = face.glyph().unwrap().to_bitmap().unwrap();

    face.load_glyph(face.char_index('O' as u32)).unwrap();
    let stroked = face
        .glyph()
        .unwrap()
        .stroke(&stroker)
        .unwrap()
        .to_bitmap()
        .unwrap();

    assert_eq!(plain.pixels.len(), (plain.width * plain.rows) as usize);
    assert_eq!(stroked.pixels.len(), (stroked.width * stroked.rows) as usize);
    // A 2px stroke expands the outline on every side.
    assert!(stroked.width > plain.width);
    assert!(stroked.rows > plain.rows);
}

#[test]
fn stroked_keeps_the_source_glyph_usable() {
    let font = require_font!();
    let library = Library::init().unwrap();
    let mut face = library.new_face(font, 0).unwrap();
    face.set_char_size(0, 16 * 64, 96, 96).unwrap();
    face.load_glyph(face.char_index('H' as u32)).unwrap();

    let mut stroker = library.new_stroker().unwrap();
    stroker.set(64, LineCap::Butt, LineJoin::MiterFixed, 4 << 16);

    let glyph = face.glyph().unwrap();
    let outlined = glyph.stroked(&stroker).unwrap().to_bitmap().unwrap();
    // The source was not consumed and still rasterizes.
    let plain = glyph.to_bitmap().unwrap();

    assert!(outlined.width >= plain.width);
    assert!(plain.width > 0);
}

#[test]
fn stroker_is_reusable_across_glyphs() {
    let font = require_font!();
    let library = Library::init().unwrap();
    let mut face = library.new_face(font, 0).unwrap();
    face.set_char_size(0, 16 * 64, 96, 96).unwrap();

    let mut stroker = library.new_stroker().unwrap();
    stroker.set(64, LineCap::Square, LineJoin::Bevel, 4 << 16);

    for c in ['a', 'b', 'c'] {
        face.load_glyph(face.char_index(c as u32)).unwrap();
        let bitmap = face
            .glyph()
            .unwrap()
            .stroke(&stroker)
            .unwrap()
            .to_bitmap()
            .unwrap();
        assert_eq!(bitmap.pixels.len(), (bitmap.width * bitmap.rows) as usize);
    }
}

#[test]
fn set_char_size_fails_on_invalid_parameters() {
    let font = require_font!();
    let library = Library::init().unwrap();
    let mut face = library.new_face(font, 0).unwrap();
    let err = face.set_char_size(-64, -64, 96, 96).unwrap_err();
    assert!(matches!(err, Error::SetCharSize(_)));
}
