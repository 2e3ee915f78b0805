use crate::ffi;

/// A rasterized glyph: bearing and advance metrics plus a rows×width grid of
/// 8-bit coverage values.
///
/// The pixel grid is always a host-owned copy, row-major with no padding
/// between rows, regardless of the stride FreeType stored it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphBitmap {
    /// Horizontal bearing: distance from the pen position to the left edge.
    pub left: i32,
    /// Vertical bearing: distance from the baseline up to the top edge.
    pub top: i32,
    pub width: u32,
    pub rows: u32,
    /// Advance in the native units of the producing call: 26.6 fixed point
    /// from [`crate::Face::load_glyph_rendered`] (the glyph slot's
    /// convention), 16.16 from [`crate::Glyph::to_bitmap`] (the standalone
    /// glyph's convention).
    pub advance_x: i64,
    pub advance_y: i64,
    /// `rows * width` coverage bytes, row-major, top row first.
    pub pixels: Vec<u8>,
}

impl GlyphBitmap {
    pub(crate) fn from_slot(slot: &ffi::FT_GlyphSlotRec) -> GlyphBitmap {
        GlyphBitmap {
            left: slot.bitmap_left,
            top: slot.bitmap_top,
            width: slot.bitmap.width,
            rows: slot.bitmap.rows,
            advance_x: slot.advance.x as i64,
            advance_y: slot.advance.y as i64,
            pixels: copy_pixels(&slot.bitmap),
        }
    }

    pub(crate) fn from_bitmap_glyph(glyph: &ffi::FT_BitmapGlyphRec) -> GlyphBitmap {
        GlyphBitmap {
            left: glyph.left,
            top: glyph.top,
            width: glyph.bitmap.width,
            rows: glyph.bitmap.rows,
            advance_x: glyph.root.advance.x as i64,
            advance_y: glyph.root.advance.y as i64,
            pixels: copy_pixels(&glyph.bitmap),
        }
    }

    /// One row of coverage values. Panics if `y >= rows`.
    pub fn row(&self, y: u32) -> &[u8] {
        assert!(y < self.rows);
        let start = (y * self.width) as usize;
        &self.pixels[start..start + self.width as usize]
    }

    /// The coverage value at (`x`, `y`). Panics when out of bounds.
    pub fn coverage(&self, x: u32, y: u32) -> u8 {
        assert!(x < self.width);
        self.row(y)[x as usize]
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

/// Copies a native bitmap into an unpadded, top-down pixel vector. The
/// native rows are `pitch` bytes apart, which can exceed `width`, and a
/// negative pitch means the rows are stored bottom-up.
fn copy_pixels(bitmap: &ffi::FT_Bitmap) -> Vec<u8> {
    let width = bitmap.width as usize;
    let rows = bitmap.rows as usize;
    if width == 0 || rows == 0 {
        return Vec::new();
    }
    let pitch = bitmap.pitch.unsigned_abs() as usize;
    let native = unsafe { std::slice::from_raw_parts(bitmap.buffer, pitch * rows) };

    let mut pixels = Vec::with_capacity(width * rows);
    for y in 0..rows {
        let y = if bitmap.pitch < 0 { rows - 1 - y } else { y };
        pixels.extend_from_slice(&native[y * pitch..y * pitch + width]);
    }
    pixels
}
