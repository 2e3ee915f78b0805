use std::mem;
use std::ptr;
use std::rc::Rc;

use crate::bitmap::GlyphBitmap;
use crate::error::{Error, Result};
use crate::ffi;
use crate::library::LibraryRc;
use crate::stroker::Stroker;

/// An independently owned snapshot of one glyph's outline, detached from the
/// face's glyph slot.
///
/// The original binding passed a destroy-source flag into the stroke and
/// bitmap-conversion calls and left handle reuse as a runtime hazard; here
/// ownership transfer is a move, so using a consumed glyph is a compile
/// error.
pub struct Glyph {
    raw: ffi::FT_Glyph,
    library: Rc<LibraryRc>,
}

impl Glyph {
    pub(crate) fn from_slot(library: Rc<LibraryRc>, slot: ffi::FT_GlyphSlot) -> Result<Glyph> {
        let mut raw = ptr::null_mut();
        let err = unsafe { ffi::FT_Get_Glyph(slot, &mut raw) };
        if err != ffi::FT_Err_Ok {
            return Err(Error::GetGlyph(err));
        }
        Ok(Glyph { raw, library })
    }

    /// Replaces this glyph's outline with its stroked version, consuming the
    /// source. On failure the source is released.
    pub fn stroke(self, stroker: &Stroker) -> Result<Glyph> {
        let mut raw = self.raw;
        let err = unsafe { ffi::FT_Glyph_Stroke(&mut raw, stroker.raw(), 1) };
        if err != ffi::FT_Err_Ok {
            // destroy=1 only takes effect on success; self still owns the
            // original and frees it when dropped here.
            return Err(Error::Stroke(err));
        }
        let library = self.library.clone();
        mem::forget(self);
        Ok(Glyph { raw, library })
    }

    /// Like [`Glyph::stroke`] but leaves the source glyph usable.
    pub fn stroked(&self, stroker: &Stroker) -> Result<Glyph> {
        let mut raw = self.raw;
        let err = unsafe { ffi::FT_Glyph_Stroke(&mut raw, stroker.raw(), 0) };
        if err != ffi::FT_Err_Ok {
            return Err(Error::Stroke(err));
        }
        Ok(Glyph {
            raw,
            library: self.library.clone(),
        })
    }

    /// Rasterizes the glyph to an 8-bit coverage bitmap, copied into
    /// host-owned memory.
    ///
    /// Always consumes the glyph. The binding this replaces took a
    /// destroy-source flag here but released the source regardless of its
    /// value; that actual behavior is kept and made explicit as a move.
    pub fn to_bitmap(self) -> Result<GlyphBitmap> {
        let mut raw = self.raw;
        let err = unsafe {
            ffi::FT_Glyph_To_Bitmap(&mut raw, ffi::FT_RENDER_MODE_NORMAL, ptr::null(), 1)
        };
        if err != ffi::FT_Err_Ok {
            return Err(Error::ToBitmap(err));
        }
        // The source was destroyed by the native call; raw now points to a
        // bitmap-format glyph that must be released after the copy-out.
        mem::forget(self);
        let bitmap = unsafe { GlyphBitmap::from_bitmap_glyph(&*(raw as ffi::FT_BitmapGlyph)) };
        unsafe { ffi::FT_Done_Glyph(raw) };
        Ok(bitmap)
    }
}

impl Drop for Glyph {
    fn drop(&mut self) {
        unsafe { ffi::FT_Done_Glyph(self.raw) };
    }
}
