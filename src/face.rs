use std::ffi::CStr;
use std::path::Path;
use std::ptr;
use std::rc::Rc;

use crate::bitmap::GlyphBitmap;
use crate::error::{Error, Result};
use crate::ffi;
use crate::ffi_string::CFfiString;
use crate::glyph::Glyph;
use crate::library::LibraryRc;

/// How kerning distances are scaled before being returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KerningMode {
    /// Scaled and grid-fitted pixel distances (26.6 fixed point).
    Default,
    /// Scaled but not grid-fitted.
    Unfitted,
    /// Raw font-unit distances.
    Unscaled,
}

impl KerningMode {
    fn to_raw(self) -> ffi::FT_Kerning_Mode {
        match self {
            KerningMode::Default => ffi::FT_KERNING_DEFAULT,
            KerningMode::Unfitted => ffi::FT_KERNING_UNFITTED,
            KerningMode::Unscaled => ffi::FT_KERNING_UNSCALED,
        }
    }
}

/// A loaded font face.
///
/// A face carries a single mutable glyph slot: each `load_glyph*` call
/// overwrites the previous glyph's data in place, which is why those methods
/// take `&mut self`. [`Face::glyph`] snapshots the slot into an
/// independently owned [`Glyph`].
#[derive(Debug)]
pub struct Face {
    raw: ffi::FT_Face,
    library: Rc<LibraryRc>,
}

impl Face {
    pub(crate) fn new(library: Rc<LibraryRc>, path: &Path, face_index: i64) -> Result<Face> {
        let c_path = CFfiString::<[u8; 256]>::new(path);
        let mut raw = ptr::null_mut();
        let err = unsafe {
            ffi::FT_New_Face(
                library.raw(),
                c_path.as_ptr(),
                face_index as ffi::FT_Long,
                &mut raw,
            )
        };
        if err != ffi::FT_Err_Ok {
            return Err(Error::NewFace(err));
        }
        tracing::trace!(path = %path.display(), face_index, "loaded face");
        Ok(Face { raw, library })
    }

    fn face_rec(&self) -> &ffi::FT_FaceRec {
        unsafe { &*self.raw }
    }

    /// Sets the active character size. `width` and `height` are 26.6
    /// fixed-point points (a zero width means "same as height" and vice
    /// versa); the resolutions are in dpi.
    pub fn set_char_size(
        &mut self,
        width: i64,
        height: i64,
        horz_resolution: u32,
        vert_resolution: u32,
    ) -> Result<()> {
        let err = unsafe {
            ffi::FT_Set_Char_Size(
                self.raw,
                width as ffi::FT_F26Dot6,
                height as ffi::FT_F26Dot6,
                horz_resolution,
                vert_resolution,
            )
        };
        if err != ffi::FT_Err_Ok {
            return Err(Error::SetCharSize(err));
        }
        Ok(())
    }

    /// Maps a character code to its glyph index in this face. Returns 0 for
    /// codepoints absent from the face's character map; never fails.
    pub fn char_index(&self, code: u32) -> u32 {
        unsafe { ffi::FT_Get_Char_Index(self.raw, code as ffi::FT_ULong) }
    }

    /// Loads the glyph into the face's slot without rendering it, for later
    /// extraction with [`Face::glyph`].
    pub fn load_glyph(&mut self, glyph_index: u32) -> Result<()> {
        let err = unsafe { ffi::FT_Load_Glyph(self.raw, glyph_index, ffi::FT_LOAD_DEFAULT) };
        if err != ffi::FT_Err_Ok {
            return Err(Error::LoadGlyph(err));
        }
        Ok(())
    }

    /// Loads and rasterizes the glyph in one call, returning a copy of the
    /// slot's bitmap and metrics. Same native entry point as
    /// [`Face::load_glyph`], different render-mode flag.
    pub fn load_glyph_rendered(&mut self, glyph_index: u32) -> Result<GlyphBitmap> {
        let err = unsafe { ffi::FT_Load_Glyph(self.raw, glyph_index, ffi::FT_LOAD_RENDER) };
        if err != ffi::FT_Err_Ok {
            return Err(Error::LoadGlyph(err));
        }
        let slot = unsafe { &*self.face_rec().glyph };
        Ok(GlyphBitmap::from_slot(slot))
    }

    /// The horizontal kerning adjustment between two glyphs, in the units
    /// selected by `mode`. Fails on faces without a kerning table.
    pub fn kerning(&self, left_glyph: u32, right_glyph: u32, mode: KerningMode) -> Result<i64> {
        if !self.has_kerning() {
            return Err(Error::Kerning(ffi::FT_Err_Unimplemented_Feature));
        }
        let mut delta = ffi::FT_Vector::default();
        let err = unsafe {
            ffi::FT_Get_Kerning(self.raw, left_glyph, right_glyph, mode.to_raw(), &mut delta)
        };
        if err != ffi::FT_Err_Ok {
            return Err(Error::Kerning(err));
        }
        Ok(delta.x as i64)
    }

    /// Copies the slot's current glyph out of the face into an independently
    /// owned [`Glyph`]. Call after [`Face::load_glyph`].
    pub fn glyph(&self) -> Result<Glyph> {
        Glyph::from_slot(self.library.clone(), self.face_rec().glyph)
    }

    pub fn has_kerning(&self) -> bool {
        self.face_rec().face_flags & ffi::FT_FACE_FLAG_KERNING != 0
    }

    pub fn num_glyphs(&self) -> i64 {
        self.face_rec().num_glyphs as i64
    }

    pub fn family_name(&self) -> Option<String> {
        unsafe { c_str_field(self.face_rec().family_name) }
    }

    pub fn style_name(&self) -> Option<String> {
        unsafe { c_str_field(self.face_rec().style_name) }
    }
}

impl Drop for Face {
    fn drop(&mut self) {
        let err = unsafe { ffi::FT_Done_Face(self.raw) };
        if err != ffi::FT_Err_Ok {
            tracing::warn!(code = err, "FT_Done_Face failed");
        }
    }
}

unsafe fn c_str_field(ptr: *const libc::c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok().map(str::to_owned)
}
