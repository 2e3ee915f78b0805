use std::ptr;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::ffi;
use crate::library::LibraryRc;

/// How the ends of open stroked paths are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl LineCap {
    fn to_raw(self) -> ffi::FT_Stroker_LineCap {
        match self {
            LineCap::Butt => ffi::FT_STROKER_LINECAP_BUTT,
            LineCap::Round => ffi::FT_STROKER_LINECAP_ROUND,
            LineCap::Square => ffi::FT_STROKER_LINECAP_SQUARE,
        }
    }
}

/// How corners between stroked segments are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
    Round,
    Bevel,
    /// Mitered corner, beveled once the miter limit is exceeded.
    MiterVariable,
    /// Mitered corner, clipped at the miter limit.
    MiterFixed,
}

impl LineJoin {
    fn to_raw(self) -> ffi::FT_Stroker_LineJoin {
        match self {
            LineJoin::Round => ffi::FT_STROKER_LINEJOIN_ROUND,
            LineJoin::Bevel => ffi::FT_STROKER_LINEJOIN_BEVEL,
            LineJoin::MiterVariable => ffi::FT_STROKER_LINEJOIN_MITER_VARIABLE,
            LineJoin::MiterFixed => ffi::FT_STROKER_LINEJOIN_MITER_FIXED,
        }
    }
}

/// An outline-expansion tool for producing stroked glyph variants.
/// Created by [`crate::Library::new_stroker`], configured with
/// [`Stroker::set`], and reusable across any number of glyphs.
pub struct Stroker {
    raw: ffi::FT_Stroker,
    _library: Rc<LibraryRc>,
}

impl Stroker {
    pub(crate) fn new(library: Rc<LibraryRc>) -> Result<Stroker> {
        let mut raw = ptr::null_mut();
        let err = unsafe { ffi::FT_Stroker_New(library.raw(), &mut raw) };
        if err != ffi::FT_Err_Ok {
            return Err(Error::NewStroker(err));
        }
        Ok(Stroker {
            raw,
            _library: library,
        })
    }

    /// Configures the stroke. `radius` is in the units of the outlines it
    /// will be applied to (26.6 pixels for glyphs loaded at a pixel size),
    /// `miter_limit` is 16.16 fixed point. The native call reports no
    /// failures.
    pub fn set(&mut self, radius: i64, cap: LineCap, join: LineJoin, miter_limit: i64) {
        unsafe {
            ffi::FT_Stroker_Set(
                self.raw,
                radius as ffi::FT_Fixed,
                cap.to_raw(),
                join.to_raw(),
                miter_limit as ffi::FT_Fixed,
            );
        }
    }

    pub(crate) fn raw(&self) -> ffi::FT_Stroker {
        self.raw
    }
}

impl Drop for Stroker {
    fn drop(&mut self) {
        unsafe { ffi::FT_Stroker_Done(self.raw) };
    }
}
