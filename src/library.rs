use std::path::Path;
use std::ptr;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::face::Face;
use crate::ffi;
use crate::stroker::Stroker;

/// The inner handle, shared by every object created from a [`Library`] so
/// that a face, stroker, or glyph can never outlive the library that
/// allocated it. FreeType is torn down when the last owner goes away.
#[derive(Debug)]
pub(crate) struct LibraryRc {
    raw: ffi::FT_Library,
}

impl LibraryRc {
    pub(crate) fn raw(&self) -> ffi::FT_Library {
        self.raw
    }
}

impl Drop for LibraryRc {
    fn drop(&mut self) {
        let err = unsafe { ffi::FT_Done_FreeType(self.raw) };
        if err != ffi::FT_Err_Ok {
            tracing::warn!(code = err, "FT_Done_FreeType failed");
        }
    }
}

/// An initialized FreeType instance.
///
/// The original binding kept this as hidden process-wide state initialized by
/// an explicit call; here it is an ordinary value threaded into every
/// operation, so use-before-init cannot be expressed.
pub struct Library(Rc<LibraryRc>);

impl Library {
    pub fn init() -> Result<Library> {
        let mut raw = ptr::null_mut();
        let err = unsafe { ffi::FT_Init_FreeType(&mut raw) };
        if err != ffi::FT_Err_Ok {
            return Err(Error::Init(err));
        }
        let library = Library(Rc::new(LibraryRc { raw }));
        let (major, minor, patch) = library.version();
        tracing::debug!(major, minor, patch, "initialized FreeType");
        Ok(library)
    }

    /// The (major, minor, patch) version of the linked FreeType library.
    pub fn version(&self) -> (i32, i32, i32) {
        let mut version = (0, 0, 0);
        unsafe {
            ffi::FT_Library_Version(self.0.raw, &mut version.0, &mut version.1, &mut version.2);
        }
        version
    }

    /// Loads the face at `face_index` from the font file at `path`.
    /// `face_index` selects within multi-face collections; it is 0 for
    /// ordinary single-face fonts.
    pub fn new_face<P: AsRef<Path>>(&self, path: P, face_index: i64) -> Result<Face> {
        Face::new(self.0.clone(), path.as_ref(), face_index)
    }

    /// Creates an unconfigured stroker; call [`Stroker::set`] before use.
    pub fn new_stroker(&self) -> Result<Stroker> {
        Stroker::new(self.0.clone())
    }
}
