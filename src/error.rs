use crate::ffi;

/// One variant per fallible FreeType entry point the binding forwards to.
///
/// The original failure surface was a plain component-qualified string; the
/// raw native error code is kept alongside it so callers can tell an
/// out-of-memory apart from a bad glyph index without re-deriving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("FreeType.init: failure (error {0})")]
    Init(ffi::FT_Error),
    #[error("FreeType.newFace: failure (error {0})")]
    NewFace(ffi::FT_Error),
    #[error("Face.setCharSize: failure (error {0})")]
    SetCharSize(ffi::FT_Error),
    #[error("Face.loadGlyph: failure (error {0})")]
    LoadGlyph(ffi::FT_Error),
    #[error("Face.getKerning: failure (error {0})")]
    Kerning(ffi::FT_Error),
    #[error("FreeType.newStroker: failure (error {0})")]
    NewStroker(ffi::FT_Error),
    #[error("Face.getGlyph: failure (error {0})")]
    GetGlyph(ffi::FT_Error),
    #[error("Glyph.stroke: failure (error {0})")]
    Stroke(ffi::FT_Error),
    #[error("Glyph.toBitmap: failure (error {0})")]
    ToBitmap(ffi::FT_Error),
}

impl Error {
    /// The native `FT_Error` code reported by FreeType.
    pub fn code(&self) -> ffi::FT_Error {
        match *self {
            Error::Init(code)
            | Error::NewFace(code)
            | Error::SetCharSize(code)
            | Error::LoadGlyph(code)
            | Error::Kerning(code)
            | Error::NewStroker(code)
            | Error::GetGlyph(code)
            | Error::Stroke(code)
            | Error::ToBitmap(code) => code,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_component_qualified() {
        let err = Error::LoadGlyph(ffi::FT_Err_Invalid_Glyph_Index);
        assert_eq!(err.to_string(), "Face.loadGlyph: failure (error 16)");
        assert_eq!(err.code(), 16);

        let err = Error::Init(ffi::FT_Err_Out_Of_Memory);
        assert!(err.to_string().starts_with("FreeType.init: failure"));
    }
}
