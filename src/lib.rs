//! Smalt is a safe binding to the FreeType font rasterization library.
//!
//! Every operation forwards directly to the native library; Smalt only
//! marshals arguments and results across the boundary and ties native handle
//! lifetimes to Rust ownership. [`Library`] is an explicit context object
//! created once and threaded into every operation, faces and strokers are
//! released when dropped, and the stroke/rasterize calls that transfer
//! ownership consume their [`Glyph`] receiver instead of taking a destroy
//! flag.
//!
//! ```no_run
//! # fn main() -> smalt::Result<()> {
//! let library = smalt::Library::init()?;
//! let mut face = library.new_face("regular.ttf", 0)?;
//! face.set_char_size(0, 16 * 64, 96, 96)?;
//! let index = face.char_index('A' as u32);
//! let bitmap = face.load_glyph_rendered(index)?;
//! assert_eq!(bitmap.pixels.len(), (bitmap.width * bitmap.rows) as usize);
//! # Ok(())
//! # }
//! ```

#![deny(unreachable_pub)]

pub mod ffi;

mod bitmap;
mod error;
mod face;
mod ffi_string;
mod glyph;
mod library;
mod stroker;

pub use bitmap::GlyphBitmap;
pub use error::{Error, Result};
pub use face::{Face, KerningMode};
pub use glyph::Glyph;
pub use library::Library;
pub use stroker::{LineCap, LineJoin, Stroker};
