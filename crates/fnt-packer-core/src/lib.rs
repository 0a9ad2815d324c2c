//! Core library for the BMFont text-format codec with atlas repacking.
//!
//! - Codec: line grammar + typed `info`/`common`/`page`/`char` records
//! - Model: [`BitmapFont`] slices per-glyph sub-images out of page textures
//! - Save: repacks glyph images through an [`AtlasPacker`] and re-serializes
//! - Collaborators: texture I/O and packing sit behind traits; the built-in
//!   [`ShelfPacker`] and [`FsTextureIo`] cover the common case.
//!
//! Quick example:
//! ```ignore
//! use fnt_packer_core::prelude::*;
//! use std::path::Path;
//! # fn main() -> fnt_packer_core::Result<()> {
//! let io = FsTextureIo;
//! let mut font = BitmapFont::new();
//! font.load_from_file(Path::new("assets/arial.fnt"), &io)?;
//! let packer = ShelfPacker::new(512);
//! font.save(Path::new("out/arial.fnt"), Path::new("out/arial.png"), &packer, &io)?;
//! # Ok(()) }
//! ```

pub mod error;
pub mod export;
pub mod font;
pub mod grammar;
pub mod images;
pub mod model;
pub mod packer;

pub use error::*;
pub use export::*;
pub use font::*;
pub use images::*;
pub use model::*;
pub use packer::*;

/// Convenience prelude for common types and functions.
/// Importing `fnt_packer_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::error::{FontError, Result};
    pub use crate::font::BitmapFont;
    pub use crate::images::{FsTextureIo, TextureIo, crop};
    pub use crate::model::{Char, Common, Info, Page, Rect};
    pub use crate::packer::{AtlasPacker, GlyphImage, PackedAtlas, Placement, ShelfPacker};
    pub use crate::to_json;
}
