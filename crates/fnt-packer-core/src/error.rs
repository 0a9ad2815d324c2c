use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FontError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("second `{0}` record in one description")]
    DuplicateRecord(&'static str),
    #[error("`char` record before any `page` record")]
    OrphanChar,
    #[error("failed to load page texture {}: {source}", path.display())]
    TextureLoadFailed {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("page {0} has no texture loaded")]
    NoTextureLoaded(u32),
    #[error("font has no `info` record")]
    MissingInfo,
    #[error("font has no `common` record")]
    MissingCommon,
    #[error("packed glyph \"{0}\" not found in the original font")]
    UnmatchedGlyph(String),
    #[error("char \"{0}\" has no glyph image to pack")]
    MissingGlyphImage(String),
    #[error("crop rect {x},{y} {w}x{h} exceeds texture bounds {tex_w}x{tex_h}")]
    CropOutOfBounds {
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        tex_w: u32,
        tex_h: u32,
    },
    #[error("glyph \"{0}\" does not fit the atlas width")]
    OutOfSpace(String),
}

pub type Result<T> = std::result::Result<T, FontError>;
