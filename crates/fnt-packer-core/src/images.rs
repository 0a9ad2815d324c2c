//! Image collaborator seam: texture decode/encode behind a trait, plus the
//! bounds-checked copying crop used by the atlas slicer.

use crate::error::{FontError, Result};
use image::{ImageReader, RgbaImage};
use std::path::Path;

/// Loads and writes page textures. The font model only ever talks to this
/// trait; tests substitute an in-memory implementation.
pub trait TextureIo {
    fn load(&self, path: &Path) -> Result<RgbaImage>;
    fn write(&self, image: &RgbaImage, path: &Path) -> Result<()>;
}

/// Filesystem-backed [`TextureIo`] over the `image` crate. Formats are
/// chosen by file extension on write.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsTextureIo;

impl TextureIo for FsTextureIo {
    fn load(&self, path: &Path) -> Result<RgbaImage> {
        let decoded = ImageReader::open(path)
            .map_err(image::ImageError::IoError)
            .and_then(|reader| reader.decode())
            .map_err(|source| FontError::TextureLoadFailed {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(decoded.to_rgba8())
    }

    fn write(&self, image: &RgbaImage, path: &Path) -> Result<()> {
        image.save(path)?;
        Ok(())
    }
}

/// Copies the `x,y,w,h` sub-rectangle of `src` into a new image.
///
/// The result owns its pixels; mutating it never affects `src`. Rectangles
/// reaching outside the source are an error, not a clamp.
pub fn crop(src: &RgbaImage, x: u32, y: u32, w: u32, h: u32) -> Result<RgbaImage> {
    let (tex_w, tex_h) = src.dimensions();
    if x.checked_add(w).is_none_or(|right| right > tex_w)
        || y.checked_add(h).is_none_or(|bottom| bottom > tex_h)
    {
        return Err(FontError::CropOutOfBounds {
            x,
            y,
            w,
            h,
            tex_w,
            tex_h,
        });
    }
    let mut out = RgbaImage::new(w, h);
    for yy in 0..h {
        for xx in 0..w {
            out.put_pixel(xx, yy, *src.get_pixel(x + xx, y + yy));
        }
    }
    Ok(out)
}
