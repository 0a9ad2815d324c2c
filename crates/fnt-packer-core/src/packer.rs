//! Atlas-packing collaborator seam.
//!
//! The font model does not choose glyph placement; it hands a collection of
//! named rasters to an [`AtlasPacker`] and redistributes the returned
//! placements. [`ShelfPacker`] is the built-in implementation; anything that
//! can place named rectangles on one page can stand in for it.

use crate::error::{FontError, Result};
use crate::model::Rect;
use image::RgbaImage;

/// One named raster handed to the packer.
pub struct GlyphImage {
    pub name: String,
    pub image: RgbaImage,
}

/// Where one input raster ended up on the packed page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub name: String,
    pub frame: Rect,
}

/// A freshly composed atlas page plus one placement per input.
#[derive(Debug)]
pub struct PackedAtlas {
    pub texture: RgbaImage,
    pub placements: Vec<Placement>,
}

/// Packs a collection of named rasters onto a single new atlas page.
pub trait AtlasPacker {
    fn pack(&self, glyphs: Vec<GlyphImage>) -> Result<PackedAtlas>;
}

/// Row-based shelf placement: glyphs go left to right in input order and
/// wrap to a new shelf when the configured width is exhausted. Simple and
/// deterministic, which is what glyph-sized inputs need.
#[derive(Debug, Clone)]
pub struct ShelfPacker {
    pub max_width: u32,
    /// Blank pixels between neighboring glyphs, both axes.
    pub padding: u32,
    /// Round the final page dimensions up to powers of two.
    pub power_of_two: bool,
}

impl Default for ShelfPacker {
    fn default() -> Self {
        Self {
            max_width: 512,
            padding: 1,
            power_of_two: false,
        }
    }
}

impl ShelfPacker {
    pub fn new(max_width: u32) -> Self {
        Self {
            max_width,
            ..Self::default()
        }
    }
}

impl AtlasPacker for ShelfPacker {
    fn pack(&self, glyphs: Vec<GlyphImage>) -> Result<PackedAtlas> {
        let mut placements = Vec::with_capacity(glyphs.len());
        let mut cursor_x = 0u32;
        let mut cursor_y = 0u32;
        let mut shelf_h = 0u32;

        for glyph in &glyphs {
            let (w, h) = glyph.image.dimensions();
            if w > self.max_width {
                return Err(FontError::OutOfSpace(glyph.name.clone()));
            }
            if cursor_x + w > self.max_width {
                cursor_x = 0;
                cursor_y += shelf_h + self.padding;
                shelf_h = 0;
            }
            placements.push(Placement {
                name: glyph.name.clone(),
                frame: Rect::new(cursor_x, cursor_y, w, h),
            });
            cursor_x += w + self.padding;
            shelf_h = shelf_h.max(h);
        }

        let (page_w, page_h) = self.page_size(&placements);
        let mut texture = RgbaImage::new(page_w, page_h);
        for (glyph, placement) in glyphs.iter().zip(&placements) {
            blit(&glyph.image, &mut texture, placement.frame.x, placement.frame.y);
        }

        Ok(PackedAtlas {
            texture,
            placements,
        })
    }
}

impl ShelfPacker {
    fn page_size(&self, placements: &[Placement]) -> (u32, u32) {
        let mut page_w = 0u32;
        let mut page_h = 0u32;
        for p in placements {
            if p.frame.w > 0 && p.frame.h > 0 {
                page_w = page_w.max(p.frame.right() + 1);
                page_h = page_h.max(p.frame.bottom() + 1);
            }
        }
        if self.power_of_two {
            page_w = next_pow2(page_w.max(1));
            page_h = next_pow2(page_h.max(1));
        }
        (page_w.max(1), page_h.max(1))
    }
}

fn next_pow2(mut v: u32) -> u32 {
    if v <= 1 {
        return 1;
    }
    v -= 1;
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    v |= v >> 8;
    v |= v >> 16;
    v + 1
}

fn blit(src: &RgbaImage, canvas: &mut RgbaImage, dx: u32, dy: u32) {
    let (cw, ch) = canvas.dimensions();
    let (sw, sh) = src.dimensions();
    for yy in 0..sh {
        for xx in 0..sw {
            if dx + xx < cw && dy + yy < ch {
                canvas.put_pixel(dx + xx, dy + yy, *src.get_pixel(xx, yy));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_pow2_rounds_up() {
        assert_eq!(next_pow2(0), 1);
        assert_eq!(next_pow2(1), 1);
        assert_eq!(next_pow2(3), 4);
        assert_eq!(next_pow2(64), 64);
        assert_eq!(next_pow2(65), 128);
    }
}
