#![allow(dead_code)]

use fnt_packer_core::prelude::*;
use image::{Rgba, RgbaImage};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// In-memory stand-in for the texture collaborator. Loads are served from
/// the map; writes land in the same map, so a save can feed a reload.
#[derive(Default)]
pub struct MemoryIo {
    pub images: RefCell<HashMap<PathBuf, RgbaImage>>,
}

impl MemoryIo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_texture(path: &str, image: RgbaImage) -> Self {
        let io = Self::new();
        io.insert(path, image);
        io
    }

    pub fn insert(&self, path: &str, image: RgbaImage) {
        self.images
            .borrow_mut()
            .insert(PathBuf::from(path), image);
    }

    pub fn get(&self, path: &str) -> Option<RgbaImage> {
        self.images.borrow().get(Path::new(path)).cloned()
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<_> = self.images.borrow().keys().cloned().collect();
        paths.sort();
        paths
    }
}

impl TextureIo for MemoryIo {
    fn load(&self, path: &Path) -> fnt_packer_core::Result<RgbaImage> {
        self.images
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| FontError::TextureLoadFailed {
                path: path.to_path_buf(),
                source: image::ImageError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no such texture",
                )),
            })
    }

    fn write(&self, image: &RgbaImage, path: &Path) -> fnt_packer_core::Result<()> {
        self.images
            .borrow_mut()
            .insert(path.to_path_buf(), image.clone());
        Ok(())
    }
}

/// Packer that ignores its inputs and returns a fixed placement list on a
/// 64x64 page. Tests script it with whatever geometry the scenario needs.
pub struct ScriptedPacker(pub Vec<Placement>);

impl ScriptedPacker {
    pub fn placing(frames: &[(&str, Rect)]) -> Self {
        Self(
            frames
                .iter()
                .map(|(name, frame)| Placement {
                    name: (*name).to_string(),
                    frame: *frame,
                })
                .collect(),
        )
    }

    /// Identity repack: every char keeps its current rectangle.
    pub fn identity(font: &BitmapFont, page: usize) -> Self {
        Self(
            font.pages()[page]
                .chars
                .iter()
                .map(|ch| Placement {
                    name: ch.letter.clone(),
                    frame: ch.rect(),
                })
                .collect(),
        )
    }
}

impl AtlasPacker for ScriptedPacker {
    fn pack(&self, _glyphs: Vec<GlyphImage>) -> fnt_packer_core::Result<PackedAtlas> {
        Ok(PackedAtlas {
            texture: RgbaImage::new(64, 64),
            placements: self.0.clone(),
        })
    }
}

/// Texture where each pixel encodes its own coordinates, so any crop can be
/// verified by inspecting a single pixel.
pub fn coord_texture(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_fn(w, h, |x, y| Rgba([x as u8, y as u8, 0, 255]))
}

/// Clone of a char with the runtime-only sub-image removed, for
/// record-level equality checks.
pub fn bare(ch: &Char) -> Char {
    Char {
        image: None,
        ..ch.clone()
    }
}
