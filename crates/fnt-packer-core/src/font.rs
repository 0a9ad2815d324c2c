//! The in-memory font aggregate and its operations: load a textual
//! description, slice glyph sub-images out of the page textures, and save
//! it back (repack, rewrite placement rectangles, re-serialize).

use crate::error::{FontError, Result};
use crate::grammar::{LineEncoder, parse_line};
use crate::images::{TextureIo, crop};
use crate::model::{Char, Common, Info, Page};
use crate::packer::{AtlasPacker, GlyphImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// One `info` record, one `common` record and the ordered pages with their
/// chars. Rebuilt from scratch at the start of every load; assumes exclusive
/// ownership by one caller for the duration of a load or save.
#[derive(Debug, Default)]
pub struct BitmapFont {
    info: Option<Info>,
    common: Option<Common>,
    pages: Vec<Page>,
}

impl BitmapFont {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&self) -> Option<&Info> {
        self.info.as_ref()
    }

    pub fn common(&self) -> Option<&Common> {
        self.common.as_ref()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn pages_mut(&mut self) -> &mut [Page] {
        &mut self.pages
    }

    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    pub fn set_common(&mut self, common: Common) {
        self.common = Some(common);
    }

    pub fn push_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Appends a char to the most recently started page.
    pub fn push_char(&mut self, ch: Char) -> Result<()> {
        let page = self.pages.last_mut().ok_or(FontError::OrphanChar)?;
        page.chars.push(ch);
        Ok(())
    }

    pub fn char_count(&self) -> usize {
        self.pages.iter().map(|p| p.chars.len()).sum()
    }

    fn reset(&mut self) {
        self.info = None;
        self.common = None;
        self.pages.clear();
    }

    /// Reads a description file, decodes it and slices the glyph images.
    ///
    /// On any failure the model is left in the reset (empty) state; there is
    /// no partially loaded font.
    pub fn load_from_file(&mut self, path: &Path, io: &dyn TextureIo) -> Result<()> {
        self.reset();
        info!("loading from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        let base_dir = path.parent().unwrap_or(Path::new("")).to_path_buf();
        let loaded = self
            .parse(&text, &base_dir, io)
            .and_then(|()| self.slice_textures());
        if let Err(e) = loaded {
            self.reset();
            return Err(e);
        }
        info!("{}: {} chars loaded", path.display(), self.char_count());
        Ok(())
    }

    /// Decodes a description, replacing all prior state. Page texture paths
    /// resolve relative to `base_dir` and load eagerly through `io`.
    ///
    /// Unrecognized commands (`kernings` and friends) and blank lines are
    /// skipped; unrecognized keys only warn. A second `info` or `common`
    /// record, a `char` before any `page`, and a texture that fails to
    /// decode are fatal.
    pub fn parse(&mut self, text: &str, base_dir: &Path, io: &dyn TextureIo) -> Result<()> {
        self.reset();

        let mut info = None;
        let mut common = None;
        let mut pages: Vec<Page> = Vec::new();
        // Explicit index of the most recently started page; the default
        // owner for chars without a `page=` key.
        let mut cur_page: Option<usize> = None;

        for line in text.lines() {
            let (cmd, pairs) = parse_line(line);
            match cmd {
                "info" => {
                    if info.is_some() {
                        return Err(FontError::DuplicateRecord("info"));
                    }
                    info = Some(Info::decode(&pairs));
                }
                "common" => {
                    if common.is_some() {
                        return Err(FontError::DuplicateRecord("common"));
                    }
                    common = Some(Common::decode(&pairs));
                }
                "page" => {
                    let mut page = Page::decode(&pairs);
                    if !page.file.is_empty() {
                        let texture_path = base_dir.join(&page.file);
                        info!("loading texture from {}", texture_path.display());
                        let texture = io.load(&texture_path)?;
                        let (w, h) = texture.dimensions();
                        info!("loaded texture: {w} x {h}");
                        page.texture = Some(texture);
                    }
                    pages.push(page);
                    cur_page = Some(pages.len() - 1);
                }
                "chars" => {}
                "char" => {
                    let cur = cur_page.ok_or(FontError::OrphanChar)?;
                    let ch = Char::decode(&pairs, cur);
                    pages[cur].chars.push(ch);
                }
                _ => {}
            }
        }

        self.info = info;
        self.common = common;
        self.pages = pages;
        Ok(())
    }

    /// Crops one owned sub-image per char out of its page's texture and
    /// attaches it. Sub-images are independent copies; mutating one never
    /// affects the page atlas or sibling chars.
    pub fn slice_textures(&mut self) -> Result<()> {
        for page in &mut self.pages {
            if page.chars.is_empty() {
                continue;
            }
            let texture = page
                .texture
                .as_ref()
                .ok_or(FontError::NoTextureLoaded(page.id))?;
            for ch in &mut page.chars {
                ch.image = Some(crop(texture, ch.x, ch.y, ch.width, ch.height)?);
            }
        }
        Ok(())
    }

    /// Saves the description to `fnt_path`, repacking every page's glyph
    /// images through `packer` and writing the new atlas textures next to
    /// the description.
    ///
    /// The write is not transactional: a failure mid-save leaves the handle
    /// closed over a partially written file.
    pub fn save(
        &mut self,
        fnt_path: &Path,
        texture_path: &Path,
        packer: &dyn AtlasPacker,
        io: &dyn TextureIo,
    ) -> Result<()> {
        info!("saving font to {}", fnt_path.display());
        let fnt_dir = fnt_path.parent().unwrap_or(Path::new("")).to_path_buf();
        let mut out = BufWriter::new(File::create(fnt_path)?);
        self.save_to(&mut out, &fnt_dir, texture_path, packer, io)?;
        out.flush()?;
        Ok(())
    }

    /// The save path against any writer: repacks page by page in declared
    /// order, rewrites each char's rectangle from the packer's placement
    /// (matched by exact letter), enumerates multi-page texture names and
    /// emits the description lines.
    pub fn save_to(
        &mut self,
        out: &mut dyn Write,
        fnt_dir: &Path,
        texture_path: &Path,
        packer: &dyn AtlasPacker,
        io: &dyn TextureIo,
    ) -> Result<()> {
        let info = self.info.as_ref().ok_or(FontError::MissingInfo)?;
        let common = self.common.as_ref().ok_or(FontError::MissingCommon)?;
        out.write_all(info.encode().as_bytes())?;
        out.write_all(common.encode().as_bytes())?;

        let total = self.pages.len();
        for page in &mut self.pages {
            let mut glyphs = Vec::with_capacity(page.chars.len());
            for ch in &page.chars {
                let image = ch
                    .image
                    .clone()
                    .ok_or_else(|| FontError::MissingGlyphImage(ch.letter.clone()))?;
                glyphs.push(GlyphImage {
                    name: ch.letter.clone(),
                    image,
                });
            }

            let packed = packer.pack(glyphs)?;
            for placement in &packed.placements {
                let ch = page
                    .chars
                    .iter_mut()
                    .find(|c| c.letter == placement.name)
                    .ok_or_else(|| FontError::UnmatchedGlyph(placement.name.clone()))?;
                ch.x = placement.frame.x;
                ch.y = placement.frame.y;
                ch.width = placement.frame.w;
                ch.height = placement.frame.h;
            }

            let full_texture_path = enumerate_path(texture_path, page.id, total);
            page.file = relative_to(&full_texture_path, fnt_dir);

            out.write_all(page.encode().as_bytes())?;
            let count_line = LineEncoder::new("chars")
                .int("count", page.chars.len())
                .finish();
            out.write_all(count_line.as_bytes())?;
            for ch in &page.chars {
                out.write_all(ch.encode().as_bytes())?;
            }

            info!(
                "saving page {} texture to {} (referenced as {})",
                page.id,
                full_texture_path.display(),
                page.file
            );
            io.write(&packed.texture, &full_texture_path)?;
        }
        Ok(())
    }
}

/// Single-page fonts keep the caller-supplied texture path; multi-page fonts
/// get the page id inserted into the file stem, before the extension.
fn enumerate_path(base: &Path, id: u32, total: usize) -> PathBuf {
    if total <= 1 {
        return base.to_path_buf();
    }
    let stem = base.file_stem().unwrap_or_default().to_string_lossy();
    let name = match base.extension() {
        Some(ext) => format!("{stem}{id}.{}", ext.to_string_lossy()),
        None => format!("{stem}{id}"),
    };
    base.with_file_name(name)
}

fn relative_to(path: &Path, dir: &Path) -> String {
    let rel = path.strip_prefix(dir).unwrap_or(path);
    rel.to_string_lossy().into_owned()
}
