use crate::grammar::LineEncoder;
use image::RgbaImage;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Axis-aligned rectangle (pixels). `x,y` is top-left; `w,h` are sizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
    /// Inclusive right edge coordinate (`x + w - 1`).
    pub fn right(&self) -> u32 {
        self.x + self.w.saturating_sub(1)
    }
    /// Inclusive bottom edge coordinate (`y + h - 1`).
    pub fn bottom(&self) -> u32 {
        self.y + self.h.saturating_sub(1)
    }
}

/// The `info` record: face metadata, style flags, padding and spacing.
///
/// Field declaration order is the emission order of [`Info::encode`]. The
/// flag fields are decode-only: the format drops booleans on save.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Info {
    pub face: String,
    pub size: i32,
    pub stretch_h: i32,
    pub charset: String,
    pub bold: bool,
    pub italic: bool,
    pub aa: bool,
    pub unicode: bool,
    pub smooth: bool,
    /// Top, right, bottom, left.
    pub padding: [u32; 4],
    /// Horizontal, vertical.
    pub spacing: [u32; 2],
}

impl Default for Info {
    fn default() -> Self {
        Self {
            face: String::new(),
            size: 1,
            stretch_h: 1,
            charset: String::new(),
            bold: false,
            italic: false,
            aa: false,
            unicode: false,
            smooth: false,
            padding: [0; 4],
            spacing: [0; 2],
        }
    }
}

impl Info {
    pub(crate) fn decode(pairs: &[(&str, &str)]) -> Self {
        let mut info = Self::default();
        for &(key, value) in pairs {
            match key {
                "face" => info.face = value.to_string(),
                "size" => info.size = num(value),
                "stretchH" => info.stretch_h = num(value),
                "charset" => info.charset = value.to_string(),
                "bold" => info.bold = flag(value),
                "italic" => info.italic = flag(value),
                "aa" => info.aa = flag(value),
                "unicode" => info.unicode = flag(value),
                "smooth" => info.smooth = flag(value),
                "padding" => info.padding = array(value),
                "spacing" => info.spacing = array(value),
                _ => warn!("unknown info command key: {key}"),
            }
        }
        info
    }

    pub fn encode(&self) -> String {
        LineEncoder::new("info")
            .str("face", &self.face)
            .int("size", self.size)
            .int("stretchH", self.stretch_h)
            .str("charset", &self.charset)
            .list("padding", &self.padding)
            .list("spacing", &self.spacing)
            .finish()
    }
}

/// The `common` record: line metrics and the declared atlas dimensions.
///
/// `packed` is decode-only, like the `info` flags. The `pages` key is
/// recognized but ignored — the page count is derived from the `page`
/// records actually present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Common {
    pub line_height: i32,
    pub base: i32,
    pub scale_w: i32,
    pub scale_h: i32,
    pub packed: bool,
}

impl Default for Common {
    fn default() -> Self {
        Self {
            line_height: 1,
            base: 1,
            scale_w: 1,
            scale_h: 1,
            packed: false,
        }
    }
}

impl Common {
    pub(crate) fn decode(pairs: &[(&str, &str)]) -> Self {
        let mut common = Self::default();
        for &(key, value) in pairs {
            match key {
                "lineHeight" => common.line_height = num(value),
                "pages" => {}
                "base" => common.base = num(value),
                "scaleW" => common.scale_w = num(value),
                "scaleH" => common.scale_h = num(value),
                "packed" => common.packed = flag(value),
                _ => warn!("unknown common command key: {key}"),
            }
        }
        common
    }

    pub fn encode(&self) -> String {
        LineEncoder::new("common")
            .int("lineHeight", self.line_height)
            .int("base", self.base)
            .int("scaleW", self.scale_w)
            .int("scaleH", self.scale_h)
            .finish()
    }
}

/// One atlas page: its id, the texture path stored in the description
/// (relative to the description file), the chars placed on it, and the
/// decoded texture while the font is in memory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Page {
    pub id: u32,
    pub file: String,
    pub chars: Vec<Char>,
    #[serde(skip)]
    pub texture: Option<RgbaImage>,
}

impl Page {
    pub(crate) fn decode(pairs: &[(&str, &str)]) -> Self {
        let mut page = Self::default();
        for &(key, value) in pairs {
            match key {
                "id" => page.id = num(value),
                "file" => page.file = value.to_string(),
                _ => warn!("unknown page command key: {key}"),
            }
        }
        page
    }

    pub fn encode(&self) -> String {
        LineEncoder::new("page")
            .int("id", self.id)
            .str("file", &self.file)
            .finish()
    }
}

/// One glyph record: placement rectangle within its page's atlas, origin
/// offsets, advance, owning page index, channel mask and the glyph's
/// identifying letter. `image` holds the cropped sub-image at runtime.
///
/// Field declaration order is the emission order of [`Char::encode`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Char {
    pub id: u32,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub xoffset: i32,
    pub yoffset: i32,
    pub xadvance: i32,
    pub page: usize,
    pub chnl: u32,
    pub letter: String,
    #[serde(skip)]
    pub image: Option<RgbaImage>,
}

impl Char {
    /// `cur_page` is the index of the most recently started page; it is the
    /// default for chars that carry no explicit `page=` key.
    pub(crate) fn decode(pairs: &[(&str, &str)], cur_page: usize) -> Self {
        let mut ch = Self {
            page: cur_page,
            ..Self::default()
        };
        for &(key, value) in pairs {
            match key {
                "id" => ch.id = num(value),
                "x" => ch.x = num(value),
                "y" => ch.y = num(value),
                "width" => ch.width = num(value),
                "height" => ch.height = num(value),
                "xoffset" => ch.xoffset = num(value),
                "yoffset" => ch.yoffset = num(value),
                "xadvance" => ch.xadvance = num(value),
                "page" => ch.page = num(value),
                "chnl" => ch.chnl = num(value),
                "letter" => ch.letter = value.to_string(),
                _ => warn!("unknown char command key: {key}"),
            }
        }
        if ch.page != cur_page {
            // Stored as declared; the source is trusted even when the index
            // does not name the page this char was appended under.
            warn!(
                "char \"{}\" declares page {} but was read under page {cur_page}",
                ch.letter, ch.page
            );
        }
        ch
    }

    pub fn encode(&self) -> String {
        LineEncoder::new("char")
            .int("id", self.id)
            .int("x", self.x)
            .int("y", self.y)
            .int("width", self.width)
            .int("height", self.height)
            .int("xoffset", self.xoffset)
            .int("yoffset", self.yoffset)
            .int("xadvance", self.xadvance)
            .int("page", self.page)
            .int("chnl", self.chnl)
            .str("letter", &self.letter)
            .finish()
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

fn num<T: std::str::FromStr + Default>(value: &str) -> T {
    value.trim().parse().unwrap_or_default()
}

/// Only the literal token `1` means true.
fn flag(value: &str) -> bool {
    value == "1"
}

/// Comma-separated integers, zero-padded and truncated to the target arity.
fn array<const N: usize>(value: &str) -> [u32; N] {
    let mut out = [0u32; N];
    for (slot, token) in out.iter_mut().zip(value.split(',')) {
        *slot = num(token);
    }
    out
}
