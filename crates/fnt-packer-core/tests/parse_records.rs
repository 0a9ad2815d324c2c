mod common;

use common::*;
use fnt_packer_core::prelude::*;
use std::path::Path;

fn parse(text: &str, io: &MemoryIo) -> BitmapFont {
    let mut font = BitmapFont::new();
    font.parse(text, Path::new(""), io).expect("parse");
    font
}

#[test]
fn full_description_decodes() {
    let io = MemoryIo::with_texture("sheet.png", coord_texture(8, 8));
    let text = "\
info face=\"Arial\" size=32 bold=1 italic=0 charset=\"\" unicode=1 stretchH=100 smooth=1 aa=1 padding=1,2,3,4 spacing=1,1
common lineHeight=36 base=29 scaleW=256 scaleH=256 pages=1 packed=0
page id=0 file=\"sheet.png\"
chars count=1
char id=65 x=2 y=3 width=4 height=5 xoffset=-1 yoffset=6 xadvance=20 page=0 chnl=15 letter=\"A\"
";
    let font = parse(text, &io);

    let info = font.info().expect("info");
    assert_eq!(info.face, "Arial");
    assert_eq!(info.size, 32);
    assert_eq!(info.stretch_h, 100);
    assert!(info.bold && info.unicode && info.smooth && info.aa);
    assert!(!info.italic);
    assert_eq!(info.padding, [1, 2, 3, 4]);
    assert_eq!(info.spacing, [1, 1]);

    let common = font.common().expect("common");
    assert_eq!(common.line_height, 36);
    assert_eq!(common.base, 29);
    assert_eq!(common.scale_w, 256);
    assert_eq!(common.scale_h, 256);
    assert!(!common.packed);

    assert_eq!(font.pages().len(), 1);
    let page = &font.pages()[0];
    assert_eq!(page.id, 0);
    assert_eq!(page.file, "sheet.png");
    assert!(page.texture.is_some());

    assert_eq!(page.chars.len(), 1);
    let ch = &page.chars[0];
    assert_eq!(ch.id, 65);
    assert_eq!(ch.rect(), Rect::new(2, 3, 4, 5));
    assert_eq!(ch.xoffset, -1);
    assert_eq!(ch.yoffset, 6);
    assert_eq!(ch.xadvance, 20);
    assert_eq!(ch.page, 0);
    assert_eq!(ch.chnl, 15);
    assert_eq!(ch.letter, "A");
}

#[test]
fn defaults_apply_to_unspecified_keys() {
    let io = MemoryIo::new();
    let font = parse("info\ncommon\n", &io);

    let info = font.info().expect("info");
    assert_eq!(info.face, "");
    assert_eq!(info.size, 1);
    assert_eq!(info.stretch_h, 1);
    assert!(!info.bold && !info.italic && !info.aa && !info.unicode && !info.smooth);
    assert_eq!(info.padding, [0; 4]);
    assert_eq!(info.spacing, [0; 2]);

    let common = font.common().expect("common");
    assert_eq!(common.line_height, 1);
    assert_eq!(common.base, 1);
    assert_eq!(common.scale_w, 1);
    assert_eq!(common.scale_h, 1);
}

#[test]
fn padding_and_spacing_pad_with_zeros() {
    let io = MemoryIo::new();
    let font = parse("info padding=7,8 spacing=5\n", &io);
    let info = font.info().expect("info");
    assert_eq!(info.padding, [7, 8, 0, 0]);
    assert_eq!(info.spacing, [5, 0]);
}

#[test]
fn only_literal_one_is_true() {
    let io = MemoryIo::new();
    let font = parse("info bold=1 italic=0 smooth=true aa=\n", &io);
    let info = font.info().expect("info");
    assert!(info.bold);
    assert!(!info.italic);
    assert!(!info.smooth);
    assert!(!info.aa);
}

#[test]
fn unknown_keys_and_commands_are_ignored() {
    let io = MemoryIo::new();
    let text = "\
info face=\"X\" glowing=1
common lineHeight=10 pages=99

kernings count=0
kerning first=1 second=2 amount=-1
";
    let font = parse(text, &io);
    assert_eq!(font.info().expect("info").face, "X");
    assert_eq!(font.common().expect("common").line_height, 10);
    assert!(font.pages().is_empty());
}

#[test]
fn chars_count_line_is_a_no_op() {
    let io = MemoryIo::new();
    let font = parse("info\ncommon\npage id=0\nchars count=42\n", &io);
    assert_eq!(font.char_count(), 0);
}

#[test]
fn char_defaults_to_most_recent_page() {
    let io = MemoryIo::new();
    let text = "\
page id=0
char id=1 letter=\"a\"
page id=1
char id=2 letter=\"b\"
char id=3 letter=\"c\" page=0
";
    let font = parse(text, &io);
    assert_eq!(font.pages()[0].chars[0].page, 0);
    // default is the page the char appears under
    assert_eq!(font.pages()[1].chars[0].page, 1);
    // an explicit index is stored as declared, even when it names another page
    assert_eq!(font.pages()[1].chars[1].page, 0);
}

#[test]
fn pages_append_in_file_order_without_dedup() {
    let io = MemoryIo::new();
    let font = parse("page id=3\npage id=3\npage id=1\n", &io);
    let ids: Vec<u32> = font.pages().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 3, 1]);
}

#[test]
fn page_without_file_loads_no_texture() {
    let io = MemoryIo::new();
    let font = parse("page id=0\n", &io);
    assert!(font.pages()[0].texture.is_none());
}
