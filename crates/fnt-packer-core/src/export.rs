use crate::font::BitmapFont;
use serde_json::{Value, json};

/// Serialize the whole font as a JSON object `{ info, common, pages }`.
/// Runtime-only fields (page textures, glyph sub-images) are omitted.
/// Suitable for generic tooling that cannot read the line grammar.
pub fn to_json(font: &BitmapFont) -> Value {
    let pages_val = font
        .pages()
        .iter()
        .map(|p| {
            json!({
                "id": p.id,
                "file": &p.file,
                "count": p.chars.len(),
                "chars": &p.chars,
            })
        })
        .collect::<Vec<_>>();
    json!({
        "info": font.info(),
        "common": font.common(),
        "pages": pages_val,
    })
}
