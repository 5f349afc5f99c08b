//! Sprite decoding for kitty-graphics display
//!
//! The downloaded image is decoded, resized to the fixed presentation size
//! and re-encoded as base64 PNG, ready to be chunked into a kitty escape
//! sequence by the renderer.

use std::io::Cursor;

use base64::{engine::general_purpose, Engine as _};
use image::imageops::FilterType;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fixed presentation size (square) the sprite is resized to.
pub const SPRITE_SIZE: u32 = 200;

/// PNG transmission format id of the kitty graphics protocol.
const KITTY_FORMAT_PNG: u32 = 100;

const KITTY_CHUNK_SIZE: usize = 4096;

/// A decoded, resized sprite: base64-armored PNG plus pixel dimensions
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SpriteData {
    pub payload: String,
    pub width: u32,
    pub height: u32,
}

/// Decode image bytes and resize to [`SPRITE_SIZE`]².
pub fn decode_sprite(bytes: &[u8]) -> Result<SpriteData, String> {
    let image = image::load_from_memory(bytes).map_err(|err| err.to_string())?;
    let resized = image.resize_exact(SPRITE_SIZE, SPRITE_SIZE, FilterType::Nearest);
    let mut encoded = Vec::new();
    resized
        .write_to(&mut Cursor::new(&mut encoded), image::ImageFormat::Png)
        .map_err(|err| err.to_string())?;
    Ok(SpriteData {
        payload: general_purpose::STANDARD.encode(&encoded),
        width: SPRITE_SIZE,
        height: SPRITE_SIZE,
    })
}

/// Build the chunked kitty escape sequence placing the sprite over `cols`
/// by `rows` terminal cells.
pub fn kitty_sequence(sprite: &SpriteData, cols: u16, rows: u16) -> Result<String, String> {
    let mut sequences = String::new();
    let payload = sprite.payload.as_bytes();
    let total_chunks = payload.len().div_ceil(KITTY_CHUNK_SIZE);

    for (index, chunk) in payload.chunks(KITTY_CHUNK_SIZE).enumerate() {
        let more = index + 1 < total_chunks;
        let chunk_str = std::str::from_utf8(chunk).map_err(|err| err.to_string())?;
        if index == 0 {
            let mut params = format!(
                "f={},s={},v={},a=T,t=d",
                KITTY_FORMAT_PNG, sprite.width, sprite.height
            );
            if cols > 0 {
                params.push_str(&format!(",c={cols}"));
            }
            if rows > 0 {
                params.push_str(&format!(",r={rows}"));
            }
            params.push_str(&format!(",m={}", if more { 1 } else { 0 }));
            sequences.push_str(&format!("\x1b_G{params};{chunk_str}\x1b\\"));
        } else {
            sequences.push_str(&format!(
                "\x1b_Gm={};{chunk_str}\x1b\\",
                if more { 1 } else { 0 }
            ));
        }
    }
    Ok(sequences)
}
