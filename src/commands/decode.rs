//! Words encoding decoder command

use crate::core::subset::{self, MAX_TILES};

/// A decoded words encoding
#[derive(Debug)]
pub struct DecodeResult {
    pub encoding: u64,
    pub tile_count: usize,
    pub word1: Vec<usize>,
    pub word2: Vec<usize>,
}

/// Parse an encoding given as `0x`-prefixed hex or decimal
///
/// # Errors
///
/// Returns an error if the text is not a valid 64-bit number.
///
/// # Examples
/// ```
/// use wordiest::commands::parse_encoding;
///
/// assert_eq!(parse_encoding("0x123F45").unwrap(), 0x123F45);
/// assert_eq!(parse_encoding("291").unwrap(), 0x123);
/// ```
pub fn parse_encoding(text: &str) -> Result<u64, String> {
    let text = text.trim();
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => text.parse(),
    };
    parsed.map_err(|e| format!("Invalid encoding '{text}': {e}"))
}

/// Decode `encoding` for a match of `tile_count` tiles
///
/// # Errors
///
/// Returns an error if the encoding is not a valid selection.
pub fn decode_words(encoding: u64, tile_count: Option<usize>) -> Result<DecodeResult, String> {
    let tile_count = tile_count.unwrap_or(MAX_TILES);
    let (word1, word2) =
        subset::decode(encoding, tile_count).map_err(|e| format!("Cannot decode {encoding:#x}: {e}"))?;

    Ok(DecodeResult {
        encoding,
        tile_count,
        word1,
        word2,
    })
}
