//! Packed encoding of the tiles used by a two-word move
//!
//! Each used tile contributes one nibble holding its 1-based index (1-14).
//! Word 1's nibbles come first, then a single `0xF` delimiter (only when
//! word 2 is non-empty), then word 2's nibbles. The nibble stream is packed
//! MSB-first into the low end of a `u64`, so unused high nibbles are zero.
//!
//! ```text
//! word1 = [0, 1, 2], word2 = [3, 4]
//! nibbles: 1 2 3 F 4 5  ->  0x123F45
//! ```
//!
//! Nibble `0x0` never encodes a tile: it is padding before the stream starts
//! and invalid anywhere inside it.

use rustc_hash::FxHashSet;
use std::fmt;

/// Largest rack the encoding can address
pub const MAX_TILES: usize = 14;

const DELIMITER: u8 = 0xF;

/// Error type for encoding or decoding a tile selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubsetError {
    InvalidTileCount(usize),
    InvalidNibble(u8),
    MultipleDelimiters,
    TileIndexOutOfRange(usize),
    DuplicateTileIndex(usize),
}

impl fmt::Display for SubsetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTileCount(count) => {
                write!(f, "Tile count must be between 1 and {MAX_TILES}, got {count}")
            }
            Self::InvalidNibble(nibble) => write!(f, "Invalid nibble {nibble:#x} in encoding"),
            Self::MultipleDelimiters => write!(f, "Encoding contains more than one word delimiter"),
            Self::TileIndexOutOfRange(index) => write!(f, "Tile index {index} out of range"),
            Self::DuplicateTileIndex(index) => write!(f, "Tile index {index} used more than once"),
        }
    }
}

impl std::error::Error for SubsetError {}

/// Encode two words of 0-based tile indices
///
/// # Errors
///
/// Returns `SubsetError::TileIndexOutOfRange` for an index of 14 or more and
/// `SubsetError::DuplicateTileIndex` if a tile appears twice across both words.
///
/// # Examples
/// ```
/// use wordiest::core::subset;
///
/// assert_eq!(subset::encode(&[0, 1, 2], &[3, 4]).unwrap(), 0x123F45);
/// assert_eq!(subset::encode(&[13], &[]).unwrap(), 0xE);
/// ```
pub fn encode(word1: &[usize], word2: &[usize]) -> Result<u64, SubsetError> {
    let mut used = FxHashSet::default();
    let mut encoded = 0u64;

    let mut push_word = |word: &[usize], encoded: &mut u64| -> Result<(), SubsetError> {
        for &index in word {
            if index >= MAX_TILES {
                return Err(SubsetError::TileIndexOutOfRange(index));
            }
            if !used.insert(index) {
                return Err(SubsetError::DuplicateTileIndex(index));
            }
            *encoded = (*encoded << 4) | (index as u64 + 1);
        }
        Ok(())
    };

    push_word(word1, &mut encoded)?;
    if !word2.is_empty() {
        encoded = (encoded << 4) | u64::from(DELIMITER);
    }
    push_word(word2, &mut encoded)?;

    Ok(encoded)
}

/// Decode an encoding back into (word 1, word 2) 0-based tile indices
///
/// # Errors
///
/// Returns a `SubsetError` if `tile_count` is not in `1..=14`, or the nibble
/// stream contains a zero nibble, a second delimiter, an index past
/// `tile_count`, or a repeated index.
///
/// # Examples
/// ```
/// use wordiest::core::subset;
///
/// let (word1, word2) = subset::decode(0x123F45, 14).unwrap();
/// assert_eq!(word1, vec![0, 1, 2]);
/// assert_eq!(word2, vec![3, 4]);
/// ```
pub fn decode(encoded: u64, tile_count: usize) -> Result<(Vec<usize>, Vec<usize>), SubsetError> {
    if tile_count == 0 || tile_count > MAX_TILES {
        return Err(SubsetError::InvalidTileCount(tile_count));
    }

    let mut word1 = Vec::with_capacity(7);
    let mut word2 = Vec::with_capacity(7);
    let mut used = FxHashSet::default();
    let mut started = false;
    let mut saw_delimiter = false;

    for shift in (0..16).rev().map(|n| n * 4) {
        let nibble = ((encoded >> shift) & 0xF) as u8;

        if !started {
            // Leading zero nibbles are padding
            if nibble == 0 {
                continue;
            }
            started = true;
        }

        if nibble == DELIMITER {
            if saw_delimiter {
                return Err(SubsetError::MultipleDelimiters);
            }
            saw_delimiter = true;
            continue;
        }

        if nibble == 0 {
            return Err(SubsetError::InvalidNibble(nibble));
        }

        let index = usize::from(nibble) - 1;
        if index >= tile_count {
            return Err(SubsetError::TileIndexOutOfRange(index));
        }
        if !used.insert(index) {
            return Err(SubsetError::DuplicateTileIndex(index));
        }

        if saw_delimiter {
            word2.push(index);
        } else {
            word1.push(index);
        }
    }

    Ok((word1, word2))
}
