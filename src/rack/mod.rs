//! The player's in-progress arrangement of tiles
//!
//! A rack holds tile indices in four rows: the two words being built and two
//! banks of unused tiles. Operations here return new states rather than
//! mutating, so the UI can animate between them.

mod best;
mod reset;
mod shuffle;

pub use best::BestTracker;
pub use reset::reset;
pub use shuffle::{shuffle, shuffle_with};

use crate::core::subset;

/// Tile indices in each row of the rack
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RackState {
    pub word1: Vec<usize>,
    pub word2: Vec<usize>,
    pub bank1: Vec<usize>,
    pub bank2: Vec<usize>,
}

impl RackState {
    /// All `tile_count` tiles in the banks, in order
    ///
    /// # Examples
    /// ```
    /// use wordiest::rack::RackState;
    ///
    /// let rack = RackState::new(5);
    /// assert_eq!(rack.bank1, vec![0, 1, 2]);
    /// assert_eq!(rack.bank2, vec![3, 4]);
    /// assert!(rack.word1.is_empty());
    /// ```
    #[must_use]
    pub fn new(tile_count: usize) -> Self {
        let (bank1, bank2) = split_banks((0..tile_count).collect());
        Self {
            word1: Vec::new(),
            word2: Vec::new(),
            bank1,
            bank2,
        }
    }

    /// Rack with the given words placed and every other tile banked
    ///
    /// # Examples
    /// ```
    /// use wordiest::rack::RackState;
    ///
    /// let rack = RackState::with_words(vec![2, 0], vec![4], 6);
    /// assert_eq!(rack.bank1, vec![1, 3]);
    /// assert_eq!(rack.bank2, vec![5]);
    /// ```
    #[must_use]
    pub fn with_words(word1: Vec<usize>, word2: Vec<usize>, tile_count: usize) -> Self {
        let unused = (0..tile_count)
            .filter(|i| !word1.contains(i) && !word2.contains(i))
            .collect();
        let (bank1, bank2) = split_banks(unused);
        Self {
            word1,
            word2,
            bank1,
            bank2,
        }
    }

    /// Rack with the two words of a stored selection placed, the rest banked
    ///
    /// # Errors
    ///
    /// Returns a `SubsetError` if `encoded` is not a valid selection for
    /// `tile_count` tiles.
    pub fn from_encoding(encoded: u64, tile_count: usize) -> Result<Self, subset::SubsetError> {
        let (word1, word2) = subset::decode(encoded, tile_count)?;
        Ok(Self::with_words(word1, word2, tile_count))
    }

    /// Packed selection of the two words
    ///
    /// # Errors
    ///
    /// Returns a `SubsetError` if the words hold an index of 14 or more or
    /// share a tile.
    pub fn encode(&self) -> Result<u64, subset::SubsetError> {
        subset::encode(&self.word1, &self.word2)
    }
}

/// Split tiles across the banks, the first bank taking the extra tile
fn split_banks(mut tiles: Vec<usize>) -> (Vec<usize>, Vec<usize>) {
    let bank2 = tiles.split_off(tiles.len().div_ceil(2));
    (tiles, bank2)
}
