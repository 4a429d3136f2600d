//! Match data model
//!
//! Tiles, historical score samples and matches as they are stored in the
//! packed archive. Field names on the wire are single letters; the serde
//! renames below keep the Rust names readable.
//!
//! Tile and sample fields are read leniently: a field holding the wrong JSON
//! type takes its default instead of failing the whole match. Only the tile
//! list itself must be present and well formed.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a field, falling back to its default if the JSON value has the
/// wrong type or range
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// One letter tile with its point value and optional multiplier bonus tag
///
/// The bonus is kept as the raw tag string (e.g. `"5l"`) and parsed at
/// scoring time, so a corrupt tag surfaces as a scoring error rather than a
/// decoding failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    #[serde(rename = "l", default, deserialize_with = "lenient")]
    pub letter: String,
    #[serde(rename = "x", default, deserialize_with = "lenient")]
    pub value: u32,
    #[serde(rename = "b", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub bonus: Option<String>,
}

impl Tile {
    /// Create a tile without a bonus
    ///
    /// # Examples
    /// ```
    /// use wordiest::core::Tile;
    ///
    /// let tile = Tile::new("q", 10);
    /// assert_eq!(tile.letter, "q");
    /// assert!(tile.bonus.is_none());
    /// ```
    #[must_use]
    pub fn new(letter: impl Into<String>, value: u32) -> Self {
        Self {
            letter: letter.into(),
            value,
            bonus: None,
        }
    }

    /// Create a tile carrying a bonus tag such as `"2W"` or `"5l"`
    #[must_use]
    pub fn with_bonus(letter: impl Into<String>, value: u32, bonus: impl Into<String>) -> Self {
        Self {
            letter: letter.into(),
            value,
            bonus: Some(bonus.into()),
        }
    }
}

/// One historical opponent result for a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSample {
    #[serde(rename = "s", default, deserialize_with = "lenient")]
    pub score: i32,
    /// Opponent rating scaled by ten
    #[serde(rename = "r", default, deserialize_with = "lenient")]
    pub rating_x10: i32,
    /// Packed selection of the opponent's two words, see [`crate::core::subset`]
    #[serde(rename = "w", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub words_encoding: Option<u64>,
    /// Set for samples that were not played by a real opponent
    #[serde(rename = "a", default, deserialize_with = "lenient")]
    pub is_synthetic: bool,
}

impl ScoreSample {
    #[must_use]
    pub const fn new(score: i32, rating_x10: i32) -> Self {
        Self {
            score,
            rating_x10,
            words_encoding: None,
            is_synthetic: false,
        }
    }

    /// Opponent rating on the normal (unscaled) scale
    #[inline]
    #[must_use]
    pub fn rating(&self) -> f64 {
        f64::from(self.rating_x10) / 10.0
    }
}

/// A single puzzle: a fixed tile set plus the results other players achieved on it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    #[serde(rename = "i")]
    pub tiles: Vec<Tile>,
    #[serde(rename = "sl", default, deserialize_with = "lenient")]
    pub score_samples: Vec<ScoreSample>,
}

impl Match {
    /// Letters of the tiles at `indices`, concatenated
    ///
    /// Indices outside the tile list are skipped.
    #[must_use]
    pub fn spell(&self, indices: &[usize]) -> String {
        indices
            .iter()
            .filter_map(|&i| self.tiles.get(i))
            .map(|tile| tile.letter.as_str())
            .collect()
    }
}
