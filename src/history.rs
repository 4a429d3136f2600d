//! History records for completed matches
//!
//! The persistence layer stores one [`HistoryEntry`] per submitted match. The
//! match tiles and score samples are embedded as JSON strings in the same
//! short-field format the match archive uses, so a stored match can be
//! replayed without the archive.

use crate::core::{ScoreSample, Tile};
use serde::{Deserialize, Serialize};

/// One completed match as stored by the history layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub match_id: String,
    /// `{"i":[...]}` with the match tiles
    pub match_data_json: String,
    /// `{"sl":[...]}` with the opponent samples
    pub score_list_json: String,
    pub words_encoding: u64,
    pub score: i32,
    pub rating_x10: i32,
    pub new_rating_x10: i32,
    pub percentile_x10: i32,
    /// GMT, `yyyy-MM-dd HH:mm:ss`
    pub timestamp: String,
}

impl HistoryEntry {
    /// Stable identifier of the entry
    #[must_use]
    pub fn id(&self) -> String {
        format!("{}|{}", self.match_id, self.timestamp)
    }
}

#[derive(Serialize)]
struct TilesRef<'a> {
    i: &'a [Tile],
}

#[derive(Serialize)]
struct SamplesRef<'a> {
    sl: &'a [ScoreSample],
}

#[derive(Deserialize)]
struct TilesOwned {
    i: Vec<Tile>,
}

#[derive(Deserialize)]
struct SamplesOwned {
    #[serde(default)]
    sl: Vec<ScoreSample>,
}

/// Encode tiles as `{"i":[...]}`
///
/// # Examples
/// ```
/// use wordiest::core::Tile;
/// use wordiest::history::encode_match_tiles;
///
/// let json = encode_match_tiles(&[Tile::with_bonus("a", 1, "2W")]);
/// assert_eq!(json, r#"{"i":[{"l":"a","x":1,"b":"2W"}]}"#);
/// ```
#[must_use]
pub fn encode_match_tiles(tiles: &[Tile]) -> String {
    serde_json::to_string(&TilesRef { i: tiles }).unwrap_or_else(|_| "{}".to_string())
}

/// Encode score samples as `{"sl":[...]}`
#[must_use]
pub fn encode_score_samples(samples: &[ScoreSample]) -> String {
    serde_json::to_string(&SamplesRef { sl: samples }).unwrap_or_else(|_| "{}".to_string())
}

/// Decode tiles stored by [`encode_match_tiles`]; `None` if malformed
#[must_use]
pub fn decode_match_tiles(json: &str) -> Option<Vec<Tile>> {
    serde_json::from_str::<TilesOwned>(json).ok().map(|t| t.i)
}

/// Decode samples stored by [`encode_score_samples`]
///
/// Returns `None` for malformed JSON and an empty list if the object has no
/// `sl` field.
#[must_use]
pub fn decode_score_samples(json: &str) -> Option<Vec<ScoreSample>> {
    serde_json::from_str::<SamplesOwned>(json).ok().map(|s| s.sl)
}
