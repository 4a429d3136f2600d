//! Rack scoring command
//!
//! Places two words of tile indices on a match and scores them against the
//! dictionary.

use crate::core::Match;
use crate::dictionary::Dictionary;
use crate::matchdata::MatchDataStore;
use crate::output::summary::definition_text;
use crate::rack::RackState;
use crate::submission::{MoveScore, score_rack};

/// Result of scoring two words on a match
pub struct ScoreResult {
    pub index: usize,
    pub game: Match,
    pub rack: RackState,
    pub scored: MoveScore,
    /// Highest opponent score on the match
    pub best_sample: Option<i32>,
    /// One line per valid word
    pub definitions: Vec<String>,
}

/// Parse a comma-separated list of 0-based tile indices
///
/// An empty string is an empty word.
///
/// # Errors
///
/// Returns an error naming the first entry that is not a number.
///
/// # Examples
/// ```
/// use wordiest::commands::parse_word_indices;
///
/// assert_eq!(parse_word_indices("0, 2,9").unwrap(), vec![0, 2, 9]);
/// assert!(parse_word_indices("").unwrap().is_empty());
/// ```
pub fn parse_word_indices(text: &str) -> Result<Vec<usize>, String> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    text.split(',')
        .map(|part| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| format!("Invalid tile index '{}'", part.trim()))
        })
        .collect()
}

/// Score `word1` and `word2` on match `index`
///
/// # Errors
///
/// Returns an error if the match cannot be loaded or a word uses an invalid
/// tile.
pub fn score_words(
    store: &MatchDataStore,
    dictionary: &Dictionary,
    index: usize,
    word1: Vec<usize>,
    word2: Vec<usize>,
) -> Result<ScoreResult, String> {
    let game = store
        .match_at(index)
        .map_err(|e| format!("Cannot load match {index}: {e}"))?;
    let rack = RackState::with_words(word1, word2, game.tiles.len());
    let scored = score_rack(&game, &rack, dictionary).map_err(|e| format!("Cannot score words: {e}"))?;

    let definitions = [&scored.word1, &scored.word2]
        .into_iter()
        .filter(|w| w.valid)
        .filter_map(|w| {
            let definition = dictionary.definition(&w.text).ok().flatten()?;
            Some(definition_text(
                &w.text,
                w.points,
                definition.see_word.as_deref(),
                &definition.definition,
            ))
        })
        .collect();

    let best_sample = game.score_samples.iter().map(|s| s.score).max();

    Ok(ScoreResult {
        index,
        rack,
        scored,
        best_sample,
        definitions,
        game,
    })
}
