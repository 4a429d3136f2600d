//! Scoring the current rack and submitting it as a completed match

use crate::core::rating::to_x10;
use crate::core::scoring::score_indices;
use crate::core::{Match, Opponent, RatingState, RatingUpdate, ScoreError, subset};
use crate::dictionary::Dictionary;
use crate::history::{HistoryEntry, encode_match_tiles, encode_score_samples};
use crate::rack::RackState;
use std::fmt;

/// Error type for scoring or submitting a rack
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    Score(ScoreError),
    Subset(subset::SubsetError),
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Score(e) => write!(f, "Cannot score words: {e}"),
            Self::Subset(e) => write!(f, "Cannot encode words: {e}"),
        }
    }
}

impl std::error::Error for SubmissionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Score(e) => Some(e),
            Self::Subset(e) => Some(e),
        }
    }
}

impl From<ScoreError> for SubmissionError {
    fn from(e: ScoreError) -> Self {
        Self::Score(e)
    }
}

impl From<subset::SubsetError> for SubmissionError {
    fn from(e: subset::SubsetError) -> Self {
        Self::Subset(e)
    }
}

/// One word on the rack, spelled and scored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordScore {
    pub text: String,
    pub points: u32,
    /// Non-empty and found in the dictionary
    pub valid: bool,
}

/// Both rack words, spelled and scored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveScore {
    pub word1: WordScore,
    pub word2: WordScore,
}

impl MoveScore {
    /// Points from the valid words only, saturating at `u32::MAX`
    #[must_use]
    pub fn total(&self) -> u32 {
        [&self.word1, &self.word2]
            .iter()
            .filter(|w| w.valid)
            .fold(0, |total, w| total.saturating_add(w.points))
    }

    #[must_use]
    pub fn valid_word_count(&self) -> usize {
        usize::from(self.word1.valid) + usize::from(self.word2.valid)
    }
}

/// Spell, score and check both words on `rack`
///
/// A dictionary lookup that fails on corrupt data counts the word as invalid.
///
/// # Errors
///
/// Returns a `ScoreError` if a word uses a tile outside the match or a tile
/// with a malformed bonus.
pub fn score_rack(
    game: &Match,
    rack: &RackState,
    dictionary: &Dictionary,
) -> Result<MoveScore, ScoreError> {
    Ok(MoveScore {
        word1: score_word_at(game, &rack.word1, dictionary)?,
        word2: score_word_at(game, &rack.word2, dictionary)?,
    })
}

fn score_word_at(game: &Match, indices: &[usize], dictionary: &Dictionary) -> Result<WordScore, ScoreError> {
    let points = score_indices(&game.tiles, indices)?;
    let text = game.spell(indices);
    let valid = !text.is_empty() && dictionary.contains(&text).unwrap_or(false);
    Ok(WordScore {
        text,
        points,
        valid,
    })
}

/// Result of submitting a rack
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub score: u32,
    pub words_encoding: u64,
    pub previous_rating: f64,
    pub update: RatingUpdate,
    pub entry: HistoryEntry,
}

/// Score the rack words, update `rating` against the match samples and build
/// the history record
///
/// Both words are scored as placed; clear invalid words from the rack before
/// submitting. `rating` is only changed when the submission succeeds.
///
/// # Errors
///
/// Returns `SubmissionError::Score` if the words cannot be scored (including
/// a total that overflows) and
/// `SubmissionError::Subset` if they cannot be encoded.
pub fn submit(
    game: &Match,
    match_index: usize,
    rack: &RackState,
    rating: &mut RatingState,
    timestamp: &str,
) -> Result<Submission, SubmissionError> {
    let score = score_indices(&game.tiles, &rack.word1)?
        .checked_add(score_indices(&game.tiles, &rack.word2)?)
        .ok_or(ScoreError::Overflow)?;
    let words_encoding = rack.encode()?;

    let opponents: Vec<Opponent> = game.score_samples.iter().map(Opponent::from).collect();
    let previous_rating = rating.rating;
    let player_score = i32::try_from(score).unwrap_or(i32::MAX);
    let update = rating.apply(player_score, &opponents);

    let entry = HistoryEntry {
        match_id: match_index.to_string(),
        match_data_json: encode_match_tiles(&game.tiles),
        score_list_json: encode_score_samples(&game.score_samples),
        words_encoding,
        score: player_score,
        rating_x10: to_x10(previous_rating),
        new_rating_x10: to_x10(update.new_rating),
        percentile_x10: to_x10(update.percentile),
        timestamp: timestamp.to_string(),
    };

    Ok(Submission {
        score,
        words_encoding,
        previous_rating,
        update,
        entry,
    })
}
