//! Submission command
//!
//! Runs the full end-of-match pipeline: score the words, drop invalid ones,
//! update the rating and build the history record.

use crate::core::RatingState;
use crate::dictionary::Dictionary;
use crate::matchdata::MatchDataStore;
use crate::output::summary::submission_warning;
use crate::rack::{RackState, reset};
use crate::submission::{MoveScore, Submission, score_rack, submit};

/// Configuration for submitting two words
pub struct SubmitConfig {
    pub index: usize,
    pub word1: Vec<usize>,
    pub word2: Vec<usize>,
    pub rating: f64,
    /// Matches played before this one
    pub matches_played: usize,
    pub timestamp: String,
}

impl SubmitConfig {
    #[must_use]
    pub const fn new(index: usize, word1: Vec<usize>, word2: Vec<usize>, timestamp: String) -> Self {
        Self {
            index,
            word1,
            word2,
            rating: 50.0,
            matches_played: 0,
            timestamp,
        }
    }
}

/// Result of a submission
pub struct SubmitResult {
    /// Words as placed, before invalid ones were dropped
    pub scored: MoveScore,
    pub warning: Option<&'static str>,
    pub submission: Submission,
    pub matches_played: usize,
}

/// Submit the configured words on their match
///
/// Invalid words are returned to the banks and score nothing.
///
/// # Errors
///
/// Returns an error if the match cannot be loaded or the words cannot be
/// scored or encoded.
pub fn submit_words(
    store: &MatchDataStore,
    dictionary: &Dictionary,
    config: SubmitConfig,
) -> Result<SubmitResult, String> {
    let index = config.index;
    let game = store
        .match_at(index)
        .map_err(|e| format!("Cannot load match {index}: {e}"))?;

    let rack = RackState::with_words(config.word1, config.word2, game.tiles.len());
    let scored = score_rack(&game, &rack, dictionary).map_err(|e| format!("Cannot score words: {e}"))?;
    let warning = submission_warning(scored.valid_word_count());

    let kept = reset(&rack, true, scored.word1.valid, scored.word2.valid, RackState::clone);
    let mut rating = RatingState::new(config.rating, 0.0);
    let submission =
        submit(&game, index, &kept, &mut rating, &config.timestamp).map_err(|e| e.to_string())?;

    Ok(SubmitResult {
        scored,
        warning,
        submission,
        matches_played: config.matches_played,
    })
}

/// Format seconds since the Unix epoch as `yyyy-MM-dd HH:mm:ss` (GMT)
///
/// # Examples
/// ```
/// use wordiest::commands::gmt_timestamp;
///
/// assert_eq!(gmt_timestamp(1_700_000_000), "2023-11-14 22:13:20");
/// ```
#[must_use]
pub fn gmt_timestamp(unix_seconds: u64) -> String {
    let days = unix_seconds / 86_400;
    let seconds = unix_seconds % 86_400;

    // Civil date from day count, with years starting in March
    let z = days + 719_468;
    let era = z / 146_097;
    let day_of_era = z - era * 146_097;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let mp = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = year_of_era + era * 400 + u64::from(month <= 2);

    format!(
        "{year:04}-{month:02}-{day:02} {:02}:{:02}:{:02}",
        seconds / 3600,
        seconds % 3600 / 60,
        seconds % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{sample_dictionary, sample_store};

    const HIGHER: [usize; 6] = [0, 2, 9, 10, 3, 1];

    #[test]
    fn submit_drops_invalid_words() {
        let mut config = SubmitConfig::new(0, HIGHER.to_vec(), vec![4, 12], "2024-01-01 00:00:00".to_string());
        config.matches_played = 3;
        let result = submit_words(&sample_store(), &sample_dictionary(), config).unwrap();

        assert_eq!(result.warning, Some("Submit only one word?"));
        assert_eq!(result.scored.word2.text, "qu");

        let submission = &result.submission;
        assert_eq!(submission.score, 16);
        assert_eq!(submission.words_encoding, 0x13_AB42);
        assert_eq!(submission.update.percentile, 33.4);
        assert_eq!(submission.update.new_rating, 46.7);
        assert_eq!(submission.entry.new_rating_x10, 467);
        assert_eq!(result.matches_played, 3);
    }

    #[test]
    fn submit_both_words() {
        let config = SubmitConfig::new(
            0,
            HIGHER.to_vec(),
            vec![4, 12, 5, 7, 8, 13, 11],
            "2024-01-01 00:00:00".to_string(),
        );
        let result = submit_words(&sample_store(), &sample_dictionary(), config).unwrap();

        assert_eq!(result.warning, Some("Submit these words?"));
        assert_eq!(result.submission.score, 36);
        assert_eq!(result.submission.words_encoding, 0x13AB_42F5_D689_EC);
    }

    #[test]
    fn submit_nothing() {
        let config = SubmitConfig::new(1, vec![], vec![], "t".to_string());
        let result = submit_words(&sample_store(), &sample_dictionary(), config).unwrap();

        assert_eq!(result.warning, Some("Submit no words?"));
        assert_eq!(result.submission.score, 0);
        assert_eq!(result.submission.words_encoding, 0);
        assert_eq!(result.submission.update.new_rating, 60.0);
    }

    #[test]
    fn timestamps() {
        assert_eq!(gmt_timestamp(0), "1970-01-01 00:00:00");
        assert_eq!(gmt_timestamp(951_782_400), "2000-02-29 00:00:00");
        assert_eq!(gmt_timestamp(4_102_444_799), "2099-12-31 23:59:59");
    }
}
