//! Match inspection command

use crate::core::Match;
use crate::matchdata::MatchDataStore;

/// A match with a summary of its opponent samples
pub struct MatchSummary {
    pub index: usize,
    pub game: Match,
    pub real_samples: usize,
    pub synthetic_samples: usize,
    pub best_score: Option<i32>,
    pub median_score: Option<i32>,
    pub average_rating: Option<f64>,
}

/// Load match `index` and summarize its samples
///
/// # Errors
///
/// Returns an error if the index is out of range or the match cannot be decoded.
pub fn show_match(store: &MatchDataStore, index: usize) -> Result<MatchSummary, String> {
    let game = store
        .match_at(index)
        .map_err(|e| format!("Cannot load match {index}: {e}"))?;

    let samples = &game.score_samples;
    let synthetic_samples = samples.iter().filter(|s| s.is_synthetic).count();

    let mut scores: Vec<i32> = samples.iter().map(|s| s.score).collect();
    scores.sort_unstable();
    let median_score = scores.get(scores.len() / 2).copied();
    let best_score = scores.last().copied();

    let average_rating = if samples.is_empty() {
        None
    } else {
        Some(samples.iter().map(|s| s.rating()).sum::<f64>() / samples.len() as f64)
    };

    Ok(MatchSummary {
        index,
        real_samples: samples.len() - synthetic_samples,
        synthetic_samples,
        best_score,
        median_score,
        average_rating,
        game,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_store;

    #[test]
    fn summarizes_samples() {
        let summary = show_match(&sample_store(), 0).unwrap();

        assert_eq!(summary.game.tiles.len(), 14);
        assert_eq!(summary.real_samples, 2);
        assert_eq!(summary.synthetic_samples, 1);
        assert_eq!(summary.best_score, Some(50));
        assert_eq!(summary.median_score, Some(36));
        let average = summary.average_rating.unwrap();
        assert!((average - 56.666_666).abs() < 1e-3);
    }

    #[test]
    fn match_without_samples() {
        let summary = show_match(&sample_store(), 1).unwrap();
        assert_eq!(summary.best_score, None);
        assert_eq!(summary.median_score, None);
        assert_eq!(summary.average_rating, None);
    }

    #[test]
    fn out_of_range_index() {
        let err = show_match(&sample_store(), 2).err().unwrap();
        assert!(err.contains("match 2"));
    }
}
