//! Archive verification command
//!
//! Decodes every match in the archive and replays each opponent's stored
//! words, checking the recomputed score against the recorded one.

use crate::core::scoring::score_indices;
use crate::core::{Match, ScoreError, subset};
use crate::matchdata::MatchDataStore;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// A sample whose stored words do not add up to its recorded score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreMismatch {
    pub match_index: usize,
    pub sample_index: usize,
    pub recorded: i32,
    pub computed: u32,
}

/// A match or sample that could not be decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyFailure {
    pub match_index: usize,
    pub sample_index: Option<usize>,
    pub reason: String,
}

/// Totals across the verified matches
#[derive(Debug, Default)]
pub struct VerifyReport {
    pub matches: usize,
    pub samples: usize,
    pub encodings_checked: usize,
    pub score_mismatches: Vec<ScoreMismatch>,
    pub failures: Vec<VerifyFailure>,
    pub duration: Duration,
}

impl VerifyReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.score_mismatches.is_empty() && self.failures.is_empty()
    }

    fn merge(mut self, other: Self) -> Self {
        self.matches += other.matches;
        self.samples += other.samples;
        self.encodings_checked += other.encodings_checked;
        self.score_mismatches.extend(other.score_mismatches);
        self.failures.extend(other.failures);
        self
    }
}

/// Progress bar styled for verification runs
#[must_use]
pub fn verify_progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

/// Verify the first `limit` matches (all by default) in parallel
pub fn run_verify(store: &MatchDataStore, limit: Option<usize>, pb: &ProgressBar) -> VerifyReport {
    let count = limit.map_or(store.count(), |l| l.min(store.count()));
    pb.set_length(count as u64);

    let start = Instant::now();
    let mut report = (0..count)
        .into_par_iter()
        .map(|index| {
            let partial = verify_match(store, index);
            pb.inc(1);
            partial
        })
        .reduce(VerifyReport::default, VerifyReport::merge);
    pb.finish_with_message("Complete!");

    report.score_mismatches.sort_by_key(|m| (m.match_index, m.sample_index));
    report.failures.sort_by_key(|f| (f.match_index, f.sample_index));
    report.duration = start.elapsed();
    report
}

fn verify_match(store: &MatchDataStore, match_index: usize) -> VerifyReport {
    let mut report = VerifyReport {
        matches: 1,
        ..VerifyReport::default()
    };

    let game = match store.match_at(match_index) {
        Ok(game) => game,
        Err(e) => {
            report.failures.push(VerifyFailure {
                match_index,
                sample_index: None,
                reason: e.to_string(),
            });
            return report;
        }
    };

    report.samples = game.score_samples.len();
    for (sample_index, sample) in game.score_samples.iter().enumerate() {
        let Some(encoding) = sample.words_encoding else {
            continue;
        };
        report.encodings_checked += 1;

        match replay_score(&game, encoding) {
            Ok(computed) if i64::from(computed) == i64::from(sample.score) => {}
            Ok(computed) => report.score_mismatches.push(ScoreMismatch {
                match_index,
                sample_index,
                recorded: sample.score,
                computed,
            }),
            Err(reason) => report.failures.push(VerifyFailure {
                match_index,
                sample_index: Some(sample_index),
                reason,
            }),
        }
    }

    report
}

/// Score the two words stored in `encoding`
fn replay_score(game: &Match, encoding: u64) -> Result<u32, String> {
    let (word1, word2) = subset::decode(encoding, game.tiles.len()).map_err(|e| e.to_string())?;
    let score = score_indices(&game.tiles, &word1)
        .and_then(|first| {
            score_indices(&game.tiles, &word2)
                .and_then(|second| first.checked_add(second).ok_or(ScoreError::Overflow))
        })
        .map_err(|e| e.to_string())?;
    Ok(score)
}
