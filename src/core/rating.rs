//! Relative-skill rating update
//!
//! After each match the player's score is compared against every recorded
//! opponent on the same puzzle. The share of opponents the player matched or
//! beat is a percentile (0-100), and the new rating is a fixed-weight
//! exponential smoothing of that percentile with the prior rating:
//!
//! ```text
//! new_rating = 0.2 × percentile + 0.8 × prior
//! ```
//!
//! Both values are rounded *up* to the nearest tenth.

use super::ScoreSample;

/// Weight of the latest percentile in the smoothed rating
const ALPHA: f64 = 0.2;

/// Decimal places kept before taking the ceiling in [`ceil_tenths`]
const CEIL_PRECISION: f64 = 1e6;

/// One opponent result used for the comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opponent {
    pub score: i32,
    pub rating: f64,
}

impl From<&ScoreSample> for Opponent {
    fn from(sample: &ScoreSample) -> Self {
        Self {
            score: sample.score,
            rating: sample.rating(),
        }
    }
}

/// Outcome of a single rating update
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RatingUpdate {
    /// Opponents rated at or above the player that the player matched or beat
    pub upset_wins: usize,
    /// Opponents rated at or above the player that outscored the player
    pub expected_losses: usize,
    /// Opponents rated below the player that the player matched or beat
    pub expected_wins: usize,
    /// Opponents rated below the player that outscored the player
    pub upset_losses: usize,
    pub percentile: f64,
    pub new_rating: f64,
}

impl RatingUpdate {
    /// Total number of opponents compared
    #[must_use]
    pub const fn opponent_count(&self) -> usize {
        self.upset_wins + self.expected_losses + self.expected_wins + self.upset_losses
    }
}

/// Round up to the nearest tenth
///
/// The scaled value is first rounded to six decimal places so that binary
/// representation error around an exact tenth (`122.99999999` for `123`)
/// does not add a spurious tenth.
///
/// # Examples
/// ```
/// use wordiest::core::rating::ceil_tenths;
///
/// assert_eq!(ceil_tenths(12.30), 12.3);
/// assert_eq!(ceil_tenths(12.31), 12.4);
/// assert_eq!(ceil_tenths(0.01), 0.1);
/// ```
#[must_use]
pub fn ceil_tenths(value: f64) -> f64 {
    let scaled = (value * 10.0 * CEIL_PRECISION).round() / CEIL_PRECISION;
    scaled.ceil() / 10.0
}

/// Compare `player_score` against `opponents` and smooth the result into `prior`
///
/// An opponent counts against the player only when it scored strictly more;
/// ties count as wins. With no opponents the percentile is 100.
///
/// # Examples
/// ```
/// use wordiest::core::rating::{Opponent, update_rating};
///
/// let opponents = [
///     Opponent { score: 10, rating: 60.0 },
///     Opponent { score: 30, rating: 60.0 },
/// ];
/// let update = update_rating(50.0, 20, &opponents);
/// assert_eq!(update.upset_wins, 1);
/// assert_eq!(update.expected_losses, 1);
/// assert_eq!(update.percentile, 50.0);
/// assert_eq!(update.new_rating, 50.0);
/// ```
#[must_use]
pub fn update_rating(prior: f64, player_score: i32, opponents: &[Opponent]) -> RatingUpdate {
    let mut update = RatingUpdate::default();

    for opponent in opponents {
        let outscored = opponent.score > player_score;
        let rated_below = opponent.rating < prior;
        match (outscored, rated_below) {
            (true, true) => update.upset_losses += 1,
            (true, false) => update.expected_losses += 1,
            (false, true) => update.expected_wins += 1,
            (false, false) => update.upset_wins += 1,
        }
    }

    let percentile = if opponents.is_empty() {
        100.0
    } else {
        (update.expected_wins + update.upset_wins) as f64 * 100.0 / opponents.len() as f64
    };
    update.percentile = ceil_tenths(percentile);
    update.new_rating = ceil_tenths(update.percentile * ALPHA + prior * (1.0 - ALPHA));

    update
}

/// Scale a value to an integer number of tenths, truncating toward zero
///
/// Matches the stored history records. Values produced by [`ceil_tenths`]
/// scale exactly, so truncation only drops digits past the first decimal.
///
/// # Examples
/// ```
/// use wordiest::core::rating::to_x10;
///
/// assert_eq!(to_x10(46.7), 467);
/// assert_eq!(to_x10(46.79), 467);
/// ```
#[must_use]
pub fn to_x10(value: f64) -> i32 {
    (value * 10.0) as i32
}

/// The player's persistent rating, updated once per completed match
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingState {
    pub rating: f64,
    /// Reserved; carried through unchanged
    pub deviation: f64,
}

impl RatingState {
    #[must_use]
    pub const fn new(rating: f64, deviation: f64) -> Self {
        Self { rating, deviation }
    }

    /// Rating scaled by ten, as stored by the history layer
    #[must_use]
    pub fn rating_x10(&self) -> i32 {
        to_x10(self.rating)
    }

    /// Run an update against `opponents` and adopt the new rating
    pub fn apply(&mut self, player_score: i32, opponents: &[Opponent]) -> RatingUpdate {
        let update = update_rating(self.rating, player_score, opponents);
        self.rating = update.new_rating;
        update
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opponent(score: i32, rating: f64) -> Opponent {
        Opponent { score, rating }
    }

    #[test]
    fn ceil_tenths_boundaries() {
        assert_eq!(ceil_tenths(12.30), 12.3);
        assert_eq!(ceil_tenths(12.31), 12.4);
        assert_eq!(ceil_tenths(0.01), 0.1);
    }

    #[test]
    fn ceil_tenths_absorbs_representation_noise() {
        assert_eq!(ceil_tenths(12.299_999_999_9), 12.3);
        assert_eq!(ceil_tenths(12.300_000_000_1), 12.3);
        // 0.1 + 0.2 is 0.30000000000000004
        assert_eq!(ceil_tenths(0.1 + 0.2), 0.3);
    }

    #[test]
    fn ceil_tenths_whole_numbers_unchanged() {
        assert_eq!(ceil_tenths(0.0), 0.0);
        assert_eq!(ceil_tenths(50.0), 50.0);
        assert_eq!(ceil_tenths(100.0), 100.0);
    }

    #[test]
    fn update_computes_percentile_and_new_rating() {
        let opponents = [opponent(10, 60.0), opponent(30, 60.0)];
        let update = update_rating(50.0, 20, &opponents);

        assert_eq!(update.upset_wins, 1);
        assert_eq!(update.expected_losses, 1);
        assert_eq!(update.expected_wins, 0);
        assert_eq!(update.upset_losses, 0);
        assert_eq!(update.percentile, 50.0);
        assert_eq!(update.new_rating, 50.0);
    }

    #[test]
    fn classification_covers_all_quadrants() {
        let opponents = [
            opponent(30, 40.0), // outscored, rated below: upset loss
            opponent(30, 50.0), // outscored, rated equal: expected loss
            opponent(10, 40.0), // beaten, rated below: expected win
            opponent(20, 70.0), // tied, rated above: upset win
        ];
        let update = update_rating(50.0, 20, &opponents);

        assert_eq!(update.upset_losses, 1);
        assert_eq!(update.expected_losses, 1);
        assert_eq!(update.expected_wins, 1);
        assert_eq!(update.upset_wins, 1);
        assert_eq!(update.opponent_count(), 4);
        assert_eq!(update.percentile, 50.0);
    }

    #[test]
    fn no_opponents_is_full_percentile() {
        let update = update_rating(50.0, 0, &[]);
        assert_eq!(update.percentile, 100.0);
        assert_eq!(update.new_rating, 60.0);
    }

    #[test]
    fn percentile_rounds_up() {
        // 1 of 3 beaten: 33.33… → 33.4
        let opponents = [opponent(10, 50.0), opponent(30, 50.0), opponent(40, 50.0)];
        let update = update_rating(50.0, 20, &opponents);
        assert_eq!(update.percentile, 33.4);
        // 0.2 × 33.4 + 0.8 × 50 = 46.68 → 46.7
        assert_eq!(update.new_rating, 46.7);
    }

    #[test]
    fn state_adopts_new_rating() {
        let mut state = RatingState::new(50.0, 0.0);
        let update = state.apply(100, &[opponent(10, 50.0)]);

        assert_eq!(update.new_rating, 60.0);
        assert_eq!(state.rating, 60.0);
        assert_eq!(state.rating_x10(), 600);
        assert_eq!(state.deviation, 0.0);
    }

    #[test]
    fn x10_scaling_truncates() {
        assert_eq!(to_x10(46.7), 467);
        assert_eq!(to_x10(0.3), 3);
        assert_eq!(to_x10(100.0), 1000);
        assert_eq!(to_x10(46.75), 467);
        assert_eq!(to_x10(99.99), 999);
        assert_eq!(to_x10(-1.25), -12);
    }

    #[test]
    fn x10_scaling_is_exact_for_ceiled_tenths() {
        for tenths in 0..=1000 {
            let value = ceil_tenths(f64::from(tenths) / 10.0);
            assert_eq!(to_x10(value), tenths);
        }
    }

    #[test]
    fn opponent_from_sample_unscales_rating() {
        let sample = ScoreSample::new(42, 515);
        let opp = Opponent::from(&sample);
        assert_eq!(opp.score, 42);
        assert!((opp.rating - 51.5).abs() < 1e-9);
    }
}
