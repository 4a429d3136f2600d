//! Tile scoring with multiplier bonuses
//!
//! A word scores the sum of its tile values, each multiplied by any letter
//! bonus on that tile, and the sum is then multiplied by every word bonus in
//! the word. The two words of a move are scored independently.

use super::Tile;
use std::fmt;
use std::str::FromStr;

/// Which part of the score a bonus multiplies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BonusKind {
    Word,
    Letter,
}

/// A parsed bonus tag such as `5L` (letter ×5) or `2W` (word ×2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bonus {
    pub multiplier: u32,
    pub kind: BonusKind,
}

/// Error type for malformed bonus tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BonusError {
    InvalidFormat(String),
    UnknownKind(String),
}

impl fmt::Display for BonusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(tag) => write!(f, "Invalid bonus format: {tag:?}"),
            Self::UnknownKind(tag) => write!(f, "Unknown bonus kind: {tag:?}"),
        }
    }
}

impl std::error::Error for BonusError {}

impl FromStr for Bonus {
    type Err = BonusError;

    /// Parse a tag of the form `[1-9][WwLl]`
    ///
    /// # Examples
    /// ```
    /// use wordiest::core::{Bonus, BonusKind};
    ///
    /// let bonus: Bonus = "5l".parse().unwrap();
    /// assert_eq!(bonus.multiplier, 5);
    /// assert_eq!(bonus.kind, BonusKind::Letter);
    ///
    /// assert!("2x".parse::<Bonus>().is_err());
    /// ```
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let mut chars = tag.trim().chars();
        let (Some(digit), Some(kind), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(BonusError::InvalidFormat(tag.to_string()));
        };

        let multiplier = match digit.to_digit(10) {
            Some(m) if m > 0 => m,
            _ => return Err(BonusError::InvalidFormat(tag.to_string())),
        };

        let kind = match kind.to_ascii_lowercase() {
            'w' => BonusKind::Word,
            'l' => BonusKind::Letter,
            _ => return Err(BonusError::UnknownKind(tag.to_string())),
        };

        Ok(Self { multiplier, kind })
    }
}

/// Error type for scoring a selection of rack tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    Bonus(BonusError),
    TileIndexOutOfRange(usize),
    /// The score does not fit in a `u32`
    Overflow,
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bonus(e) => write!(f, "{e}"),
            Self::TileIndexOutOfRange(index) => write!(f, "Tile index {index} out of range"),
            Self::Overflow => write!(f, "Score overflows a 32-bit total"),
        }
    }
}

impl std::error::Error for ScoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bonus(e) => Some(e),
            Self::TileIndexOutOfRange(_) | Self::Overflow => None,
        }
    }
}

impl From<BonusError> for ScoreError {
    fn from(e: BonusError) -> Self {
        Self::Bonus(e)
    }
}

/// Score a single word
///
/// # Errors
///
/// Returns `ScoreError::Bonus` if any tile carries a malformed bonus tag and
/// `ScoreError::Overflow` if the score does not fit in a `u32`.
///
/// # Examples
/// ```
/// use wordiest::core::{Tile, scoring::score_word};
///
/// let word = [Tile::new("h", 3), Tile::with_bonus("i", 1, "5L")];
/// assert_eq!(score_word(&word).unwrap(), 8);
///
/// let doubled = [Tile::with_bonus("h", 3, "2W"), Tile::new("i", 1)];
/// assert_eq!(score_word(&doubled).unwrap(), 8);
/// ```
pub fn score_word<'a>(tiles: impl IntoIterator<Item = &'a Tile>) -> Result<u32, ScoreError> {
    let mut word_multiplier: u32 = 1;
    let mut sum: u32 = 0;

    for tile in tiles {
        let mut letter_multiplier = 1;
        if let Some(tag) = &tile.bonus {
            let bonus: Bonus = tag.parse()?;
            match bonus.kind {
                BonusKind::Word => {
                    word_multiplier = word_multiplier
                        .checked_mul(bonus.multiplier)
                        .ok_or(ScoreError::Overflow)?;
                }
                BonusKind::Letter => letter_multiplier *= bonus.multiplier,
            }
        }
        let points = tile
            .value
            .checked_mul(letter_multiplier)
            .ok_or(ScoreError::Overflow)?;
        sum = sum.checked_add(points).ok_or(ScoreError::Overflow)?;
    }

    sum.checked_mul(word_multiplier).ok_or(ScoreError::Overflow)
}

/// Score a two-word move; the words never share multipliers
///
/// # Errors
///
/// Same as [`score_word`], for either word or for their sum.
pub fn score_move<'a>(
    word1: impl IntoIterator<Item = &'a Tile>,
    word2: impl IntoIterator<Item = &'a Tile>,
) -> Result<u32, ScoreError> {
    score_word(word1)?
        .checked_add(score_word(word2)?)
        .ok_or(ScoreError::Overflow)
}

/// Score the rack tiles at `indices` as one word
///
/// # Errors
///
/// Returns `ScoreError::TileIndexOutOfRange` for an index past the end of
/// `tiles`, otherwise the errors of [`score_word`].
pub fn score_indices(tiles: &[Tile], indices: &[usize]) -> Result<u32, ScoreError> {
    let word = indices
        .iter()
        .map(|&i| tiles.get(i).ok_or(ScoreError::TileIndexOutOfRange(i)))
        .collect::<Result<Vec<_>, _>>()?;
    score_word(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::first_match_tiles;

    #[test]
    fn scores_two_word_move_from_known_match() {
        let tiles = first_match_tiles();
        let higher = [0, 2, 9, 10, 3, 1].map(|i| &tiles[i]);
        let queerer = [4, 12, 5, 7, 8, 13, 11].map(|i| &tiles[i]);

        assert_eq!(score_word(higher).unwrap(), 16);
        assert_eq!(score_word(queerer).unwrap(), 20);
        assert_eq!(score_move(higher, queerer).unwrap(), 36);
    }

    #[test]
    fn score_indices_matches_score_word() {
        let tiles = first_match_tiles();
        assert_eq!(score_indices(&tiles, &[0, 2, 9, 10, 3, 1]).unwrap(), 16);
        assert_eq!(score_indices(&tiles, &[]).unwrap(), 0);
    }

    #[test]
    fn score_indices_rejects_out_of_range() {
        let tiles = first_match_tiles();
        assert_eq!(
            score_indices(&tiles, &[0, 14]),
            Err(ScoreError::TileIndexOutOfRange(14))
        );
    }

    #[test]
    fn word_bonus_applies_to_whole_word() {
        let word = [
            Tile::new("c", 3),
            Tile::with_bonus("a", 1, "3W"),
            Tile::with_bonus("t", 1, "2l"),
        ];
        // (3 + 1 + 2) × 3
        assert_eq!(score_word(&word).unwrap(), 18);
    }

    #[test]
    fn word_bonuses_multiply() {
        let word = [Tile::with_bonus("a", 1, "2w"), Tile::with_bonus("b", 3, "3W")];
        assert_eq!(score_word(&word).unwrap(), 24);
    }

    #[test]
    fn word_bonus_does_not_cross_words() {
        let word1 = [Tile::with_bonus("a", 1, "3w")];
        let word2 = [Tile::new("b", 3)];
        assert_eq!(score_move(&word1, &word2).unwrap(), 6);
    }

    #[test]
    fn empty_word_scores_zero() {
        let empty: [Tile; 0] = [];
        assert_eq!(score_word(&empty).unwrap(), 0);
    }

    #[test]
    fn rejects_unknown_bonus_kind() {
        let result = score_word(&[Tile::with_bonus("a", 1, "2x")]);
        assert_eq!(
            result,
            Err(ScoreError::Bonus(BonusError::UnknownKind("2x".to_string())))
        );
    }

    #[test]
    fn oversized_tile_value_is_an_error() {
        let tiles = [Tile::with_bonus("a", u32::MAX, "2l")];
        assert_eq!(score_indices(&tiles, &[0]), Err(ScoreError::Overflow));

        let doubled = [Tile::with_bonus("a", u32::MAX / 2 + 1, "2w")];
        assert_eq!(score_word(&doubled), Err(ScoreError::Overflow));

        let sum = [Tile::new("a", u32::MAX), Tile::new("b", 1)];
        assert_eq!(score_word(&sum), Err(ScoreError::Overflow));
    }

    #[test]
    fn move_total_overflow_is_an_error() {
        let word1 = [Tile::new("a", u32::MAX)];
        let word2 = [Tile::new("b", 1)];
        assert_eq!(score_move(&word1, &word2), Err(ScoreError::Overflow));
        assert_eq!(score_word(&word1).unwrap(), u32::MAX);
    }

    #[test]
    fn rejects_invalid_bonus_format() {
        for tag in ["", "5", "W2", "0L", "x", "12L"] {
            assert_eq!(
                tag.parse::<Bonus>(),
                Err(BonusError::InvalidFormat(tag.to_string())),
                "tag {tag:?}"
            );
        }
    }

    #[test]
    fn bonus_parse_is_case_insensitive_and_trims() {
        assert_eq!(
            " 2W ".parse::<Bonus>().unwrap(),
            Bonus {
                multiplier: 2,
                kind: BonusKind::Word
            }
        );
        assert_eq!("9L".parse::<Bonus>().unwrap().kind, BonusKind::Letter);
    }
}
