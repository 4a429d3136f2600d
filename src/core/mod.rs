//! Core domain types for Wordiest
//!
//! This module contains the match data model and the pure game algorithms:
//! tile scoring, the packed two-word selection encoding and the rating update.
//! Nothing here performs I/O or holds shared state.

mod model;
pub mod rating;
pub mod scoring;
pub mod subset;

pub use model::{Match, ScoreSample, Tile};
pub use rating::{Opponent, RatingState, RatingUpdate};
pub use scoring::{Bonus, BonusError, BonusKind, ScoreError};
pub use subset::SubsetError;
