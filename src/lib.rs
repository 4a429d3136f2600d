//! Wordiest
//!
//! Game logic for a two-word tile game: tile scoring, packed word selections,
//! rating updates, the compact dictionary and the packed match archive.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordiest::core::scoring::score_indices;
//! use wordiest::matchdata::MatchDataStore;
//!
//! let store = MatchDataStore::new(std::fs::read("matchdata.packed").unwrap()).unwrap();
//! let game = store.match_at(0).unwrap();
//! let points = score_indices(&game.tiles, &[0, 2, 9]).unwrap();
//! println!("{} scores {points}", game.spell(&[0, 2, 9]));
//! ```

// Core domain types and algorithms
pub mod core;

// Compact dictionary
pub mod dictionary;

// Packed match archive
pub mod matchdata;

// In-progress tile arrangement
pub mod rack;

// Match submission and history records
pub mod history;
pub mod submission;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

#[cfg(test)]
mod fixtures;
