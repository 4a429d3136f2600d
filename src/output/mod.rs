//! Terminal output formatting
//!
//! Summary strings and display utilities for CLI results.

pub mod display;
pub mod formatters;
pub mod summary;

pub use display::{
    print_decoded, print_definition, print_match, print_move_score, print_submission,
    print_verify_report,
};
