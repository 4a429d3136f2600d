//! Command implementations

pub mod decode;
pub mod define;
pub mod score;
pub mod show;
pub mod submit;
pub mod verify;

pub use decode::{DecodeResult, decode_words, parse_encoding};
pub use define::{DefineResult, define_word};
pub use score::{ScoreResult, parse_word_indices, score_words};
pub use show::{MatchSummary, show_match};
pub use submit::{SubmitConfig, SubmitResult, gmt_timestamp, submit_words};
pub use verify::{VerifyReport, run_verify, verify_progress_bar};
