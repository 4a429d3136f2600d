//! Dictionary lookup command

use crate::dictionary::{Definition, Dictionary};

/// Result of looking up a word
pub struct DefineResult {
    pub query: String,
    pub definition: Option<Definition>,
}

/// Look up `word` in the dictionary
///
/// # Errors
///
/// Returns an error if the dictionary data is corrupt or the word contains
/// non-ASCII characters.
pub fn define_word(dictionary: &Dictionary, word: &str) -> Result<DefineResult, String> {
    let definition = dictionary
        .definition(word.trim())
        .map_err(|e| format!("Lookup of '{word}' failed: {e}"))?;

    Ok(DefineResult {
        query: word.trim().to_string(),
        definition,
    })
}
