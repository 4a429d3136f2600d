//! Trie-encoded dictionary with definitions
//!
//! The dictionary is two buffers: an index holding a byte-packed trie of every
//! word, and a definitions blob the trie points into. A definition entry is a
//! varint length followed by text of the form
//! `<part of speech>|<definition>|<key>|<value>|...`.
//!
//! A definition starting with `@` refers to another word (`@color`); one
//! starting with `@!` additionally makes that word the external lookup target.

mod trie;
mod varint;

use std::fmt;
use trie::Node;

#[cfg(test)]
pub(crate) use varint::write as write_varint;

/// Bytes before the root offset varint
const RESERVED_HEADER_LEN: usize = 4;

/// Error type for corrupt dictionary assets
///
/// A word that simply is not in the dictionary is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionaryError {
    TruncatedData,
    MalformedTrie,
    InvalidWordEncoding,
    InvalidDefinitionEncoding,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TruncatedData => write!(f, "Dictionary data is truncated"),
            Self::MalformedTrie => write!(f, "Dictionary index is malformed"),
            Self::InvalidWordEncoding => write!(f, "Word must contain only ASCII characters"),
            Self::InvalidDefinitionEncoding => write!(f, "Definition range is out of bounds"),
        }
    }
}

impl std::error::Error for DictionaryError {}

/// A resolved dictionary entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    /// The normalized (lowercase) query word
    pub word: String,
    /// Word to use when looking the entry up in an external reference
    pub lookup_word: String,
    /// Word the entry redirects to, if it is a cross-reference
    pub see_word: Option<String>,
    pub part_of_speech: String,
    pub definition: String,
}

/// Read-only view over the dictionary index and definitions buffers
#[derive(Debug, Clone)]
pub struct Dictionary {
    index: Vec<u8>,
    definitions: Vec<u8>,
}

impl Dictionary {
    #[must_use]
    pub fn new(index: impl Into<Vec<u8>>, definitions: impl Into<Vec<u8>>) -> Self {
        Self {
            index: index.into(),
            definitions: definitions.into(),
        }
    }

    /// Look up the definition of `word` (case-insensitive)
    ///
    /// Returns `Ok(None)` if the word is not in the dictionary, or if its
    /// entry or redirect target has no usable definition.
    ///
    /// # Errors
    ///
    /// Returns a `DictionaryError` if the buffers are corrupt or `word`
    /// contains non-ASCII characters.
    pub fn definition(&self, word: &str) -> Result<Option<Definition>, DictionaryError> {
        let normalized = word.to_lowercase();
        if normalized.is_empty() {
            return Ok(None);
        }

        let Some(raw) = self.raw_definition(&normalized)? else {
            return Ok(None);
        };
        let Some((part_of_speech, _)) = raw.split_once('|') else {
            return Ok(None);
        };
        let Some(primary) = value_for_key(&raw, part_of_speech) else {
            return Ok(None);
        };

        let mut lookup_word = normalized.clone();
        let mut see_word = None;
        let mut definition = primary.to_string();

        if let Some(target) = primary.strip_prefix('@') {
            let target = match target.strip_prefix('!') {
                Some(external) => {
                    lookup_word = external.to_string();
                    external
                }
                None => target,
            };
            see_word = Some(target.to_string());

            let Some(redirected_raw) = self.raw_definition(target)? else {
                return Ok(None);
            };
            let Some(redirected) = value_for_key(&redirected_raw, part_of_speech) else {
                return Ok(None);
            };
            definition = redirected.to_string();
        }

        Ok(Some(Definition {
            word: normalized,
            lookup_word,
            see_word,
            part_of_speech: part_of_speech.to_string(),
            definition,
        }))
    }

    /// Check whether `word` has a definition
    ///
    /// # Errors
    ///
    /// Same as [`Dictionary::definition`].
    pub fn contains(&self, word: &str) -> Result<bool, DictionaryError> {
        Ok(self.definition(word)?.is_some())
    }

    /// Walk the trie for `word` and return the raw definition text of its node
    fn raw_definition(&self, word: &str) -> Result<Option<String>, DictionaryError> {
        if self.index.len() <= RESERVED_HEADER_LEN {
            return Err(DictionaryError::TruncatedData);
        }

        let (mut offset, _) = varint::read(&self.index, RESERVED_HEADER_LEN)?;

        for ch in word.chars() {
            if !ch.is_ascii() {
                return Err(DictionaryError::InvalidWordEncoding);
            }

            let node = Node::read(&self.index, offset)?;
            match node.child(&self.index, ch as u8)? {
                Some(child) => offset = child,
                None => return Ok(None),
            }
        }

        let node = Node::read(&self.index, offset)?;
        let Some(definition_offset) = node.definition_offset else {
            return Ok(None);
        };

        self.definition_text(definition_offset).map(Some)
    }

    /// Decode the length-prefixed text at `offset` in the definitions buffer
    fn definition_text(&self, offset: usize) -> Result<String, DictionaryError> {
        let (len, len_bytes) = varint::read(&self.definitions, offset)?;
        let start = offset + len_bytes;
        let bytes = start
            .checked_add(len)
            .and_then(|end| self.definitions.get(start..end))
            .ok_or(DictionaryError::InvalidDefinitionEncoding)?;

        // Older assets carry Latin-1 text
        Ok(String::from_utf8(bytes.to_vec())
            .unwrap_or_else(|_| bytes.iter().map(|&b| char::from(b)).collect()))
    }
}

/// Value of the first `key|value` pair whose key is `key`
fn value_for_key<'a>(raw: &'a str, key: &str) -> Option<&'a str> {
    let parts: Vec<&str> = raw.split('|').collect();
    parts
        .chunks_exact(2)
        .find(|pair| pair[0] == key)
        .map(|pair| pair[1])
}
