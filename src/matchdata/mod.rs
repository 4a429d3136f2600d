//! Packed archive of pre-generated matches
//!
//! The archive starts with a JSON array of cumulative end offsets, one per
//! match, and is followed directly by the concatenated match objects:
//!
//! ```text
//! [120,245]{"i":[...],"sl":[...]}{"i":[...],"sl":[...]}
//!          ^ offsets are relative to the byte after ']'
//! ```
//!
//! Only the header is parsed up front; each match is decoded on demand from
//! its own byte range.

use crate::core::Match;
use std::fmt;
use std::ops::Range;

/// Error type for loading matches from the archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchDataError {
    MissingHeader,
    InvalidHeader,
    IndexOutOfRange(usize),
    InvalidMatchJson(usize),
}

impl fmt::Display for MatchDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHeader => write!(f, "Match archive has no offset header"),
            Self::InvalidHeader => write!(f, "Match archive offset header is invalid"),
            Self::IndexOutOfRange(index) => write!(f, "Match index {index} out of range"),
            Self::InvalidMatchJson(index) => write!(f, "Match {index} is not valid match JSON"),
        }
    }
}

impl std::error::Error for MatchDataError {}

/// Random-access reader over a packed match archive
#[derive(Debug, Clone)]
pub struct MatchDataStore {
    data: Vec<u8>,
    body_start: usize,
    end_offsets: Vec<usize>,
}

impl MatchDataStore {
    /// Parse the offset header of `data`
    ///
    /// # Errors
    ///
    /// Returns `MatchDataError::MissingHeader` if there is no `]` byte, and
    /// `MatchDataError::InvalidHeader` if the header is not a non-empty,
    /// non-decreasing array of offsets that fit inside the archive.
    ///
    /// # Examples
    /// ```
    /// use wordiest::matchdata::MatchDataStore;
    ///
    /// let data = br#"[31]{"i":[{"l":"a","x":1}],"sl":[]}"#.to_vec();
    /// let store = MatchDataStore::new(data).unwrap();
    /// assert_eq!(store.count(), 1);
    /// assert_eq!(store.match_at(0).unwrap().tiles[0].letter, "a");
    /// ```
    pub fn new(data: impl Into<Vec<u8>>) -> Result<Self, MatchDataError> {
        let data = data.into();

        let header_end = data
            .iter()
            .position(|&b| b == b']')
            .ok_or(MatchDataError::MissingHeader)?;

        let end_offsets: Vec<usize> = serde_json::from_slice(&data[..=header_end])
            .map_err(|_| MatchDataError::InvalidHeader)?;

        let body_start = header_end + 1;
        let body_len = data.len() - body_start;

        let Some(&last) = end_offsets.last() else {
            return Err(MatchDataError::InvalidHeader);
        };
        if last > body_len || end_offsets.windows(2).any(|w| w[0] > w[1]) {
            return Err(MatchDataError::InvalidHeader);
        }

        Ok(Self {
            data,
            body_start,
            end_offsets,
        })
    }

    /// Number of matches in the archive
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.end_offsets.len()
    }

    /// Decode the match at `index`
    ///
    /// # Errors
    ///
    /// Returns `MatchDataError::IndexOutOfRange` if `index >= count()` and
    /// `MatchDataError::InvalidMatchJson` if that match's bytes are not valid
    /// JSON or lack a well-formed `"i"` tile list. Tile and sample fields of
    /// the wrong type fall back to their defaults.
    pub fn match_at(&self, index: usize) -> Result<Match, MatchDataError> {
        let range = self
            .byte_range(index)
            .ok_or(MatchDataError::IndexOutOfRange(index))?;

        serde_json::from_slice(&self.data[range]).map_err(|_| MatchDataError::InvalidMatchJson(index))
    }

    /// Decode every match in order
    pub fn iter(&self) -> impl Iterator<Item = Result<Match, MatchDataError>> + '_ {
        (0..self.count()).map(|index| self.match_at(index))
    }

    /// Absolute byte range of the match at `index`
    fn byte_range(&self, index: usize) -> Option<Range<usize>> {
        let end = *self.end_offsets.get(index)?;
        let start = match index {
            0 => 0,
            _ => self.end_offsets[index - 1],
        };
        Some(self.body_start + start..self.body_start + end)
    }
}
