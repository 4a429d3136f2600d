//! In-memory asset builders for tests
//!
//! These produce byte buffers in the shipped asset formats so the readers can
//! be tested without the real asset files.

use crate::core::{Match, ScoreSample, Tile};
use crate::dictionary::Dictionary;
use crate::matchdata::MatchDataStore;
use std::collections::BTreeMap;

#[derive(Default)]
struct TrieNode {
    definition: Option<Vec<u8>>,
    children: BTreeMap<u8, TrieNode>,
}

/// Builds a dictionary index and definitions buffer
#[derive(Default)]
pub struct DictionaryBuilder {
    root: TrieNode,
}

impl DictionaryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn word(self, word: &str, raw_definition: &str) -> Self {
        self.word_bytes(word, raw_definition.as_bytes())
    }

    pub fn word_bytes(mut self, word: &str, raw_definition: &[u8]) -> Self {
        let mut node = &mut self.root;
        for &byte in word.as_bytes() {
            node = node.children.entry(byte).or_default();
        }
        node.definition = Some(raw_definition.to_vec());
        self
    }

    /// Serialize to `(index, definitions)` buffers
    pub fn build_buffers(&self) -> (Vec<u8>, Vec<u8>) {
        let mut body = Vec::new();
        let mut definitions = Vec::new();
        let root = write_node(&self.root, &mut body, &mut definitions);

        // The root offset varint sits between the reserved bytes and the
        // nodes, so its own length shifts the root
        let mut header_len = 1;
        let index = loop {
            let mut header = vec![0u8; 4];
            crate::dictionary::write_varint(&mut header, 4 + header_len + root);
            if header.len() == 4 + header_len {
                header.extend_from_slice(&body);
                break header;
            }
            header_len += 1;
        };

        (index, definitions)
    }

    pub fn build(&self) -> Dictionary {
        let (index, definitions) = self.build_buffers();
        Dictionary::new(index, definitions)
    }
}

/// Write `node` after its children and return its offset within `body`
fn write_node(node: &TrieNode, body: &mut Vec<u8>, definitions: &mut Vec<u8>) -> usize {
    let children: Vec<(u8, usize)> = node
        .children
        .iter()
        .map(|(&label, child)| (label, write_node(child, body, definitions)))
        .collect();

    let offset = body.len();
    let mut header = 0x40 | children.len() as u8;
    if node.definition.is_some() {
        header |= 0x80;
    }
    body.push(header);

    if let Some(text) = &node.definition {
        crate::dictionary::write_varint(body, definitions.len());
        crate::dictionary::write_varint(definitions, text.len());
        definitions.extend_from_slice(text);
    }

    for (label, child) in children {
        body.push(label);
        crate::dictionary::write_varint(body, offset - child);
    }

    offset
}

/// Serialize matches into the packed archive format
pub fn pack_archive(matches: &[Match]) -> Vec<u8> {
    let bodies: Vec<String> = matches
        .iter()
        .map(|m| serde_json::to_string(m).unwrap())
        .collect();
    pack_raw_archive(&bodies)
}

/// Pack raw JSON bodies (which need not be valid) behind an offset header
pub fn pack_raw_archive(bodies: &[String]) -> Vec<u8> {
    let mut end = 0;
    let offsets: Vec<usize> = bodies
        .iter()
        .map(|body| {
            end += body.len();
            end
        })
        .collect();

    let mut data = serde_json::to_vec(&offsets).unwrap();
    for body in bodies {
        data.extend_from_slice(body.as_bytes());
    }
    data
}

/// Tiles of the first match in the shipped archive
pub fn first_match_tiles() -> Vec<Tile> {
    vec![
        Tile::new("h", 3),
        Tile::new("r", 1),
        Tile::with_bonus("i", 1, "5l"),
        Tile::new("e", 1),
        Tile::new("q", 10),
        Tile::new("e", 1),
        Tile::new("s", 1),
        Tile::new("e", 1),
        Tile::with_bonus("r", 1, "4l"),
        Tile::new("g", 3),
        Tile::new("h", 3),
        Tile::new("r", 1),
        Tile::new("u", 2),
        Tile::new("e", 1),
    ]
}

/// First match with a small set of opponent samples
///
/// "higher" is `[0, 2, 9, 10, 3, 1]` (16 points) and "queerer" is
/// `[4, 12, 5, 7, 8, 13, 11]` (20 points).
pub fn first_match() -> Match {
    Match {
        tiles: first_match_tiles(),
        score_samples: vec![
            ScoreSample {
                score: 36,
                rating_x10: 600,
                words_encoding: Some(0x13AB_42F5_D689_EC),
                is_synthetic: false,
            },
            ScoreSample {
                score: 16,
                rating_x10: 400,
                words_encoding: Some(0x13_AB42),
                is_synthetic: false,
            },
            ScoreSample {
                score: 50,
                rating_x10: 700,
                words_encoding: None,
                is_synthetic: true,
            },
        ],
    }
}

pub fn sample_store() -> MatchDataStore {
    let second = Match {
        tiles: vec![Tile::new("a", 1), Tile::with_bonus("b", 3, "2W")],
        score_samples: vec![],
    };
    MatchDataStore::new(pack_archive(&[first_match(), second])).unwrap()
}

pub fn sample_dictionary() -> Dictionary {
    DictionaryBuilder::new()
        .word("higher", "adj|Comparative of high.")
        .word("queerer", "adj|Comparative of queer.")
        .word("her", "pron|That woman.")
        .build()
}
