//! Trie nodes in the dictionary index buffer
//!
//! ```text
//! header   1 byte   0x40 always set, 0x80 = has definition, low 6 bits = child count
//! payload  varint   definition offset (only with 0x80)
//! children          per child: 1 ASCII label byte + varint backward delta
//! ```
//!
//! Children are written before their parent, so a child lives at
//! `node_offset - delta`.

use super::{DictionaryError, varint};

const NODE_MARKER: u8 = 0x40;
const HAS_DEFINITION: u8 = 0x80;
const CHILD_COUNT_MASK: u8 = 0x3f;

/// A decoded node header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub offset: usize,
    pub definition_offset: Option<usize>,
    pub child_count: usize,
    children_start: usize,
}

impl Node {
    /// Decode the node header at `offset`
    pub fn read(data: &[u8], offset: usize) -> Result<Self, DictionaryError> {
        let &header = data.get(offset).ok_or(DictionaryError::MalformedTrie)?;
        if header & NODE_MARKER == 0 {
            return Err(DictionaryError::MalformedTrie);
        }

        let mut cursor = offset + 1;
        let definition_offset = if header & HAS_DEFINITION == 0 {
            None
        } else {
            let (definition_offset, len) = varint::read(data, cursor)?;
            cursor += len;
            Some(definition_offset)
        };

        Ok(Self {
            offset,
            definition_offset,
            child_count: usize::from(header & CHILD_COUNT_MASK),
            children_start: cursor,
        })
    }

    /// Offset of the child reached through `label`, if there is one
    pub fn child(&self, data: &[u8], label: u8) -> Result<Option<usize>, DictionaryError> {
        let mut cursor = self.children_start;

        for _ in 0..self.child_count {
            let &edge = data.get(cursor).ok_or(DictionaryError::TruncatedData)?;
            cursor += 1;

            let (delta, len) = varint::read(data, cursor)?;
            cursor += len;

            if edge == label {
                return self
                    .offset
                    .checked_sub(delta)
                    .map(Some)
                    .ok_or(DictionaryError::MalformedTrie);
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_with_definition() {
        // header 0xC0: marker + definition, no children; definition offset 7
        let data = [0xc0, 0x87];
        let node = Node::read(&data, 0).unwrap();
        assert_eq!(node.definition_offset, Some(7));
        assert_eq!(node.child_count, 0);
        assert_eq!(node.child(&data, b'a').unwrap(), None);
    }

    #[test]
    fn child_offset_is_backward_delta() {
        // leaf at 0, leaf at 2, parent at 4 with children 'a' -> 0 and 'b' -> 2
        let data = [0xc0, 0x80, 0xc0, 0x81, 0x42, b'a', 0x84, b'b', 0x82];
        let parent = Node::read(&data, 4).unwrap();
        assert_eq!(parent.definition_offset, None);
        assert_eq!(parent.child_count, 2);
        assert_eq!(parent.child(&data, b'a').unwrap(), Some(0));
        assert_eq!(parent.child(&data, b'b').unwrap(), Some(2));
        assert_eq!(parent.child(&data, b'c').unwrap(), None);
    }

    #[test]
    fn missing_marker_is_malformed() {
        assert_eq!(Node::read(&[0x80, 0x80], 0), Err(DictionaryError::MalformedTrie));
    }

    #[test]
    fn offset_outside_buffer_is_malformed() {
        assert_eq!(Node::read(&[0x40], 3), Err(DictionaryError::MalformedTrie));
    }

    #[test]
    fn delta_past_start_is_malformed() {
        let data = [0x41, b'a', 0x85];
        let node = Node::read(&data, 0).unwrap();
        assert_eq!(node.child(&data, b'a'), Err(DictionaryError::MalformedTrie));
    }

    #[test]
    fn truncated_child_list() {
        // claims two children but only one is present
        let data = [0xc0, 0x80, 0x42, b'a', 0x82];
        let node = Node::read(&data, 2).unwrap();
        assert_eq!(node.child(&data, b'z'), Err(DictionaryError::TruncatedData));
    }
}
