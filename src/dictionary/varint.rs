//! Variable-length integers used by the dictionary assets
//!
//! Values are stored as 7-bit groups, least significant group first. Unlike
//! LEB128, the byte with the high bit *set* is the last one of the value.

use super::DictionaryError;

/// Read a varint at `offset`, returning the value and the number of bytes used
///
/// # Errors
///
/// Returns `DictionaryError::TruncatedData` if the buffer ends before the
/// final group and `DictionaryError::MalformedTrie` if the value does not
/// fit in a `usize`.
pub fn read(data: &[u8], offset: usize) -> Result<(usize, usize), DictionaryError> {
    let mut value = 0usize;

    for (byte_num, &byte) in data.get(offset..).unwrap_or_default().iter().enumerate() {
        let shift = byte_num * 7;
        let group = usize::from(byte & 0x7f);
        // Bits shifted past the top of a usize would be lost
        if shift >= usize::BITS as usize || (group << shift) >> shift != group {
            return Err(DictionaryError::MalformedTrie);
        }

        value |= group << shift;

        if byte & 0x80 != 0 {
            return Ok((value, byte_num + 1));
        }
    }

    Err(DictionaryError::TruncatedData)
}

#[cfg(test)]
pub fn write(out: &mut Vec<u8>, mut value: usize) {
    loop {
        let group = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            out.push(group | 0x80);
            return;
        }
        out.push(group);
    }
}
