use crate::bits::reader::{read_u16_le, read_u32_le};

/// Short-form length value signalling that a 32-bit length follows.
pub const LONG_LENGTH_MARKER: u32 = 0x3f;

/// Tag record header information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagRecord {
    pub code: u16,
    pub length: u32,
    /// Offset of the payload within the slice the header was parsed from.
    pub payload_offset: usize,
}

impl TagRecord {
    /// End offset of the payload, if it lies within `available` bytes.
    pub fn payload_end(&self, available: usize) -> Option<usize> {
        let end = self.payload_offset.checked_add(self.length as usize)?;
        (end <= available).then_some(end)
    }
}

/// Parse a record header from a byte slice advancing the cursor.
///
/// The 16-bit little-endian word carries the tag code in its upper 10 bits
/// and a short length in the lower 6; a short length of 63 means a 32-bit
/// little-endian length follows. Returns `None` when the header itself does
/// not fit; the cursor is then left unspecified.
pub fn parse_record_header(data: &[u8], pos: &mut usize) -> Option<TagRecord> {
    let code_and_length = read_u16_le(data, pos)?;
    let code = code_and_length >> 6;
    let mut length = u32::from(code_and_length) & LONG_LENGTH_MARKER;
    if length == LONG_LENGTH_MARKER {
        length = read_u32_le(data, pos)?;
    }
    Some(TagRecord {
        code,
        length,
        payload_offset: *pos,
    })
}
