/*
# Bits Reader Module

 Provides utilities for reading binary data from byte slices with bit-level precision.
 SWF stores multi-byte integers little-endian but packs bit fields most-significant-bit
 first inside each byte, so both flavours live here.

 Key components:
 - Slice readers: `read_u16_le()`, `read_u32_le()` with position tracking
 - BitReader: MSB-first bit reader that yields zeros past the end of its buffer
*/

/// Mask for the `n` least significant bits.
pub fn mask(n: u32) -> u32 {
    if n >= 32 {
        u32::MAX
    } else {
        (1u32 << n) - 1
    }
}

/// Read a 16-bit little endian value from a byte slice advancing the position.
pub fn read_u16_le(data: &[u8], pos: &mut usize) -> Option<u16> {
    let bytes = data.get(*pos..pos.checked_add(2)?)?;
    *pos += 2;
    Some(u16::from_le_bytes([bytes[0], bytes[1]]))
}

/// Read a 32-bit little endian value from a byte slice advancing the position.
pub fn read_u32_le(data: &[u8], pos: &mut usize) -> Option<u32> {
    let bytes = data.get(*pos..pos.checked_add(4)?)?;
    *pos += 4;
    Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// `BitReader` reads MSB-first bit fields from a byte slice.
///
/// Truncated inputs are tolerated: every bit past the end of the slice reads
/// as zero, so callers check `byte_position()` against the slice length when
/// they need to know whether a field was complete.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    bit_pos: usize,
}

impl<'a> BitReader<'a> {
    /// Create a new `BitReader` positioned at the first bit of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, bit_pos: 0 }
    }

    /// Read `n` bits and return them as the lowest bits of a `u32`.
    /// `n` is clamped to 32.
    pub fn read_unsigned(&mut self, n: u32) -> u32 {
        let n = n.min(32);
        let mut value = 0u32;
        for _ in 0..n {
            let byte = self.data.get(self.bit_pos >> 3).copied().unwrap_or(0);
            let shift = 7 - (self.bit_pos & 7);
            value = (value << 1) | u32::from((byte >> shift) & 1);
            self.bit_pos += 1;
        }
        value
    }

    /// Read `n` bits and interpret as a signed integer.
    pub fn read_signed(&mut self, n: u32) -> i32 {
        let n = n.min(32);
        let v = self.read_unsigned(n);
        if n == 0 || n == 32 {
            return v as i32;
        }
        if (v >> (n - 1)) & 1 == 1 {
            (v | !mask(n)) as i32
        } else {
            v as i32
        }
    }

    /// Read a single bit interpreted as a boolean flag.
    pub fn read_flag(&mut self) -> bool {
        self.read_unsigned(1) == 1
    }

    /// Skip to the start of the next byte. No-op when already aligned.
    pub fn align_to_byte(&mut self) {
        let rem = self.bit_pos & 7;
        if rem != 0 {
            self.bit_pos += 8 - rem;
        }
    }

    /// Total number of bits read.
    pub fn bit_position(&self) -> usize {
        self.bit_pos
    }

    /// Number of bytes touched so far, counting a partially read byte.
    pub fn byte_position(&self) -> usize {
        self.bit_pos.div_ceil(8)
    }
}
