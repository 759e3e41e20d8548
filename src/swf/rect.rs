use crate::bits::reader::BitReader;
use serde::Serialize;

/// Twips per pixel.
pub const TWIPS_PER_PIXEL: i64 = 20;

/// Stage bounds as stored in the movie header, in twips
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StageRect {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl StageRect {
    /// Decode a bit-packed RECT: 5-bit field width, then xmin, xmax, ymin, ymax.
    /// The reader is left byte-aligned after the record.
    pub fn decode(reader: &mut BitReader<'_>) -> Self {
        let nbits = reader.read_unsigned(5);
        let x_min = reader.read_signed(nbits);
        let x_max = reader.read_signed(nbits);
        let y_min = reader.read_signed(nbits);
        let y_max = reader.read_signed(nbits);
        reader.align_to_byte();
        StageRect {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Width in whole pixels, truncated toward zero.
    pub fn width_px(&self) -> i32 {
        twips_to_px(self.x_min, self.x_max)
    }

    /// Height in whole pixels, truncated toward zero.
    pub fn height_px(&self) -> i32 {
        twips_to_px(self.y_min, self.y_max)
    }
}

fn twips_to_px(min: i32, max: i32) -> i32 {
    // i64 keeps the subtraction from overflowing on 31-bit fields
    ((i64::from(max) - i64::from(min)) / TWIPS_PER_PIXEL) as i32
}

/// Size in bytes of the RECT starting at `data[0]`, derived from its 5-bit width field.
pub fn rect_byte_len(data: &[u8]) -> Option<usize> {
    let first = *data.first()?;
    let nbits = u32::from(first >> 3);
    Some((5 + 4 * nbits).div_ceil(8) as usize)
}
