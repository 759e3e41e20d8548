use crate::bits::reader::{read_u16_le, BitReader};
use crate::errors::{SwfParserError, SwfParserResult, TooShortError};
use crate::streams::seekable_stream::LocalSeekableStream;
use crate::swf::decompress::{read_body, ReadMode, HEADER_PREFIX_LEN};
use crate::swf::rect::{rect_byte_len, StageRect};
use log::debug;
use serde::Serialize;
use std::io::{Cursor, ErrorKind, Read};
use std::path::Path;

/// Size of the fixed container header: signature, version, declared length.
pub const CONTAINER_HEADER_LEN: usize = 8;

/// Compression variant, identified by the three-byte signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Compression {
    /// `FWS`
    Uncompressed,
    /// `CWS`
    Zlib,
    /// `ZWS`, recognised but not decoded
    Lzma,
}

impl Compression {
    pub fn from_signature(sig: &[u8; 3]) -> Option<Self> {
        match sig {
            b"FWS" => Some(Compression::Uncompressed),
            b"CWS" => Some(Compression::Zlib),
            b"ZWS" => Some(Compression::Lzma),
            _ => None,
        }
    }

    pub fn signature(&self) -> &'static str {
        match self {
            Compression::Uncompressed => "FWS",
            Compression::Zlib => "CWS",
            Compression::Lzma => "ZWS",
        }
    }

    /// Human readable label for display
    pub fn description(&self) -> &'static str {
        match self {
            Compression::Uncompressed => "Uncompressed SWF",
            Compression::Zlib => "Zlib-compressed SWF",
            Compression::Lzma => "LZMA-compressed SWF",
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Compression::Lzma)
    }
}

/// The 8-byte prefix shared by every container variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContainerHeader {
    pub compression: Compression,
    pub version: u8,
    /// Total uncompressed length, including these 8 bytes.
    pub declared_length: u32,
}

impl ContainerHeader {
    /// Parse the container header from the first 8 bytes of `data`.
    pub fn parse(data: &[u8]) -> SwfParserResult<Self> {
        if data.len() < CONTAINER_HEADER_LEN {
            return Err(TooShortError::new(format!(
                "container header needs {} bytes, got {}",
                CONTAINER_HEADER_LEN,
                data.len()
            ))
            .into());
        }
        let sig = [data[0], data[1], data[2]];
        let compression =
            Compression::from_signature(&sig).ok_or(SwfParserError::InvalidSignature(sig))?;
        Ok(ContainerHeader {
            compression,
            version: data[3],
            declared_length: u32::from_le_bytes([data[4], data[5], data[6], data[7]]),
        })
    }

    /// Read and parse the container header from the start of `reader`.
    pub fn read_from<R: Read>(reader: &mut R) -> SwfParserResult<Self> {
        let mut raw = [0u8; CONTAINER_HEADER_LEN];
        let got = read_up_to(reader, &mut raw)?;
        Self::parse(&raw[..got])
    }
}

/// Fill `buf` from `reader`, stopping early only at end of input.
pub(crate) fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> SwfParserResult<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}

/// Movie header: container fields plus stage size, frame rate and frame count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedHeader {
    pub compression: Compression,
    pub version: u8,
    pub declared_length: u32,
    /// Stage bounds in twips.
    pub stage: StageRect,
    pub width_px: i32,
    pub height_px: i32,
    /// Raw 8.8 fixed-point frame rate.
    pub frame_rate_fixed: u16,
    pub frame_rate: f32,
    pub frame_count: u16,
}

impl DecodedHeader {
    pub fn signature(&self) -> &'static str {
        self.compression.signature()
    }
}

/// Read the movie header from a stream positioned at the start of the file.
///
/// Only a bounded prefix of the body is decompressed, enough for the stage
/// bounds and the two 16-bit fields that follow.
pub fn read_header<R: Read>(reader: &mut R) -> SwfParserResult<DecodedHeader> {
    let container = ContainerHeader::read_from(reader)?;
    let prefix = read_body(reader, container.compression, HEADER_PREFIX_LEN, ReadMode::Prefix)?;
    decode_movie_header(&container, &prefix)
}

/// Read the movie header from an in-memory file image
pub fn read_header_from_bytes(data: &[u8]) -> SwfParserResult<DecodedHeader> {
    let mut cursor = Cursor::new(data);
    read_header(&mut cursor)
}

/// Read the movie header from a local file
pub fn read_local_header<P: AsRef<Path>>(path: P) -> SwfParserResult<DecodedHeader> {
    let mut stream = LocalSeekableStream::open(path)?;
    read_header(&mut stream)
}

/// Decode stage bounds, frame rate and frame count from the uncompressed body prefix.
pub fn decode_movie_header(
    container: &ContainerHeader,
    prefix: &[u8],
) -> SwfParserResult<DecodedHeader> {
    let mut reader = BitReader::new(prefix);
    let stage = StageRect::decode(&mut reader);
    let mut pos = reader.byte_position();

    let (frame_rate_fixed, frame_count) =
        match (read_u16_le(prefix, &mut pos), read_u16_le(prefix, &mut pos)) {
            (Some(rate), Some(count)) => (rate, count),
            _ => {
                return Err(TooShortError::new(format!(
                    "header prefix of {} bytes ends before frame rate and count at offset {}",
                    prefix.len(),
                    reader.byte_position()
                ))
                .into())
            }
        };

    let header = DecodedHeader {
        compression: container.compression,
        version: container.version,
        declared_length: container.declared_length,
        stage,
        width_px: stage.width_px(),
        height_px: stage.height_px(),
        frame_rate_fixed,
        frame_rate: f32::from(frame_rate_fixed) / 256.0,
        frame_count,
    };
    debug!(
        "{} v{}: {}x{} px, {:.2} fps, {} frames",
        header.signature(),
        header.version,
        header.width_px,
        header.height_px,
        header.frame_rate,
        header.frame_count
    );
    Ok(header)
}

/// Offset of the first tag record in a canonical buffer:
/// container header, stage RECT, then frame rate and frame count.
pub fn tag_stream_offset(canonical: &[u8]) -> SwfParserResult<usize> {
    let rect_len = canonical
        .get(CONTAINER_HEADER_LEN..)
        .and_then(rect_byte_len)
        .ok_or_else(|| {
            TooShortError::new(format!(
                "buffer of {} bytes has no stage bounds",
                canonical.len()
            ))
        })?;
    let offset = CONTAINER_HEADER_LEN + rect_len + 4;
    if offset > canonical.len() {
        return Err(TooShortError::new(format!(
            "tag stream offset {} past end of {}-byte buffer",
            offset,
            canonical.len()
        ))
        .into());
    }
    Ok(offset)
}
