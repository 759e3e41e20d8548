/*
# Body decompression

 Turns a container (uncompressed or zlib) into a canonical uncompressed buffer whose
 first 8 bytes always read `FWS`, the original version and the original declared
 length. Downstream offset arithmetic never has to care which variant it came from.
*/

use crate::errors::{DecompressionError, SwfParserError, SwfParserResult};
use crate::streams::seekable_stream::LocalSeekableStream;
use crate::swf::header::{Compression, ContainerHeader, CONTAINER_HEADER_LEN};
use flate2::{Decompress, FlushDecompress, Status};
use log::{debug, warn};
use std::io::{Cursor, ErrorKind, Read};
use std::path::Path;

/// Smallest declared length accepted: the container header alone.
pub const MIN_DECLARED_LENGTH: u32 = 8;
/// Largest declared length accepted before allocating the body (12 MiB).
pub const MAX_DECLARED_LENGTH: u32 = 12 * 1024 * 1024;
/// Body bytes requested when only the movie header is needed.
pub const HEADER_PREFIX_LEN: usize = 256;
/// Compressed input is fed to the inflater in chunks of this size.
const INPUT_CHUNK_SIZE: usize = 2048;

/// How to treat a compressed stream that ends before `limit` bytes were produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMode {
    /// Return whatever was produced; the caller checks what it needs.
    Prefix,
    /// The whole body is expected; early end of input is a decompression error.
    Full,
}

/// Check the declared length against the safety window and return the body length.
pub fn validate_declared_length(declared: u32) -> SwfParserResult<usize> {
    if !(MIN_DECLARED_LENGTH..=MAX_DECLARED_LENGTH).contains(&declared) {
        return Err(SwfParserError::SizeOutOfBounds { declared });
    }
    Ok(declared as usize - CONTAINER_HEADER_LEN)
}

/// Read at most `limit` uncompressed body bytes from `reader`, which must be
/// positioned right after the container header.
pub fn read_body<R: Read>(
    reader: &mut R,
    compression: Compression,
    limit: usize,
    mode: ReadMode,
) -> SwfParserResult<Vec<u8>> {
    match compression {
        Compression::Uncompressed => read_stored(reader, limit),
        Compression::Zlib => inflate_zlib(reader, limit, mode),
        Compression::Lzma => Err(SwfParserError::UnsupportedCompression(compression)),
    }
}

fn read_stored<R: Read>(reader: &mut R, limit: usize) -> SwfParserResult<Vec<u8>> {
    let mut body = Vec::with_capacity(limit);
    reader.by_ref().take(limit as u64).read_to_end(&mut body)?;
    if body.len() < limit {
        debug!(
            "Uncompressed body shorter than requested: {} of {} bytes",
            body.len(),
            limit
        );
    }
    Ok(body)
}

fn inflate_zlib<R: Read>(reader: &mut R, limit: usize, mode: ReadMode) -> SwfParserResult<Vec<u8>> {
    let mut inflater = Decompress::new(true);
    let mut output = Vec::with_capacity(limit);
    // Receives output past `limit` while a full read drains the stream to its trailer.
    let mut overflow = Vec::with_capacity(INPUT_CHUNK_SIZE);
    let mut input = [0u8; INPUT_CHUNK_SIZE];
    let mut start = 0usize;
    let mut end = 0usize;
    let mut eof = false;

    loop {
        let full = output.len() >= limit;
        if full && mode == ReadMode::Prefix {
            output.truncate(limit);
            return Ok(output);
        }

        if start == end && !eof {
            end = loop {
                match reader.read(&mut input) {
                    Ok(n) => break n,
                    Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e.into()),
                }
            };
            start = 0;
            eof = end == 0;
        }

        let flush = if eof {
            FlushDecompress::Finish
        } else {
            FlushDecompress::None
        };
        let sink = if full {
            overflow.clear();
            &mut overflow
        } else {
            &mut output
        };
        let in_before = inflater.total_in();
        let out_before = inflater.total_out();
        let status = match inflater.decompress_vec(&input[start..end], sink, flush) {
            Ok(status) => status,
            Err(e) if eof && mode == ReadMode::Prefix => {
                warn!(
                    "Zlib stream failed after {} prefix bytes: {}",
                    output.len(),
                    e
                );
                return Ok(output);
            }
            Err(e) => {
                return Err(DecompressionError::new(format!("corrupt zlib stream: {}", e)).into())
            }
        };
        let consumed = (inflater.total_in() - in_before) as usize;
        let produced = inflater.total_out() - out_before;
        start += consumed;

        if status == Status::StreamEnd {
            let total = inflater.total_out();
            if total > limit as u64 {
                warn!(
                    "Zlib stream inflates to {} bytes, ignoring {} past the declared body length",
                    total,
                    total - limit as u64
                );
            }
            debug!("Zlib stream ended after {} bytes", total);
            output.truncate(limit);
            return Ok(output);
        }

        if consumed == 0 && produced == 0 {
            if !eof {
                return Err(DecompressionError::new("zlib stream made no progress").into());
            }
            return match mode {
                ReadMode::Prefix => Ok(output),
                ReadMode::Full => Err(DecompressionError::new(format!(
                    "zlib stream ended prematurely after {} of {} bytes",
                    inflater.total_out().min(limit as u64),
                    limit
                ))
                .into()),
            };
        }
    }
}

/// Build a new buffer with a synthetic `FWS` header followed by `body`.
pub fn canonicalize(header: &ContainerHeader, body: &[u8]) -> Vec<u8> {
    let mut canonical = Vec::with_capacity(CONTAINER_HEADER_LEN + body.len());
    canonical.extend_from_slice(Compression::Uncompressed.signature().as_bytes());
    canonical.push(header.version);
    canonical.extend_from_slice(&header.declared_length.to_le_bytes());
    canonical.extend_from_slice(body);
    canonical
}

/// Read a whole container and return its header and canonical uncompressed buffer.
pub fn load_canonical<R: Read>(reader: &mut R) -> SwfParserResult<(ContainerHeader, Vec<u8>)> {
    let header = ContainerHeader::read_from(reader)?;
    let body_len = validate_declared_length(header.declared_length)?;
    let body = read_body(reader, header.compression, body_len, ReadMode::Full)?;
    if body.len() < body_len {
        warn!(
            "Body truncated: {} of {} declared bytes available",
            body.len(),
            body_len
        );
    }
    Ok((header, canonicalize(&header, &body)))
}

/// Canonical buffer from an in-memory file image
pub fn load_canonical_from_bytes(data: &[u8]) -> SwfParserResult<(ContainerHeader, Vec<u8>)> {
    let mut cursor = Cursor::new(data);
    load_canonical(&mut cursor)
}

/// Canonical buffer from a local file
pub fn load_local_canonical<P: AsRef<Path>>(
    path: P,
) -> SwfParserResult<(ContainerHeader, Vec<u8>)> {
    let mut stream = LocalSeekableStream::open(path)?;
    load_canonical(&mut stream)
}
