use super::detector::detect_compression;
use super::types::ProbeResult;
use crate::streams::seekable_stream::{LocalSeekableStream, SeekableStream};
use crate::swf::header::read_header;
use std::io::{self, Cursor};
use std::path::Path;

/// Probe a local file and return detailed information
pub fn probe_local_detailed<P: AsRef<Path>>(path: P) -> io::Result<ProbeResult> {
    let stream = LocalSeekableStream::open(path)?;
    probe_generic(stream)
}

/// Probe an in-memory file image
pub fn probe_bytes(data: &[u8]) -> io::Result<ProbeResult> {
    probe_generic(Cursor::new(data))
}

fn probe_generic<S: SeekableStream>(mut stream: S) -> io::Result<ProbeResult> {
    let size = stream.total_len()?;

    let compression = match detect_compression(&mut stream) {
        Ok(compression) => compression,
        Err(e) => {
            return Ok(ProbeResult {
                compression: None,
                version: None,
                size,
                is_valid: false,
                error: Some(e.to_string()),
            })
        }
    };

    match read_header(&mut stream) {
        Ok(header) => Ok(ProbeResult {
            compression: Some(compression),
            version: Some(header.version),
            size,
            is_valid: true,
            error: None,
        }),
        Err(e) => Ok(ProbeResult {
            compression: Some(compression),
            version: None,
            size,
            is_valid: false,
            error: Some(e.to_string()),
        }),
    }
}
