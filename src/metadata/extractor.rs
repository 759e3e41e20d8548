use super::types::SwfInfo;
use crate::errors::SwfParserResult;
use crate::streams::seekable_stream::{LocalSeekableStream, SeekableStream};
use crate::swf::decompress::load_canonical;
use crate::swf::header::read_header;
use crate::swf::scanner::{scan_tags, ScanOptions};
use log::warn;
use std::io::Cursor;
use std::path::Path;

/// Read header and tag summary from a local file
pub fn read_local_info<P: AsRef<Path>>(path: P, options: &ScanOptions) -> SwfParserResult<SwfInfo> {
    let stream = LocalSeekableStream::open(path)?;
    extract_info_generic(stream, options)
}

/// Read header and tag summary from an in-memory file image
pub fn read_info_from_bytes(data: &[u8], options: &ScanOptions) -> SwfParserResult<SwfInfo> {
    extract_info_generic(Cursor::new(data), options)
}

/// Decode the header from a prefix, then rewind and scan the full body.
/// A failing scan is recorded rather than discarding a readable header.
fn extract_info_generic<S: SeekableStream>(
    mut stream: S,
    options: &ScanOptions,
) -> SwfParserResult<SwfInfo> {
    let size = stream.total_len()?;
    let header = read_header(&mut stream)?;

    stream.rewind_to_start()?;
    let scan = load_canonical(&mut stream).and_then(|(_, canonical)| scan_tags(&canonical, options));

    let (scan, scan_error) = match scan {
        Ok(report) => (Some(report), None),
        Err(e) => {
            warn!("Tag scan failed: {}", e);
            (None, Some(e.to_string()))
        }
    };

    Ok(SwfInfo {
        size,
        header,
        scan,
        scan_error,
    })
}
