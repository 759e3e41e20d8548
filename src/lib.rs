pub mod bits;
pub use bits::reader::{mask, BitReader};

pub mod swf;
pub use swf::{
    canonicalize, load_canonical_from_bytes, load_local_canonical, read_header,
    read_header_from_bytes, read_local_header, scan_local_tags, scan_tags, scan_tags_from_bytes,
    tag_name, Compression, ContainerHeader, DecodedHeader, ScanOptions, ScanReport, StageRect,
    StreamLevel, TagSummary, TraceLine,
};

pub mod streams;
pub use streams::{LocalSeekableStream, SeekableStream};

pub mod metadata;
pub use metadata::{detect_compression, ProbeResult, SwfInfo};

pub mod errors;
pub use errors::{DecompressionError, SwfParserError, SwfParserResult, TooShortError};

/// Read header and tag summary from a local file with default scan options.
pub fn inspect<P: AsRef<std::path::Path>>(path: P) -> SwfParserResult<SwfInfo> {
    metadata::read_local_info(path, &ScanOptions::default())
}
