pub mod decompress;
pub use decompress::{
    canonicalize, load_canonical, load_canonical_from_bytes, load_local_canonical, read_body,
    validate_declared_length, ReadMode, MAX_DECLARED_LENGTH, MIN_DECLARED_LENGTH,
};
pub mod header;
pub use header::{
    read_header, read_header_from_bytes, read_local_header, tag_stream_offset, Compression,
    ContainerHeader, DecodedHeader,
};
pub mod rect;
pub use rect::StageRect;
pub mod record;
pub use record::{parse_record_header, TagRecord};
pub mod scanner;
pub use scanner::{
    scan_local_tags, scan_tags, scan_tags_from_bytes, ScanOptions, ScanReport, StreamLevel,
    TagSummary, TraceLine,
};
pub mod tags;
pub use tags::tag_name;

#[cfg(test)]
mod header_test;
#[cfg(test)]
pub(crate) mod test_support;
