use crate::errors::SwfParserResult;
use crate::streams::seekable_stream::SeekableStream;
use crate::swf::header::{Compression, ContainerHeader};

/// Detect the compression variant from the signature at the start of the stream.
/// The stream is left positioned at the start.
pub fn detect_compression<S: SeekableStream>(stream: &mut S) -> SwfParserResult<Compression> {
    stream.rewind_to_start()?;
    let header = ContainerHeader::read_from(stream);
    stream.rewind_to_start()?;
    Ok(header?.compression)
}

/// Get format name as string for display
pub fn format_to_string(compression: &Compression) -> String {
    let support = if compression.is_supported() {
        ""
    } else {
        " (not supported)"
    };
    format!(
        "{} ({}){}",
        compression.signature(),
        compression.description(),
        support
    )
}
