use crate::bits::reader::{read_u16_le, read_u32_le};
use crate::errors::SwfParserResult;
use crate::swf::decompress::{load_canonical_from_bytes, load_local_canonical};
use crate::swf::header::tag_stream_offset;
use crate::swf::record::parse_record_header;
use crate::swf::tags::{self, file_attributes, tag_name};
use log::{debug, info, warn};
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Default number of trace lines kept per scan.
pub const DEFAULT_TRACE_LIMIT: usize = 15;

/// Options controlling a tag scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScanOptions {
    /// Maximum number of tag lines in the trace, shared by the root and all sprites.
    pub trace_limit: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            trace_limit: DEFAULT_TRACE_LIMIT,
        }
    }
}

impl ScanOptions {
    pub fn with_trace_limit(mut self, trace_limit: usize) -> Self {
        self.trace_limit = trace_limit;
        self
    }
}

/// Whether a stream is the main timeline or a sprite's
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StreamLevel {
    Root,
    Sprite,
}

/// Aggregate counts over the root timeline and every sprite timeline
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct TagSummary {
    pub total_tags: u32,
    pub frame_marker_tags: u32,

    pub sprite_count: u32,
    pub sprite_tags: u32,
    pub sprite_frame_marker_tags: u32,

    // From FileAttributes
    pub has_capabilities_tag: bool,
    pub network_requested: bool,
    /// AVM2 / ActionScript 3
    pub uses_vm2: bool,
    pub has_metadata: bool,
}

/// One diagnostic line produced while scanning
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TraceLine {
    Tag {
        level: StreamLevel,
        /// Running root tag number, or the index within the current sprite.
        index: u32,
        code: u16,
        length: u32,
        depth: usize,
    },
    SpriteDetails {
        id: u16,
        frames: u16,
        depth: usize,
    },
}

impl fmt::Display for TraceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceLine::Tag {
                level: StreamLevel::Root,
                index,
                code,
                length,
                depth,
            } => write!(
                f,
                "{}{:4}: tag={} ({}), len={}",
                "  ".repeat(*depth),
                index,
                code,
                tag_name(*code),
                length
            ),
            TraceLine::Tag {
                level: StreamLevel::Sprite,
                index,
                code,
                length,
                depth,
            } => write!(
                f,
                "{}  s{:3}: tag={} ({}), len={}",
                "  ".repeat(*depth),
                index,
                code,
                tag_name(*code),
                length
            ),
            TraceLine::SpriteDetails { id, frames, depth } => write!(
                f,
                "{}DefineSprite details: id={}, frames={}",
                "  ".repeat(*depth + 1),
                id,
                frames
            ),
        }
    }
}

/// Result of a full tag scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub summary: TagSummary,
    pub trace: Vec<TraceLine>,
    /// Streams cut short by a record running past the end of the data.
    pub truncated_streams: u32,
}

struct ScanState {
    summary: TagSummary,
    trace: Vec<TraceLine>,
    trace_remaining: usize,
    truncated_streams: u32,
}

impl ScanState {
    fn new(options: &ScanOptions) -> Self {
        Self {
            summary: TagSummary::default(),
            trace: Vec::new(),
            trace_remaining: options.trace_limit,
            truncated_streams: 0,
        }
    }

    fn trace_tag(&mut self, line: TraceLine) {
        if self.trace_remaining > 0 {
            self.trace.push(line);
            self.trace_remaining -= 1;
        }
    }

    /// Informational lines are shown while budget remains but do not consume it.
    fn trace_note(&mut self, line: TraceLine) {
        if self.trace_remaining > 0 {
            self.trace.push(line);
        }
    }
}

/// Scan the tag stream of a canonical uncompressed buffer
pub fn scan_tags(canonical: &[u8], options: &ScanOptions) -> SwfParserResult<ScanReport> {
    let offset = tag_stream_offset(canonical)?;
    let mut state = ScanState::new(options);
    scan_stream(&canonical[offset..], StreamLevel::Root, 0, &mut state);

    let summary = &state.summary;
    info!(
        "Scanned {} root tags ({} frames), {} sprites with {} tags ({} frames)",
        summary.total_tags,
        summary.frame_marker_tags,
        summary.sprite_count,
        summary.sprite_tags,
        summary.sprite_frame_marker_tags
    );

    Ok(ScanReport {
        summary: state.summary,
        trace: state.trace,
        truncated_streams: state.truncated_streams,
    })
}

/// Decompress an in-memory file image and scan its tags
pub fn scan_tags_from_bytes(data: &[u8], options: &ScanOptions) -> SwfParserResult<ScanReport> {
    let (_, canonical) = load_canonical_from_bytes(data)?;
    scan_tags(&canonical, options)
}

/// Decompress a local file and scan its tags
pub fn scan_local_tags<P: AsRef<Path>>(
    path: P,
    options: &ScanOptions,
) -> SwfParserResult<ScanReport> {
    let (_, canonical) = load_local_canonical(path)?;
    scan_tags(&canonical, options)
}

/// Walk one tag stream, recursing into sprites declared at the root.
fn scan_stream(data: &[u8], level: StreamLevel, depth: usize, state: &mut ScanState) {
    let mut pos = 0usize;
    let mut local_index = 0u32;

    while pos + 2 <= data.len() {
        let header_start = pos;
        let Some(record) = parse_record_header(data, &mut pos) else {
            warn!(
                "{:?} stream: incomplete record header at offset {}",
                level, header_start
            );
            state.truncated_streams += 1;
            break;
        };
        let Some(payload_end) = record.payload_end(data.len()) else {
            warn!(
                "{:?} stream: tag {} at offset {} claims {} bytes, only {} left",
                level,
                record.code,
                header_start,
                record.length,
                data.len() - record.payload_offset
            );
            state.truncated_streams += 1;
            break;
        };
        let payload = &data[record.payload_offset..payload_end];
        local_index += 1;

        debug!(
            "{:?} tag {} ({}) len {} at offset {}",
            level,
            record.code,
            tag_name(record.code),
            record.length,
            header_start
        );

        let index = match level {
            StreamLevel::Root => {
                state.summary.total_tags += 1;
                if record.code == tags::SHOW_FRAME {
                    state.summary.frame_marker_tags += 1;
                }
                state.summary.total_tags
            }
            StreamLevel::Sprite => {
                state.summary.sprite_tags += 1;
                if record.code == tags::SHOW_FRAME {
                    state.summary.sprite_frame_marker_tags += 1;
                }
                local_index
            }
        };

        if level == StreamLevel::Root && record.code == tags::FILE_ATTRIBUTES {
            let mut flag_pos = 0;
            if let Some(flags) = read_u32_le(payload, &mut flag_pos) {
                let summary = &mut state.summary;
                summary.has_capabilities_tag = true;
                summary.network_requested = flags & file_attributes::USE_NETWORK != 0;
                summary.uses_vm2 = flags & file_attributes::ACTION_SCRIPT3 != 0;
                summary.has_metadata = flags & file_attributes::HAS_METADATA != 0;
            }
        }

        state.trace_tag(TraceLine::Tag {
            level,
            index,
            code: record.code,
            length: record.length,
            depth,
        });

        if level == StreamLevel::Root && record.code == tags::DEFINE_SPRITE && payload.len() >= 4
        {
            let mut sprite_pos = 0;
            let id = read_u16_le(payload, &mut sprite_pos).unwrap_or_default();
            let frames = read_u16_le(payload, &mut sprite_pos).unwrap_or_default();
            state.summary.sprite_count += 1;
            state.trace_note(TraceLine::SpriteDetails { id, frames, depth });
            scan_stream(&payload[sprite_pos..], StreamLevel::Sprite, depth + 1, state);
        }

        pos = payload_end;

        if record.code == tags::END {
            break;
        }
    }
}
