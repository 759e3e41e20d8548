use crate::swf::header::{Compression, DecodedHeader};
use crate::swf::scanner::ScanReport;
use serde::Serialize;

/// Header plus tag scan for one file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwfInfo {
    /// File size on disk (or in memory), which differs from the declared length for CWS.
    pub size: u64,
    pub header: DecodedHeader,
    pub scan: Option<ScanReport>,
    /// Why the tag scan failed when the header itself was readable.
    pub scan_error: Option<String>,
}

/// Probe result containing basic file information
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeResult {
    pub compression: Option<Compression>,
    pub version: Option<u8>,
    pub size: u64,
    pub is_valid: bool,
    pub error: Option<String>,
}
