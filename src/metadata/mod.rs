mod detector;
mod extractor;
mod probe;
mod types;

pub use detector::{detect_compression, format_to_string};
pub use extractor::{read_info_from_bytes, read_local_info};
pub use probe::{probe_bytes, probe_local_detailed};

pub use types::*;
