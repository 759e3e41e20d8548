use std::error::Error;
use std::fmt;
use std::io;

use crate::swf::header::Compression;

/// Enumeration of all possible errors that can occur in the SWF parser
#[derive(Debug)]
pub enum SwfParserError {
    /// Underlying I/O failure, including a missing file.
    Io(io::Error),
    TooShort(TooShortError),
    /// The first three bytes are not one of `FWS`, `CWS` or `ZWS`.
    InvalidSignature([u8; 3]),
    /// Recognised container variant that this parser cannot decode.
    UnsupportedCompression(Compression),
    Decompression(DecompressionError),
    /// Declared length outside the accepted safety window.
    SizeOutOfBounds { declared: u32 },
}

/// Not enough bytes to decode a fixed-layout structure
#[derive(Debug)]
pub struct TooShortError {
    pub message: String,
}

impl TooShortError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Zlib stream was corrupt or ended early
#[derive(Debug)]
pub struct DecompressionError {
    pub message: String,
}

impl DecompressionError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for SwfParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwfParserError::Io(err) => write!(f, "I/O error: {}", err),
            SwfParserError::TooShort(err) => write!(f, "Input too short: {}", err),
            SwfParserError::InvalidSignature(sig) => {
                write!(f, "Invalid signature: {:?}", String::from_utf8_lossy(sig))
            }
            SwfParserError::UnsupportedCompression(compression) => write!(
                f,
                "Unsupported compression: {} ({})",
                compression.signature(),
                compression.description()
            ),
            SwfParserError::Decompression(err) => write!(f, "Decompression error: {}", err),
            SwfParserError::SizeOutOfBounds { declared } => write!(
                f,
                "Declared length {} outside accepted range [{}, {}]",
                declared,
                crate::swf::decompress::MIN_DECLARED_LENGTH,
                crate::swf::decompress::MAX_DECLARED_LENGTH
            ),
        }
    }
}

impl fmt::Display for TooShortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for DecompressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for SwfParserError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SwfParserError::Io(err) => Some(err),
            SwfParserError::TooShort(err) => Some(err),
            SwfParserError::Decompression(err) => Some(err),
            _ => None,
        }
    }
}
impl Error for TooShortError {}
impl Error for DecompressionError {}

// Conversion implementations
impl From<io::Error> for SwfParserError {
    fn from(err: io::Error) -> Self {
        SwfParserError::Io(err)
    }
}

impl From<TooShortError> for SwfParserError {
    fn from(err: TooShortError) -> Self {
        SwfParserError::TooShort(err)
    }
}

impl From<DecompressionError> for SwfParserError {
    fn from(err: DecompressionError) -> Self {
        SwfParserError::Decompression(err)
    }
}

// Conversion to io::Error for callers working in io::Result
impl From<SwfParserError> for io::Error {
    fn from(err: SwfParserError) -> Self {
        match err {
            SwfParserError::Io(inner) => inner,
            SwfParserError::UnsupportedCompression(_) => {
                io::Error::new(io::ErrorKind::Unsupported, err)
            }
            SwfParserError::TooShort(_) => io::Error::new(io::ErrorKind::UnexpectedEof, err),
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}

// Type alias for Result with SwfParserError
pub type SwfParserResult<T> = Result<T, SwfParserError>;
