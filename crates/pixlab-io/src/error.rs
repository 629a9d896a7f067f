//! Error type for loading and encoding images

use thiserror::Error;

/// Failure to load, decode or encode an image
#[derive(Error, Debug)]
pub enum IoError {
    /// The file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unrecognized bytes, or a format that is detected but not decoded
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// Corrupt or truncated input
    #[error("decode error: {0}")]
    DecodeError(String),

    /// The buffer could not be serialized
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Decoded geometry rejected by [`pixlab_core::Pix::from_raw`]
    #[error("core error: {0}")]
    Core(#[from] pixlab_core::Error),
}

pub type IoResult<T> = Result<T, IoError>;
