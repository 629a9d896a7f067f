//! Error types for pixlab-color

use thiserror::Error;

/// Errors that can occur during color processing operations
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixlab_core::Error),

    /// Filter error from the local-mean computation
    #[error("filter error: {0}")]
    Filter(#[from] pixlab_filter::FilterError),

    /// Channel layout that cannot be converted to grayscale
    #[error("invalid channel count: expected 1 or 3, got {0}")]
    InvalidChannelCount(u32),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
