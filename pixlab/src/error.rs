//! Error types for the pixlab umbrella crate

use thiserror::Error;

/// Errors surfaced by operation dispatch and the image processor
#[derive(Debug, Error)]
pub enum PixlabError {
    #[error("core error: {0}")]
    Core(#[from] pixlab_core::Error),

    #[error("color error: {0}")]
    Color(#[from] pixlab_color::ColorError),

    #[error("filter error: {0}")]
    Filter(#[from] pixlab_filter::FilterError),

    #[error("io error: {0}")]
    Io(#[from] pixlab_io::IoError),

    /// Transform options outside their valid range
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for dispatch and processing
pub type PixlabResult<T> = Result<T, PixlabError>;
