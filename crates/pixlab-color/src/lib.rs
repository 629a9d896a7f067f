//! pixlab Color - Grayscale conversion and binarization
//!
//! This crate provides:
//!
//! - **Color space conversion** ([`colorspace`]): BGR -> grayscale
//! - **Thresholding** ([`threshold`]): Otsu's method (global) and
//!   Gaussian/mean adaptive (local) binarization
//! - **Contrast** ([`contrast`]): grayscale histogram equalization

pub mod colorspace;
pub mod contrast;
pub mod error;
pub mod threshold;

// Re-export core types
pub use pixlab_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

// Re-export color space functions
pub use colorspace::{bgr_to_gray, pix_convert_to_gray};
pub use contrast::linear_contrast;

// Re-export threshold functions
pub use threshold::{
    // Types
    AdaptiveMethod,
    AdaptiveThresholdOptions,
    // Functions
    adaptive_threshold,
    compute_otsu_threshold,
    otsu_threshold_from_histogram,
    threshold_otsu,
};
