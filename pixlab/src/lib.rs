//! pixlab - Deterministic image transforms for before/after display
//!
//! A decoded image goes in, one named transform is applied, and the
//! result comes back as a new image or as a PNG `data:` URL:
//!
//! - Binarization (Otsu global threshold, Gaussian adaptive threshold)
//! - Contrast stretch by histogram equalization
//! - Per-sample arithmetic (negative, saturating multiply, power-law)
//!
//! # Example
//!
//! ```
//! use pixlab::{Pix, TransformOptions, apply_id};
//!
//! let pix = Pix::from_raw(1, 1, 1, vec![10]).unwrap();
//! let opts = TransformOptions { multiply_factor: 3.0, ..Default::default() };
//! let out = apply_id(&pix, Some("multiply_by_constant"), &opts).unwrap();
//! assert_eq!(out.data(), &[30]);
//! ```

mod dispatch;
mod error;
mod processor;

// Re-export core types (primary data structures used everywhere)
pub use pixlab_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pixlab_color as color;
pub use pixlab_filter as filter;
pub use pixlab_io as io;

pub use dispatch::{Operation, TransformOptions, apply, apply_id};
pub use error::{PixlabError, PixlabResult};
pub use processor::{ImageProcessor, ProcessedPair};
