//! pixlab-test - Regression test framework for pixlab
//!
//! Each regression test creates a [`RegParams`], records numbered checks
//! with `compare_values` / `compare_pix` / `compare_strings`, and asserts
//! on [`RegParams::cleanup`] at the end so every failing check is reported,
//! not only the first.
//!
//! Test images are generated by [`synth`], so no binary fixtures are
//! needed.
//!
//! # Usage
//!
//! ```ignore
//! use pixlab_test::{RegParams, synth};
//!
//! let mut rp = RegParams::new("negative");
//! let pix = synth::gradient_bgr(32, 16).unwrap();
//! rp.compare_pix(&pix, &pix.invert().invert());
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;
pub mod synth;

pub use error::{TestError, TestResult};
pub use params::RegParams;
