//! pixlab-filter - Image filtering operations
//!
//! This crate provides the neighborhood and tone operations the transforms
//! build on:
//!
//! - Separable convolution kernels (Gaussian, box)
//! - Blur with reflected image borders
//! - Histogram equalization

pub mod convolve;
pub mod enhance;
mod error;
pub mod kernel;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

pub use convolve::{box_blur, convolve_separable, gaussian_blur, reflect_101};
pub use enhance::{TrcLut, equalize_hist, equalize_lut, trc_map};
