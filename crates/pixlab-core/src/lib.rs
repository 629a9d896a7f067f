//! pixlab Core - Basic data structures for image transforms
//!
//! This crate provides the fundamental data structures used throughout
//! pixlab:
//!
//! - [`Pix`] / [`PixMut`] - The 8-bit pixel buffer (immutable / mutable)
//! - [`Channels`] - Channel layout (gray, BGR, with or without alpha)
//! - [`Histogram`] - 256-bin intensity distribution
//!
//! Per-sample arithmetic (negation, saturating multiply, power-law remap)
//! lives on [`Pix`] in [`pix::arith`].

pub mod error;
pub mod pix;

pub use error::{Error, Result};
pub use pix::{BLUE, Channels, GREEN, Histogram, Pix, PixMut, RED};
