//! The 8-bit pixel buffer
//!
//! The `Pix` structure is the pixel buffer every transform consumes and
//! produces. It holds 8-bit samples for one to four interleaved channels.
//!
//! # Pixel layout
//!
//! - Samples are stored as bytes, row-major, channel-interleaved
//! - Rows are tightly packed (no padding)
//! - For 3-channel images the order is B, G, R; for 4-channel, B, G, R, A
//!
//! # Ownership model
//!
//! `Pix` uses `Arc` for efficient cloning (shared ownership) and is never
//! modified once built. To produce a new image, start from a [`PixMut`]
//! (via [`Pix::new`] + [`Pix::try_into_mut`], or [`Pix::to_mut`]) and
//! freeze it with `Into<Pix>`.

mod access;
pub mod arith;
mod histogram;

pub use histogram::Histogram;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Channel layout of a pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Channels {
    /// Single intensity channel
    Gray = 1,
    /// Intensity plus alpha
    GrayAlpha = 2,
    /// Blue, green, red
    Bgr = 3,
    /// Blue, green, red, alpha
    Bgra = 4,
}

impl Channels {
    /// Create `Channels` from a raw sample count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChannelCount`] if `count` is not 1 to 4.
    pub fn from_count(count: u32) -> Result<Self> {
        match count {
            1 => Ok(Channels::Gray),
            2 => Ok(Channels::GrayAlpha),
            3 => Ok(Channels::Bgr),
            4 => Ok(Channels::Bgra),
            _ => Err(Error::InvalidChannelCount(count)),
        }
    }

    /// Number of interleaved samples per pixel.
    #[inline]
    pub fn count(self) -> u32 {
        self as u32
    }
}

/// Sample index of blue in a `Bgr`/`Bgra` pixel.
pub const BLUE: usize = 0;
/// Sample index of green in a `Bgr`/`Bgra` pixel.
pub const GREEN: usize = 1;
/// Sample index of red in a `Bgr`/`Bgra` pixel.
pub const RED: usize = 2;

/// Shared sample storage
#[derive(Debug)]
struct PixData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Channel layout
    channels: Channels,
    /// The image samples
    data: Vec<u8>,
}

/// Immutable 8-bit image, cheap to clone
///
/// `Pix` uses reference counting via `Arc`, so `clone()` shares the
/// samples instead of copying them.
///
/// # Examples
///
/// ```
/// use pixlab_core::{Channels, Pix};
///
/// // A blank 3-channel image
/// let pix = Pix::new(32, 24, Channels::Bgr).unwrap();
/// assert_eq!(pix.width(), 32);
/// assert_eq!(pix.height(), 24);
/// assert_eq!(pix.data().len(), 32 * 24 * 3);
/// ```
#[derive(Debug, Clone)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Create a zero-filled image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, channels: Channels) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = Self::compute_len(width, height, channels)?;
        Ok(Pix {
            inner: Arc::new(PixData {
                width,
                height,
                channels,
                data: vec![0u8; len],
            }),
        })
    }

    /// Wrap an existing sample vector.
    ///
    /// # Arguments
    ///
    /// * `width` - Width in pixels (must be > 0)
    /// * `height` - Height in pixels (must be > 0)
    /// * `channels` - Samples per pixel, 1 to 4
    /// * `data` - Row-major, channel-interleaved samples
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`], [`Error::InvalidChannelCount`]
    /// or [`Error::DataLengthMismatch`] when the geometry is inconsistent.
    pub fn from_raw(width: u32, height: u32, channels: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let channels = Channels::from_count(channels)?;
        let expected = Self::compute_len(width, height, channels)?;
        if data.len() != expected {
            return Err(Error::DataLengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Pix {
            inner: Arc::new(PixData {
                width,
                height,
                channels,
                data,
            }),
        })
    }

    fn compute_len(width: u32, height: u32, channels: Channels) -> Result<usize> {
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(channels.count() as usize))
            .ok_or(Error::InvalidDimension { width, height })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the channel layout.
    #[inline]
    pub fn channels(&self) -> Channels {
        self.inner.channels
    }

    /// Get raw access to the image samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// How many `Pix` handles share this buffer.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Whether `self` and `other` share the same sample storage.
    pub fn ptr_eq(&self, other: &Pix) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Get the samples of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.stride();
        let start = y as usize * stride;
        &self.inner.data[start..start + stride]
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.inner.width as usize * self.inner.channels.count() as usize
    }

    /// True when both images have the same width, height and channel layout.
    pub fn sizes_equal(&self, other: &Pix) -> bool {
        self.width() == other.width()
            && self.height() == other.height()
            && self.channels() == other.channels()
    }

    /// A zero-filled writable image with the geometry of this one.
    pub fn create_template(&self) -> PixMut {
        PixMut {
            inner: PixData {
                width: self.width(),
                height: self.height(),
                channels: self.channels(),
                data: vec![0u8; self.inner.data.len()],
            },
        }
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<PixMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(inner) => Ok(PixMut { inner }),
            Err(inner) => Err(Pix { inner }),
        }
    }

    /// Copy the samples into a new writable image.
    ///
    /// Always copies; the original is left untouched.
    pub fn to_mut(&self) -> PixMut {
        PixMut {
            inner: PixData {
                width: self.inner.width,
                height: self.inner.height,
                channels: self.inner.channels,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Writable image, frozen into a [`Pix`] with `into()`
///
/// Owns its samples exclusively.
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the channel layout.
    #[inline]
    pub fn channels(&self) -> Channels {
        self.inner.channels
    }

    /// Get raw access to the image samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get mutable access to the image samples.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }
}

impl From<PixMut> for Pix {
    fn from(pix_mut: PixMut) -> Self {
        Pix {
            inner: Arc::new(pix_mut.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pix_creation() {
        let pix = Pix::new(100, 200, Channels::Bgr).unwrap();
        assert_eq!(pix.width(), 100);
        assert_eq!(pix.height(), 200);
        assert_eq!(pix.channels(), Channels::Bgr);
        assert_eq!(pix.data().len(), 100 * 200 * 3);
        assert!(pix.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            Pix::new(0, 100, Channels::Gray),
            Err(Error::InvalidDimension { .. })
        ));
        assert!(Pix::new(100, 0, Channels::Gray).is_err());
    }

    #[test]
    fn test_from_raw_validates_length() {
        assert!(Pix::from_raw(2, 2, 3, vec![0; 12]).is_ok());
        assert!(matches!(
            Pix::from_raw(2, 2, 3, vec![0; 11]),
            Err(Error::DataLengthMismatch {
                expected: 12,
                actual: 11
            })
        ));
        assert!(matches!(
            Pix::from_raw(2, 2, 5, vec![0; 20]),
            Err(Error::InvalidChannelCount(5))
        ));
    }

    #[test]
    fn test_pix_clone_shares_data() {
        let pix1 = Pix::new(10, 10, Channels::Gray).unwrap();
        let pix2 = pix1.clone();
        assert_eq!(pix1.ref_count(), 2);
        assert!(pix1.ptr_eq(&pix2));
    }

    #[test]
    fn test_to_mut_copies() {
        let pix = Pix::from_raw(2, 1, 1, vec![1, 2]).unwrap();
        let mut pm = pix.to_mut();
        pm.data_mut()[0] = 9;
        let edited: Pix = pm.into();
        assert_eq!(pix.data(), &[1, 2]);
        assert_eq!(edited.data(), &[9, 2]);
    }

    #[test]
    fn test_try_into_mut() {
        let pix = Pix::new(10, 10, Channels::Gray).unwrap();
        assert!(pix.try_into_mut().is_ok());

        let pix = Pix::new(10, 10, Channels::Gray).unwrap();
        let _other = pix.clone();
        assert!(pix.try_into_mut().is_err());
    }

    #[test]
    fn test_row_access() {
        let pix = Pix::from_raw(2, 2, 3, (0..12).collect()).unwrap();
        assert_eq!(pix.stride(), 6);
        assert_eq!(pix.row(1), &[6, 7, 8, 9, 10, 11]);
    }
}
