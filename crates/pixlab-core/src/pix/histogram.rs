//! Histogram generation for Pix images
//!
//! Intensity distributions shared by threshold selection and
//! histogram equalization.

use super::{Channels, Pix};
use crate::error::{Error, Result};

/// 256-bin intensity histogram of a single-channel image.
///
/// `total()` always equals the pixel count of the source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u32; 256],
    total: u64,
}

impl Histogram {
    /// Build a histogram from raw counts.
    pub fn from_counts(counts: [u32; 256]) -> Self {
        let total = counts.iter().map(|&c| c as u64).sum();
        Self { counts, total }
    }

    /// Count every sample of a 1-channel image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChannelCount`] unless the image is [`Channels::Gray`].
    pub fn from_gray(pix: &Pix) -> Result<Self> {
        if pix.channels() != Channels::Gray {
            return Err(Error::InvalidChannelCount(pix.channels().count()));
        }
        let mut counts = [0u32; 256];
        for &v in pix.data() {
            counts[v as usize] += 1;
        }
        Ok(Self {
            counts,
            total: pix.data().len() as u64,
        })
    }

    /// All 256 bin counts.
    #[inline]
    pub fn counts(&self) -> &[u32; 256] {
        &self.counts
    }

    /// Count for intensity `i`.
    #[inline]
    pub fn count(&self, i: u8) -> u32 {
        self.counts[i as usize]
    }

    /// Sum of all bins.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Cumulative distribution: entry `i` is the number of samples `<= i`.
    pub fn cumulative(&self) -> [u64; 256] {
        let mut cdf = [0u64; 256];
        let mut acc = 0u64;
        for (dst, &c) in cdf.iter_mut().zip(self.counts.iter()) {
            acc += c as u64;
            *dst = acc;
        }
        cdf
    }

    /// Lowest populated intensity, or `None` for an empty histogram.
    pub fn first_nonzero(&self) -> Option<u8> {
        self.counts.iter().position(|&c| c > 0).map(|i| i as u8)
    }

    /// Highest populated intensity, or `None` for an empty histogram.
    pub fn last_nonzero(&self) -> Option<u8> {
        self.counts.iter().rposition(|&c| c > 0).map(|i| i as u8)
    }

    /// Mean intensity, or `None` for an empty histogram.
    pub fn mean(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        let sum: f64 = self
            .counts
            .iter()
            .enumerate()
            .map(|(i, &c)| i as f64 * c as f64)
            .sum();
        Some(sum / self.total as f64)
    }
}

impl Pix {
    /// Get the intensity histogram of a 1-channel image.
    ///
    /// # Example
    ///
    /// ```
    /// use pixlab_core::{Channels, Pix};
    ///
    /// let pix = Pix::new(100, 100, Channels::Gray).unwrap();
    /// let hist = pix.gray_histogram().unwrap();
    /// assert_eq!(hist.count(0), 10000);
    /// ```
    pub fn gray_histogram(&self) -> Result<Histogram> {
        Histogram::from_gray(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_histogram_counts() {
        let pix = Pix::from_raw(3, 2, 1, vec![0, 0, 5, 5, 5, 255]).unwrap();
        let hist = pix.gray_histogram().unwrap();
        assert_eq!(hist.count(0), 2);
        assert_eq!(hist.count(5), 3);
        assert_eq!(hist.count(255), 1);
        assert_eq!(hist.total(), 6);
        assert_eq!(hist.first_nonzero(), Some(0));
        assert_eq!(hist.last_nonzero(), Some(255));
    }

    #[test]
    fn test_histogram_rejects_color() {
        let pix = Pix::new(2, 2, Channels::Bgr).unwrap();
        assert!(matches!(
            pix.gray_histogram(),
            Err(Error::InvalidChannelCount(3))
        ));
    }

    #[test]
    fn test_cumulative() {
        let pix = Pix::from_raw(4, 1, 1, vec![1, 1, 3, 200]).unwrap();
        let cdf = pix.gray_histogram().unwrap().cumulative();
        assert_eq!(cdf[0], 0);
        assert_eq!(cdf[1], 2);
        assert_eq!(cdf[2], 2);
        assert_eq!(cdf[3], 3);
        assert_eq!(cdf[199], 3);
        assert_eq!(cdf[255], 4);
    }

    #[test]
    fn test_mean() {
        let hist = Pix::from_raw(2, 1, 1, vec![10, 30])
            .unwrap()
            .gray_histogram()
            .unwrap();
        assert_eq!(hist.mean(), Some(20.0));
        assert_eq!(Histogram::from_counts([0; 256]).mean(), None);
    }
}
