//! Binary thresholding
//!
//! Provides two methods for converting an image to a 0/255 binary image:
//! - Otsu's method (one global threshold chosen from the histogram)
//! - Adaptive (local) thresholding against a weighted neighborhood mean
//!
//! Both accept gray or BGR input and convert to grayscale first.

use crate::{ColorError, ColorResult, pix_convert_to_gray};
use pixlab_core::{Histogram, Pix};
use pixlab_filter::{box_blur, gaussian_blur};
use tracing::debug;

/// Options for adaptive thresholding
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptiveThresholdOptions {
    /// Side of the square neighborhood (odd, >= 3)
    pub block_size: u32,
    /// Constant subtracted from the local mean
    pub c: f32,
    /// Weighting of the neighborhood
    pub method: AdaptiveMethod,
}

/// Method for adaptive threshold computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdaptiveMethod {
    /// Use mean of local window
    Mean,
    /// Use Gaussian-weighted mean
    Gaussian,
}

impl Default for AdaptiveThresholdOptions {
    fn default() -> Self {
        Self {
            block_size: 11,
            c: 2.0,
            method: AdaptiveMethod::Gaussian,
        }
    }
}

impl AdaptiveThresholdOptions {
    /// Check that the options describe a usable neighborhood.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidParameters`] if `block_size` is even or
    /// below 3, or `c` is not finite.
    pub fn validate(&self) -> ColorResult<()> {
        if self.block_size < 3 || self.block_size % 2 == 0 {
            return Err(ColorError::InvalidParameters(format!(
                "block_size must be odd and >= 3, got {}",
                self.block_size
            )));
        }
        if !self.c.is_finite() {
            return Err(ColorError::InvalidParameters(format!(
                "c must be finite, got {}",
                self.c
            )));
        }
        Ok(())
    }
}

/// Select Otsu's threshold from a histogram.
///
/// Every candidate `t` in 0..=255 splits the samples into `<= t` and
/// `> t`; the result maximizes the between-class variance
/// `wA * wB * (muA - muB)^2`. Ties go to the smallest `t`, so a histogram
/// with a single populated bin (all variances zero) returns 0.
pub fn otsu_threshold_from_histogram(hist: &Histogram) -> u8 {
    let total = hist.total() as f64;
    if total == 0.0 {
        return 0;
    }
    let sum_total: f64 = hist
        .counts()
        .iter()
        .enumerate()
        .map(|(i, &c)| i as f64 * c as f64)
        .sum();

    let mut count_a = 0f64;
    let mut sum_a = 0f64;
    let mut best_t = 0u8;
    let mut best_var = -1f64;

    for (t, &c) in hist.counts().iter().enumerate() {
        count_a += c as f64;
        sum_a += t as f64 * c as f64;
        let count_b = total - count_a;

        let var_between = if count_a == 0.0 || count_b == 0.0 {
            0.0
        } else {
            let w_a = count_a / total;
            let w_b = count_b / total;
            let mu_a = sum_a / count_a;
            let mu_b = (sum_total - sum_a) / count_b;
            w_a * w_b * (mu_a - mu_b) * (mu_a - mu_b)
        };

        if var_between > best_var {
            best_var = var_between;
            best_t = t as u8;
        }
    }

    best_t
}

/// Compute Otsu's threshold for an image.
///
/// The image is converted to grayscale first.
pub fn compute_otsu_threshold(pix: &Pix) -> ColorResult<u8> {
    let gray = pix_convert_to_gray(pix)?;
    let hist = gray.gray_histogram()?;
    let t = otsu_threshold_from_histogram(&hist);
    debug!(threshold = t, "otsu threshold selected");
    Ok(t)
}

/// Binarize with Otsu's threshold, foreground = dark class.
///
/// Output samples are 255 where the intensity is `<= t*` and 0 elsewhere,
/// the convention for dark objects on a light background.
///
/// # Example
///
/// ```
/// use pixlab_core::Pix;
/// use pixlab_color::threshold_otsu;
///
/// let pix = Pix::from_raw(4, 1, 1, vec![10, 10, 240, 240]).unwrap();
/// let bin = threshold_otsu(&pix).unwrap();
/// assert_eq!(bin.data(), &[255, 255, 0, 0]);
/// ```
pub fn threshold_otsu(pix: &Pix) -> ColorResult<Pix> {
    let gray = pix_convert_to_gray(pix)?;
    let t = otsu_threshold_from_histogram(&gray.gray_histogram()?);
    debug!(threshold = t, "otsu threshold selected");
    Ok(gray.map_samples(|v| if v <= t { 255 } else { 0 }))
}

/// Apply adaptive thresholding
///
/// Each pixel is compared with the weighted mean of the `block_size`
/// square around it (borders reflected), rounded to an integer:
/// the output is 255 where `intensity > mean - c` and 0 elsewhere.
///
/// # Errors
///
/// Returns [`ColorError::InvalidParameters`] for invalid options and
/// [`ColorError::InvalidChannelCount`] for layouts that have no grayscale
/// conversion.
pub fn adaptive_threshold(pix: &Pix, options: &AdaptiveThresholdOptions) -> ColorResult<Pix> {
    options.validate()?;
    let gray = pix_convert_to_gray(pix)?;
    let mean = match options.method {
        AdaptiveMethod::Gaussian => gaussian_blur(&gray, options.block_size, 0.0)?,
        AdaptiveMethod::Mean => box_blur(&gray, options.block_size)?,
    };

    let mut out = gray.create_template();
    for ((dst, &v), &m) in out
        .data_mut()
        .iter_mut()
        .zip(gray.data())
        .zip(mean.data())
    {
        *dst = if v as f32 > m as f32 - options.c {
            255
        } else {
            0
        };
    }
    Ok(out.into())
}
