//! Image enhancement operations
//!
//! Tone reproduction curve (TRC) mapping and histogram equalization.

use crate::{FilterError, FilterResult};
use pixlab_core::{Channels, Histogram, Pix};

/// A 256-entry lookup table for tone reproduction curve mapping.
///
/// Maps input sample values [0..255] to output sample values [0..255].
pub type TrcLut = [u8; 256];

/// Generate a histogram equalization lookup table.
///
/// Intensity `i` maps to
/// `round((cdf(i) - cdf_min) / (total - cdf_min) * 255)`, clamped to
/// [0, 255], where `cdf_min` is the smallest nonzero cumulative count.
/// Intensities below the first populated bin therefore map to 0 and the
/// last populated bin maps to 255.
///
/// A constant image (`total == cdf_min`) or an empty histogram yields an
/// all-zero table.
pub fn equalize_lut(hist: &Histogram) -> TrcLut {
    let mut lut = [0u8; 256];
    let Some(first) = hist.first_nonzero() else {
        return lut;
    };
    let total = hist.total();
    let cdf_min = hist.count(first) as u64;
    if total == cdf_min {
        return lut;
    }

    let scale = 255.0 / (total - cdf_min) as f64;
    let cdf = hist.cumulative();
    for (entry, &c) in lut.iter_mut().zip(cdf.iter()) {
        let val = (c as f64 - cdf_min as f64) * scale;
        *entry = val.round().clamp(0.0, 255.0) as u8;
    }
    lut
}

/// Remap every sample of `pix` through `lut`.
pub fn trc_map(pix: &Pix, lut: &TrcLut) -> Pix {
    pix.map_samples(|v| lut[v as usize])
}

/// Equalize the histogram of a 1-channel image.
///
/// # Errors
///
/// Returns [`FilterError::UnsupportedChannels`] unless `pix` is
/// single-channel.
///
/// # Example
///
/// ```
/// use pixlab_core::Pix;
/// use pixlab_filter::equalize_hist;
///
/// let pix = Pix::from_raw(4, 1, 1, vec![100, 101, 102, 103]).unwrap();
/// let eq = equalize_hist(&pix).unwrap();
/// assert_eq!(eq.data(), &[0, 85, 170, 255]);
/// ```
pub fn equalize_hist(pix: &Pix) -> FilterResult<Pix> {
    if pix.channels() != Channels::Gray {
        return Err(FilterError::UnsupportedChannels {
            expected: "1 channel",
            actual: pix.channels().count(),
        });
    }
    let hist = pix.gray_histogram()?;
    Ok(trc_map(pix, &equalize_lut(&hist)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equalize_two_levels() {
        let pix = Pix::from_raw(4, 1, 1, vec![50, 50, 60, 60]).unwrap();
        let eq = equalize_hist(&pix).unwrap();
        assert_eq!(eq.data(), &[0, 0, 255, 255]);
    }

    #[test]
    fn test_equalize_constant_maps_to_zero() {
        let pix = Pix::from_raw(3, 3, 1, vec![128; 9]).unwrap();
        let eq = equalize_hist(&pix).unwrap();
        assert!(eq.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_lut_is_monotonic() {
        let data: Vec<u8> = (0..64).map(|i| (i * i % 200) as u8).collect();
        let pix = Pix::from_raw(8, 8, 1, data).unwrap();
        let lut = equalize_lut(&pix.gray_histogram().unwrap());
        for i in 1..256 {
            assert!(lut[i] >= lut[i - 1]);
        }
    }

    #[test]
    fn test_equalize_rejects_color() {
        let pix = Pix::new(2, 2, Channels::Bgr).unwrap();
        assert!(matches!(
            equalize_hist(&pix),
            Err(FilterError::UnsupportedChannels { actual: 3, .. })
        ));
    }

    #[test]
    fn test_empty_histogram_lut() {
        let lut = equalize_lut(&Histogram::from_counts([0; 256]));
        assert!(lut.iter().all(|&v| v == 0));
    }
}
