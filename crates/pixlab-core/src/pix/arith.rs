//! Image arithmetic operations
//!
//! Per-sample transforms applied to every channel independently:
//!
//! - Negation (`invert`)
//! - Saturating multiplication (`multiply_constant`)
//! - Squaring with joint min/max normalization (`power_of_2`)
//!
//! None of these convert to grayscale; the channel layout of the input is
//! carried over to the output unchanged.

use super::{Pix, PixMut};
use crate::error::{Error, Result};

impl Pix {
    /// Negate every sample: `255 - v`.
    ///
    /// Applying it twice reproduces the original exactly.
    ///
    /// # Example
    ///
    /// ```
    /// use pixlab_core::Pix;
    ///
    /// let pix = Pix::from_raw(2, 1, 1, vec![0, 200]).unwrap();
    /// assert_eq!(pix.invert().data(), &[255, 55]);
    /// ```
    pub fn invert(&self) -> Pix {
        self.map_samples(|v| 255 - v)
    }

    /// Multiply all samples by a constant factor.
    ///
    /// Each sample becomes `min(255, round(v * factor))`; there is no
    /// wraparound.
    ///
    /// # Arguments
    ///
    /// * `factor` - Multiplication factor (must be finite and >= 0.0)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if factor is negative or not finite.
    ///
    /// # Example
    ///
    /// ```
    /// use pixlab_core::Pix;
    ///
    /// let pix = Pix::from_raw(1, 1, 1, vec![10]).unwrap();
    /// assert_eq!(pix.multiply_constant(3.0).unwrap().data(), &[30]);
    /// assert_eq!(pix.multiply_constant(100.0).unwrap().data(), &[255]);
    /// ```
    pub fn multiply_constant(&self, factor: f32) -> Result<Pix> {
        if !factor.is_finite() || factor < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "factor must be finite and >= 0.0, got {factor}"
            )));
        }
        let mut lut = [0u8; 256];
        for (i, entry) in lut.iter_mut().enumerate() {
            *entry = (i as f32 * factor).round().min(255.0) as u8;
        }
        Ok(self.map_samples(|v| lut[v as usize]))
    }

    /// Square every sample and stretch the result to the full 8-bit range.
    ///
    /// Samples are squared in floating point, then linearly normalized with
    /// one min/max shared by every channel and pixel, so the darkest squared
    /// sample becomes 0 and the brightest 255. A flat image (all samples
    /// equal) yields all zeros.
    pub fn power_of_2(&self) -> Pix {
        let (min, max) = self
            .data()
            .iter()
            .fold((u8::MAX, u8::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        if min == max {
            return self.create_template().into();
        }

        let lo = (min as f32) * (min as f32);
        let span = (max as f32) * (max as f32) - lo;
        let mut lut = [0u8; 256];
        for (i, entry) in lut.iter_mut().enumerate() {
            let sq = (i as f32) * (i as f32);
            *entry = ((sq - lo) * 255.0 / span).round().clamp(0.0, 255.0) as u8;
        }
        self.map_samples(|v| lut[v as usize])
    }

    /// Build a new image by mapping every sample through `f`.
    pub fn map_samples<F>(&self, f: F) -> Pix
    where
        F: Fn(u8) -> u8,
    {
        let mut out = self.create_template();
        out.map_from(self.data(), f);
        out.into()
    }
}

impl PixMut {
    fn map_from<F>(&mut self, src: &[u8], f: F)
    where
        F: Fn(u8) -> u8,
    {
        for (d, &s) in self.data_mut().iter_mut().zip(src) {
            *d = f(s);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Channels, Pix};

    fn ramp(w: u32, h: u32, channels: Channels) -> Pix {
        let n = w as usize * h as usize * channels.count() as usize;
        let data = (0..n).map(|i| (i * 37 % 256) as u8).collect();
        Pix::from_raw(w, h, channels.count(), data).unwrap()
    }

    #[test]
    fn test_invert_values() {
        let pix = Pix::from_raw(
            2,
            2,
            3,
            vec![0, 0, 0, 50, 50, 50, 200, 200, 200, 255, 255, 255],
        )
        .unwrap();
        let neg = pix.invert();
        assert_eq!(
            neg.data(),
            &[255, 255, 255, 205, 205, 205, 55, 55, 55, 0, 0, 0]
        );
        assert_eq!(neg.channels(), Channels::Bgr);
    }

    #[test]
    fn test_invert_is_involution() {
        let pix = ramp(7, 5, Channels::Bgr);
        assert_eq!(pix.invert().invert().data(), pix.data());
    }

    #[test]
    fn test_invert_leaves_input_untouched() {
        let pix = ramp(4, 4, Channels::Gray);
        let before = pix.data().to_vec();
        let _ = pix.invert();
        assert_eq!(pix.data(), before.as_slice());
    }

    #[test]
    fn test_multiply_saturates() {
        let pix = Pix::from_raw(4, 1, 1, vec![0, 100, 127, 128]).unwrap();
        let doubled = pix.multiply_constant(2.0).unwrap();
        assert_eq!(doubled.data(), &[0, 200, 254, 255]);
    }

    #[test]
    fn test_multiply_rounds() {
        let pix = Pix::from_raw(3, 1, 1, vec![1, 3, 5]).unwrap();
        let half = pix.multiply_constant(0.5).unwrap();
        // 0.5 -> 1, 1.5 -> 2, 2.5 -> 3 (round half away from zero)
        assert_eq!(half.data(), &[1, 2, 3]);
    }

    #[test]
    fn test_multiply_matches_formula_for_all_values() {
        let data: Vec<u8> = (0..=255).collect();
        let pix = Pix::from_raw(256, 1, 1, data).unwrap();
        for k in [0.0f32, 0.3, 1.0, 1.7, 2.0, 3.0] {
            let out = pix.multiply_constant(k).unwrap();
            for (v, &o) in out.data().iter().enumerate() {
                let expected = (v as f32 * k).round().min(255.0) as u8;
                assert_eq!(o, expected, "v={v} k={k}");
            }
        }
    }

    #[test]
    fn test_multiply_rejects_bad_factor() {
        let pix = ramp(2, 2, Channels::Gray);
        assert!(pix.multiply_constant(-1.0).is_err());
        assert!(pix.multiply_constant(f32::NAN).is_err());
        assert!(pix.multiply_constant(f32::INFINITY).is_err());
    }

    #[test]
    fn test_power_of_2_spans_full_range() {
        let pix = Pix::from_raw(3, 1, 3, vec![10, 20, 30, 40, 50, 60, 70, 80, 90]).unwrap();
        let out = pix.power_of_2();
        assert_eq!(out.data().iter().min(), Some(&0));
        assert_eq!(out.data().iter().max(), Some(&255));
        // (40^2 - 10^2) * 255 / (90^2 - 10^2) = 1500 * 255 / 8000 = 47.8
        assert_eq!(out.sample(1, 0, 0), Some(48));
    }

    #[test]
    fn test_power_of_2_flat_is_zero() {
        let pix = Pix::from_raw(4, 4, 1, vec![128; 16]).unwrap();
        let out = pix.power_of_2();
        assert!(out.data().iter().all(|&v| v == 0));
        assert_eq!(out.width(), 4);
    }
}
