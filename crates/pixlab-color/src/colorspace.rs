//! Color space conversion
//!
//! Derives a single-channel intensity image from a BGR image using the
//! ITU-R BT.601 luma weights.

use crate::{ColorError, ColorResult};
use pixlab_core::{BLUE, Channels, GREEN, Pix, RED};

const WEIGHT_R: f32 = 0.299;
const WEIGHT_G: f32 = 0.587;
const WEIGHT_B: f32 = 0.114;

/// Convert one BGR pixel to gray.
///
/// Formula: gray = round(0.299*R + 0.587*G + 0.114*B)
#[inline]
pub fn bgr_to_gray(b: u8, g: u8, r: u8) -> u8 {
    let val = WEIGHT_B * b as f32 + WEIGHT_G * g as f32 + WEIGHT_R * r as f32;
    val.round().clamp(0.0, 255.0) as u8
}

/// Convert an image to 1-channel grayscale.
///
/// A 1-channel input is returned as-is (a shared clone, same samples).
///
/// # Errors
///
/// Returns [`ColorError::InvalidChannelCount`] for any layout other than
/// gray or BGR.
///
/// # Example
///
/// ```
/// use pixlab_core::Pix;
/// use pixlab_color::pix_convert_to_gray;
///
/// // One pure-red pixel (B, G, R order)
/// let pix = Pix::from_raw(1, 1, 3, vec![0, 0, 255]).unwrap();
/// let gray = pix_convert_to_gray(&pix).unwrap();
/// assert_eq!(gray.data(), &[76]);
/// ```
pub fn pix_convert_to_gray(pix: &Pix) -> ColorResult<Pix> {
    match pix.channels() {
        Channels::Gray => Ok(pix.clone()),
        Channels::Bgr => {
            let mut out = Pix::new(pix.width(), pix.height(), Channels::Gray)?.to_mut();
            for (dst, px) in out.data_mut().iter_mut().zip(pix.data().chunks_exact(3)) {
                *dst = bgr_to_gray(px[BLUE], px[GREEN], px[RED]);
            }
            Ok(out.into())
        }
        other => Err(ColorError::InvalidChannelCount(other.count())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bgr_to_gray_primaries() {
        assert_eq!(bgr_to_gray(0, 0, 0), 0);
        assert_eq!(bgr_to_gray(255, 255, 255), 255);
        assert_eq!(bgr_to_gray(0, 0, 255), 76); // 76.245
        assert_eq!(bgr_to_gray(0, 255, 0), 150); // 149.685
        assert_eq!(bgr_to_gray(255, 0, 0), 29); // 29.07
    }

    #[test]
    fn test_neutral_gray_preserved() {
        for v in [0u8, 1, 50, 127, 128, 200, 254, 255] {
            assert_eq!(bgr_to_gray(v, v, v), v);
        }
    }

    #[test]
    fn test_gray_input_is_noop() {
        let pix = Pix::from_raw(2, 2, 1, vec![1, 2, 3, 4]).unwrap();
        let gray = pix_convert_to_gray(&pix).unwrap();
        assert_eq!(gray.data(), pix.data());
    }

    #[test]
    fn test_rejects_alpha_layouts() {
        let pix = Pix::new(2, 2, Channels::Bgra).unwrap();
        assert!(matches!(
            pix_convert_to_gray(&pix),
            Err(ColorError::InvalidChannelCount(4))
        ));
        let pix = Pix::new(2, 2, Channels::GrayAlpha).unwrap();
        assert!(matches!(
            pix_convert_to_gray(&pix),
            Err(ColorError::InvalidChannelCount(2))
        ));
    }
}
