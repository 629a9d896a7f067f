//! Global contrast enhancement of color or gray input

use crate::{ColorResult, pix_convert_to_gray};
use pixlab_core::Pix;
use pixlab_filter::equalize_hist;

/// Stretch contrast by histogram equalization.
///
/// The input is converted to grayscale and equalized, so the darkest
/// populated intensity maps to 0 and the brightest to 255. A constant
/// image maps to all zeros.
///
/// # Example
///
/// ```
/// use pixlab_core::Pix;
/// use pixlab_color::linear_contrast;
///
/// let pix = Pix::from_raw(2, 1, 3, vec![60, 60, 60, 90, 90, 90]).unwrap();
/// assert_eq!(linear_contrast(&pix).unwrap().data(), &[0, 255]);
/// ```
pub fn linear_contrast(pix: &Pix) -> ColorResult<Pix> {
    let gray = pix_convert_to_gray(pix)?;
    Ok(equalize_hist(&gray)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorError;
    use pixlab_core::Channels;

    #[test]
    fn test_linear_contrast_output_is_gray() {
        let pix = Pix::new(3, 2, Channels::Bgr).unwrap();
        let out = linear_contrast(&pix).unwrap();
        assert_eq!(out.channels(), Channels::Gray);
        assert!(out.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_linear_contrast_rejects_alpha() {
        let pix = Pix::new(1, 1, Channels::Bgra).unwrap();
        assert!(matches!(
            linear_contrast(&pix),
            Err(ColorError::InvalidChannelCount(4))
        ));
    }
}
