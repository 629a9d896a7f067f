//! Separable convolution
//!
//! Rows are filtered first, then columns, each channel independently.
//! Samples outside the image are taken by reflecting about the edge pixel
//! without repeating it (`dcb|abcd|cba`).

use crate::{FilterError, FilterResult, Kernel};
use pixlab_core::Pix;

/// Map a possibly out-of-range coordinate into `0..n` by reflection.
///
/// The edge sample is not duplicated: for `n = 4`, `-1 -> 1`, `-2 -> 2`,
/// `4 -> 2`, `5 -> 1`. A one-sample axis always maps to 0.
///
/// # Panics
///
/// Panics if `n == 0`.
#[inline]
pub fn reflect_101(i: isize, n: usize) -> usize {
    assert!(n > 0, "reflect_101 on empty axis");
    if n == 1 {
        return 0;
    }
    let n = n as isize;
    let mut i = i;
    loop {
        if i < 0 {
            i = -i;
        } else if i >= n {
            i = 2 * (n - 1) - i;
        } else {
            return i as usize;
        }
    }
}

/// Convolve every channel of `pix` with `kernel` along both axes.
///
/// Results are rounded to the nearest integer.
///
/// # Errors
///
/// Returns [`FilterError::InvalidKernel`] if the kernel is empty.
pub fn convolve_separable(pix: &Pix, kernel: &Kernel) -> FilterResult<Pix> {
    if kernel.is_empty() {
        return Err(FilterError::InvalidKernel("empty kernel".into()));
    }
    let w = pix.width() as usize;
    let h = pix.height() as usize;
    let nc = pix.channels().count() as usize;
    let weights = kernel.data();
    let half = kernel.half() as isize;
    let src = pix.data();

    // Horizontal pass
    let mut tmp = vec![0f32; src.len()];
    for y in 0..h {
        let row = &src[y * w * nc..(y + 1) * w * nc];
        for x in 0..w {
            for c in 0..nc {
                let mut acc = 0f32;
                for (k, &wt) in weights.iter().enumerate() {
                    let sx = reflect_101(x as isize + k as isize - half, w);
                    acc += wt * row[sx * nc + c] as f32;
                }
                tmp[(y * w + x) * nc + c] = acc;
            }
        }
    }

    // Vertical pass
    let mut out = pix.create_template();
    let dst = out.data_mut();
    for y in 0..h {
        for x in 0..w {
            for c in 0..nc {
                let mut acc = 0f32;
                for (k, &wt) in weights.iter().enumerate() {
                    let sy = reflect_101(y as isize + k as isize - half, h);
                    acc += wt * tmp[(sy * w + x) * nc + c];
                }
                dst[(y * w + x) * nc + c] = acc.round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    Ok(out.into())
}

/// Gaussian blur with an odd square window of side `size`.
///
/// A non-positive `sigma` selects [`Kernel::sigma_for_size`].
pub fn gaussian_blur(pix: &Pix, size: u32, sigma: f32) -> FilterResult<Pix> {
    let kernel = Kernel::gaussian(size, sigma)?;
    convolve_separable(pix, &kernel)
}

/// Box (mean) blur with an odd square window of side `size`.
pub fn box_blur(pix: &Pix, size: u32) -> FilterResult<Pix> {
    if size % 2 == 0 {
        return Err(FilterError::InvalidParameters(format!(
            "box size must be odd, got {size}"
        )));
    }
    let kernel = Kernel::box_kernel(size)?;
    convolve_separable(pix, &kernel)
}
