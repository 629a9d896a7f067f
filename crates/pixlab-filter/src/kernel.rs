//! Convolution kernels
//!
//! Kernels here are one-dimensional and separable: the same weights are
//! applied along rows and then along columns, which is equivalent to the
//! outer-product 2D kernel.

use crate::{FilterError, FilterResult};

/// A normalized 1D separable convolution kernel of odd length.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Weights, center at `data.len() / 2`
    data: Vec<f32>,
}

impl Kernel {
    /// Create a kernel from explicit weights.
    ///
    /// Weights are normalized to sum to 1.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if the length is even, zero,
    /// or the weights do not have a positive finite sum.
    pub fn from_slice(data: &[f32]) -> FilterResult<Self> {
        if data.is_empty() || data.len() % 2 == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "kernel length must be odd, got {}",
                data.len()
            )));
        }
        let sum: f32 = data.iter().sum();
        if !sum.is_finite() || sum <= 0.0 {
            return Err(FilterError::InvalidKernel(format!(
                "kernel weights must have a positive sum, got {sum}"
            )));
        }
        Ok(Self {
            data: data.iter().map(|w| w / sum).collect(),
        })
    }

    /// Create a box (averaging) kernel.
    ///
    /// All values are `1/size`.
    pub fn box_kernel(size: u32) -> FilterResult<Self> {
        Self::from_slice(&vec![1.0; size as usize])
    }

    /// Create a Gaussian kernel of odd `size`.
    ///
    /// A non-positive `sigma` is replaced by [`Kernel::sigma_for_size`].
    ///
    /// # Example
    ///
    /// ```
    /// use pixlab_filter::Kernel;
    ///
    /// let k = Kernel::gaussian(11, 0.0).unwrap();
    /// assert_eq!(k.len(), 11);
    /// assert!((k.data().iter().sum::<f32>() - 1.0).abs() < 1e-6);
    /// ```
    pub fn gaussian(size: u32, sigma: f32) -> FilterResult<Self> {
        if size == 0 || size % 2 == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "gaussian size must be odd, got {size}"
            )));
        }
        let sigma = if sigma > 0.0 {
            sigma
        } else {
            Self::sigma_for_size(size)
        };
        let half = (size / 2) as i32;
        let denom = 2.0 * sigma * sigma;
        let weights: Vec<f32> = (-half..=half)
            .map(|i| (-((i * i) as f32) / denom).exp())
            .collect();
        Self::from_slice(&weights)
    }

    /// Standard deviation used for a Gaussian of the given size when none
    /// is specified: `0.3 * ((size - 1) * 0.5 - 1) + 0.8`.
    ///
    /// Gives 2.0 for size 11.
    pub fn sigma_for_size(size: u32) -> f32 {
        0.3 * ((size as f32 - 1.0) * 0.5 - 1.0) + 0.8
    }

    /// Number of taps.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false; kernels have at least one tap.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Distance from the center tap to either end.
    #[inline]
    pub fn half(&self) -> usize {
        self.data.len() / 2
    }

    /// The normalized weights.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sigma_for_size() {
        assert!((Kernel::sigma_for_size(11) - 2.0).abs() < 1e-6);
        assert!((Kernel::sigma_for_size(3) - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_gaussian_symmetric_and_peaked() {
        let k = Kernel::gaussian(11, 2.0).unwrap();
        let d = k.data();
        assert_eq!(k.half(), 5);
        for i in 0..5 {
            assert!((d[i] - d[10 - i]).abs() < 1e-7);
            assert!(d[i] < d[i + 1]);
        }
        assert!((d.iter().sum::<f32>() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_box_kernel() {
        let k = Kernel::box_kernel(5).unwrap();
        assert!(k.data().iter().all(|&w| (w - 0.2).abs() < 1e-7));
    }

    #[test]
    fn test_even_size_rejected() {
        assert!(Kernel::gaussian(4, 1.0).is_err());
        assert!(Kernel::box_kernel(0).is_err());
        assert!(Kernel::from_slice(&[0.0, 0.0, 0.0]).is_err());
    }
}
