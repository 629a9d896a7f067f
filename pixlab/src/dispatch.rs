//! Operation selection
//!
//! An operation is named by a short identifier. Identifiers outside the
//! known set select [`Operation::Original`], which passes the input
//! through unchanged; selection never fails.

use std::fmt;

use crate::{PixlabError, PixlabResult};
use pixlab_color::{AdaptiveThresholdOptions, adaptive_threshold, linear_contrast, threshold_otsu};
use pixlab_core::Pix;
use tracing::{debug, warn};

/// A transform that can be applied to an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Otsu binarization, dark class white
    GlobalThreshold,
    /// Local Gaussian-weighted mean binarization
    AdaptiveThreshold,
    /// `255 - v` per sample
    Negative,
    /// Grayscale histogram equalization
    LinearContrast,
    /// Saturating multiply by [`TransformOptions::multiply_factor`]
    MultiplyByConstant,
    /// Square every sample and renormalize to 0..=255
    PowerOf2,
    /// Pass-through
    Original,
}

impl Operation {
    /// Every transform, in menu order. [`Operation::Original`] is not listed.
    pub const ALL: [Operation; 6] = [
        Operation::GlobalThreshold,
        Operation::AdaptiveThreshold,
        Operation::Negative,
        Operation::LinearContrast,
        Operation::MultiplyByConstant,
        Operation::PowerOf2,
    ];

    /// Map an identifier to an operation.
    ///
    /// Absent, empty and unknown identifiers all give
    /// [`Operation::Original`].
    ///
    /// ```
    /// use pixlab::Operation;
    ///
    /// assert_eq!(Operation::from_id(Some("negative")), Operation::Negative);
    /// assert_eq!(Operation::from_id(Some("sharpen")), Operation::Original);
    /// assert_eq!(Operation::from_id(None), Operation::Original);
    /// ```
    pub fn from_id(id: Option<&str>) -> Self {
        match id {
            Some("global_threshold") => Operation::GlobalThreshold,
            Some("adaptive_threshold") => Operation::AdaptiveThreshold,
            Some("negative") => Operation::Negative,
            Some("linear_contrast") => Operation::LinearContrast,
            Some("multiply_by_constant") => Operation::MultiplyByConstant,
            Some("power_of_2") => Operation::PowerOf2,
            Some(other) if !other.is_empty() => {
                warn!(id = other, "unknown operation, passing image through");
                Operation::Original
            }
            _ => Operation::Original,
        }
    }

    /// The identifier accepted by [`Operation::from_id`].
    pub fn id(self) -> &'static str {
        match self {
            Operation::GlobalThreshold => "global_threshold",
            Operation::AdaptiveThreshold => "adaptive_threshold",
            Operation::Negative => "negative",
            Operation::LinearContrast => "linear_contrast",
            Operation::MultiplyByConstant => "multiply_by_constant",
            Operation::PowerOf2 => "power_of_2",
            Operation::Original => "original",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Parameters of the configurable transforms
#[derive(Debug, Clone, PartialEq)]
pub struct TransformOptions {
    /// Factor for [`Operation::MultiplyByConstant`] (finite, `>= 0`)
    pub multiply_factor: f32,
    /// Neighborhood for [`Operation::AdaptiveThreshold`]
    pub adaptive: AdaptiveThresholdOptions,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            multiply_factor: 2.0,
            adaptive: AdaptiveThresholdOptions::default(),
        }
    }
}

impl TransformOptions {
    /// Check every parameter.
    pub fn validate(&self) -> PixlabResult<()> {
        if !self.multiply_factor.is_finite() || self.multiply_factor < 0.0 {
            return Err(PixlabError::InvalidParameters(format!(
                "multiply_factor must be finite and >= 0, got {}",
                self.multiply_factor
            )));
        }
        self.adaptive.validate()?;
        Ok(())
    }
}

/// Apply `op` to `pix`, returning a new image.
///
/// Threshold and contrast operations return a 1-channel image; the
/// arithmetic operations keep the input layout. [`Operation::Original`]
/// returns a shared clone of `pix`.
///
/// # Errors
///
/// Fails only for invalid options or a channel layout the operation
/// cannot convert to grayscale.
pub fn apply(pix: &Pix, op: Operation, options: &TransformOptions) -> PixlabResult<Pix> {
    debug!(
        op = %op,
        width = pix.width(),
        height = pix.height(),
        channels = pix.channels().count(),
        "applying operation"
    );
    let out = match op {
        Operation::GlobalThreshold => threshold_otsu(pix)?,
        Operation::AdaptiveThreshold => adaptive_threshold(pix, &options.adaptive)?,
        Operation::Negative => pix.invert(),
        Operation::LinearContrast => linear_contrast(pix)?,
        Operation::MultiplyByConstant => pix.multiply_constant(options.multiply_factor)?,
        Operation::PowerOf2 => pix.power_of_2(),
        Operation::Original => pix.clone(),
    };
    Ok(out)
}

/// Apply the operation named by `id`; see [`Operation::from_id`].
pub fn apply_id(pix: &Pix, id: Option<&str>, options: &TransformOptions) -> PixlabResult<Pix> {
    apply(pix, Operation::from_id(id), options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixlab_core::Channels;

    #[test]
    fn test_id_roundtrip() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_id(Some(op.id())), op);
            assert_eq!(op.to_string(), op.id());
        }
    }

    #[test]
    fn test_fallback_ids() {
        for id in [None, Some(""), Some("Negative"), Some("blur"), Some("original")] {
            assert_eq!(Operation::from_id(id), Operation::Original);
        }
    }

    #[test]
    fn test_original_shares_buffer() {
        let pix = Pix::new(4, 4, Channels::Bgr).unwrap();
        let out = apply_id(&pix, Some("no_such_op"), &TransformOptions::default()).unwrap();
        assert!(out.ptr_eq(&pix));
    }

    #[test]
    fn test_output_layouts() {
        let pix = Pix::from_raw(2, 2, 3, (0..12).map(|i| i * 20).collect()).unwrap();
        let opts = TransformOptions::default();
        for op in Operation::ALL {
            let out = apply(&pix, op, &opts).unwrap();
            let expected = match op {
                Operation::Negative | Operation::MultiplyByConstant | Operation::PowerOf2 => {
                    Channels::Bgr
                }
                _ => Channels::Gray,
            };
            assert_eq!(out.channels(), expected, "{op}");
            assert_eq!((out.width(), out.height()), (2, 2));
        }
    }

    #[test]
    fn test_options_validation() {
        assert!(TransformOptions::default().validate().is_ok());
        let opts = TransformOptions {
            multiply_factor: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            opts.validate(),
            Err(PixlabError::InvalidParameters(_))
        ));
        let mut opts = TransformOptions::default();
        opts.adaptive.block_size = 8;
        assert!(matches!(opts.validate(), Err(PixlabError::Color(_))));
    }

    #[test]
    fn test_bad_factor_fails_apply() {
        let pix = Pix::new(1, 1, Channels::Gray).unwrap();
        let opts = TransformOptions {
            multiply_factor: f32::NAN,
            ..Default::default()
        };
        assert!(apply(&pix, Operation::MultiplyByConstant, &opts).is_err());
    }
}
