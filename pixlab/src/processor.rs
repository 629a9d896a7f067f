//! Before/after rendering of one loaded image

use std::path::Path;

use crate::{Operation, PixlabResult, TransformOptions, apply};
use pixlab_core::Pix;
use pixlab_io::{IoError, encode_data_url, is_supported_extension, read_image, read_image_mem};
use tracing::debug;

/// The original and transformed image, each as a PNG `data:` URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedPair {
    pub original: String,
    pub processed: String,
    /// The operation actually applied, after fallback
    pub operation: Operation,
}

/// Holds a decoded image and renders transforms of it for display.
///
/// The original is decoded once; every [`process`](Self::process) call
/// works from the same shared buffer.
#[derive(Debug, Clone)]
pub struct ImageProcessor {
    original: Pix,
    options: TransformOptions,
}

impl ImageProcessor {
    /// Wrap an already decoded image.
    pub fn new(original: Pix, options: TransformOptions) -> PixlabResult<Self> {
        options.validate()?;
        Ok(Self { original, options })
    }

    /// Decode image bytes as 3-channel BGR.
    pub fn from_bytes(data: &[u8], options: TransformOptions) -> PixlabResult<Self> {
        Self::new(read_image_mem(data)?, options)
    }

    /// Load an image file as 3-channel BGR.
    ///
    /// # Errors
    ///
    /// Files whose extension is not one of
    /// [`ALLOWED_EXTENSIONS`](pixlab_io::ALLOWED_EXTENSIONS) are rejected
    /// with [`IoError::UnsupportedFormat`] before being read.
    pub fn open<P: AsRef<Path>>(path: P, options: TransformOptions) -> PixlabResult<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        if !is_supported_extension(&name) {
            return Err(IoError::UnsupportedFormat(format!(
                "file extension not allowed: {}",
                path.display()
            ))
            .into());
        }
        Self::new(read_image(path)?, options)
    }

    pub fn original(&self) -> &Pix {
        &self.original
    }

    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    /// Apply `op` to the original image.
    pub fn apply(&self, op: Operation) -> PixlabResult<Pix> {
        apply(&self.original, op, &self.options)
    }

    /// The original image as a PNG `data:` URL.
    pub fn original_data_url(&self) -> PixlabResult<String> {
        Ok(encode_data_url(&self.original)?)
    }

    /// Render the original next to the result of the operation named `id`.
    ///
    /// An unknown or absent `id` renders the original on both sides.
    pub fn process(&self, id: Option<&str>) -> PixlabResult<ProcessedPair> {
        let operation = Operation::from_id(id);
        let result = self.apply(operation)?;
        self.pair_with(operation, &result)
    }

    /// Encode the original next to an already computed `result` of
    /// `operation`.
    pub fn pair_with(&self, operation: Operation, result: &Pix) -> PixlabResult<ProcessedPair> {
        let original = self.original_data_url()?;
        let processed = encode_data_url(result)?;
        debug!(
            op = %operation,
            original_len = original.len(),
            processed_len = processed.len(),
            "processed image pair"
        );
        Ok(ProcessedPair {
            original,
            processed,
            operation,
        })
    }
}
