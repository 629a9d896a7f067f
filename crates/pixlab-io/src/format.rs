//! Image format detection
//!
//! Detects image formats by examining magic numbers in the file header,
//! and decides which upload file names are accepted.

use crate::{IoError, IoResult};

/// Image file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// BMP format
    Bmp,
    /// JFIF JPEG format
    Jpeg,
    /// PNG format
    Png,
    /// TIFF format
    Tiff,
    /// GIF format
    Gif,
}

impl ImageFormat {
    /// Get the canonical file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Bmp => "bmp",
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Tiff => "tif",
            Self::Gif => "gif",
        }
    }
}

/// Leading bytes of each recognized format, checked in order.
const SIGNATURES: &[(&[u8], ImageFormat)] = &[
    (b"\x89PNG\r\n\x1a\n", ImageFormat::Png),
    (b"\xff\xd8\xff", ImageFormat::Jpeg),
    (b"GIF87a", ImageFormat::Gif),
    (b"GIF89a", ImageFormat::Gif),
    (b"II*\x00", ImageFormat::Tiff),
    (b"MM\x00*", ImageFormat::Tiff),
    (b"BM", ImageFormat::Bmp),
];

/// File extensions accepted for upload, lower case.
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "tif", "bmp", "pcx"];

/// Check whether a file name carries an accepted image extension.
///
/// The extension is the text after the last `.`, compared
/// case-insensitively. Names without a `.` are rejected.
///
/// # Example
///
/// ```
/// use pixlab_io::is_supported_extension;
///
/// assert!(is_supported_extension("scan.JPG"));
/// assert!(!is_supported_extension("notes.txt"));
/// assert!(!is_supported_extension("png"));
/// ```
pub fn is_supported_extension(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((_, ext)) => ALLOWED_EXTENSIONS
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ext)),
        None => false,
    }
}

/// Identify an image format from its leading bytes.
///
/// # Errors
///
/// [`IoError::InvalidData`] for inputs shorter than two bytes and
/// [`IoError::UnsupportedFormat`] when no signature matches.
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 2 {
        return Err(IoError::InvalidData(format!(
            "{} byte(s) is too short to identify an image",
            data.len()
        )));
    }
    SIGNATURES
        .iter()
        .find(|(sig, _)| data.starts_with(sig))
        .map(|&(_, format)| format)
        .ok_or_else(|| IoError::UnsupportedFormat("unrecognized image signature".to_string()))
}
