//! pixlab-io - Image I/O for pixlab
//!
//! Loading turns stored image bytes into a [`Pix`]; encoding turns a
//! [`Pix`] into PNG bytes or a `data:` URL ready to embed in a page.
//!
//! # Supported formats
//!
//! | Format | Read | Write | Feature |
//! |--------|------|-------|---------|
//! | PNG    | yes  | yes   | `png-format` |
//! | JPEG   | yes  | no    | `jpeg` |
//! | GIF    | yes  | no    | `gif-format` |
//!
//! BMP and TIFF are recognized by [`detect_format_from_bytes`] but not
//! decoded.

mod dataurl;
mod error;
pub mod format;
#[cfg(feature = "gif-format")]
pub mod gif;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ALLOWED_EXTENSIONS, ImageFormat, detect_format_from_bytes, is_supported_extension};

#[cfg(feature = "png-format")]
pub use dataurl::encode_data_url;
pub use dataurl::{DATA_URL_PNG_PREFIX, encode_base64};

use pixlab_core::{BLUE, Channels, GREEN, Pix, RED};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

/// Exchange samples 0 and 2 of every pixel (RGB <-> BGR).
#[cfg(any(feature = "png-format", feature = "jpeg", feature = "gif-format"))]
pub(crate) fn swap_red_blue(data: &mut [u8], channels: usize) {
    for px in data.chunks_exact_mut(channels) {
        px.swap(0, 2);
    }
}

/// Decode image bytes keeping the file's own channel layout.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for unrecognized or
/// feature-disabled formats and [`IoError::DecodeError`] for corrupt data.
pub fn decode_image_mem(data: &[u8]) -> IoResult<Pix> {
    let format = detect_format_from_bytes(data)?;
    debug!(?format, bytes = data.len(), "decoding image");
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(Cursor::new(data)),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(Cursor::new(data)),
        #[cfg(feature = "gif-format")]
        ImageFormat::Gif => gif::read_gif(Cursor::new(data)),
        other => Err(IoError::UnsupportedFormat(format!(
            "{} decoding not available",
            other.extension()
        ))),
    }
}

/// Decode image bytes into a 3-channel BGR image.
///
/// Gray inputs are replicated into all three channels and alpha is
/// dropped, so every loaded image has the same layout.
pub fn read_image_mem(data: &[u8]) -> IoResult<Pix> {
    let pix = decode_image_mem(data)?;
    to_bgr(&pix)
}

/// Read an image file into a 3-channel BGR image.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be read, otherwise the same
/// errors as [`read_image_mem`].
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading image");
    let data = fs::read(path)?;
    read_image_mem(&data)
}

/// Convert any channel layout to 3-channel BGR.
///
/// BGR input is returned as a shared clone.
pub fn to_bgr(pix: &Pix) -> IoResult<Pix> {
    let n = pix.channels().count() as usize;
    let expand = |px: &[u8]| -> [u8; 3] {
        match pix.channels() {
            Channels::Gray | Channels::GrayAlpha => [px[0]; 3],
            Channels::Bgr | Channels::Bgra => [px[BLUE], px[GREEN], px[RED]],
        }
    };
    if pix.channels() == Channels::Bgr {
        return Ok(pix.clone());
    }
    let mut out = Pix::new(pix.width(), pix.height(), Channels::Bgr)?.to_mut();
    for (dst, src) in out
        .data_mut()
        .chunks_exact_mut(3)
        .zip(pix.data().chunks_exact(n))
    {
        dst.copy_from_slice(&expand(src));
    }
    Ok(out.into())
}

/// Encode an image as PNG bytes.
#[cfg(feature = "png-format")]
pub fn write_png_mem(pix: &Pix) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    png::write_png(pix, &mut buffer)?;
    debug!(
        width = pix.width(),
        height = pix.height(),
        bytes = buffer.len(),
        "encoded PNG"
    );
    Ok(buffer)
}

/// Write an image to a PNG file.
#[cfg(feature = "png-format")]
pub fn write_image<P: AsRef<Path>>(pix: &Pix, path: P) -> IoResult<()> {
    let bytes = write_png_mem(pix)?;
    fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(any(feature = "png-format", feature = "jpeg", feature = "gif-format"))]
    #[test]
    fn test_swap_red_blue() {
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8];
        swap_red_blue(&mut data, 4);
        assert_eq!(data, [3, 2, 1, 4, 7, 6, 5, 8]);
    }

    #[test]
    fn test_to_bgr_from_gray() {
        let pix = Pix::from_raw(2, 1, 1, vec![7, 9]).unwrap();
        let bgr = to_bgr(&pix).unwrap();
        assert_eq!(bgr.channels(), Channels::Bgr);
        assert_eq!(bgr.data(), &[7, 7, 7, 9, 9, 9]);
    }

    #[test]
    fn test_to_bgr_drops_alpha() {
        let pix = Pix::from_raw(1, 1, 4, vec![1, 2, 3, 128]).unwrap();
        assert_eq!(to_bgr(&pix).unwrap().data(), &[1, 2, 3]);
        let pix = Pix::from_raw(1, 1, 2, vec![5, 0]).unwrap();
        assert_eq!(to_bgr(&pix).unwrap().data(), &[5, 5, 5]);
    }

    #[test]
    fn test_to_bgr_shares_bgr() {
        let pix = Pix::new(3, 3, Channels::Bgr).unwrap();
        assert!(to_bgr(&pix).unwrap().ptr_eq(&pix));
    }

    #[test]
    fn test_unknown_bytes_rejected() {
        assert!(matches!(
            read_image_mem(b"hello world"),
            Err(IoError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            read_image_mem(b"BM\x00\x00\x00\x00"),
            Err(IoError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            read_image("/nonexistent/pixlab/missing.png"),
            Err(IoError::Io(_))
        ));
    }
}
