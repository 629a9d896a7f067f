//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate. 8-bit grayscale,
//! 24-bit color and CMYK are supported; color and CMYK are returned in
//! BGR order.
//!
//! JPEG *writing* is not provided: the transforms only ever emit PNG.

use crate::{IoError, IoResult, swap_red_blue};
use jpeg_decoder::{Decoder, PixelFormat};
use pixlab_core::Pix;
use std::io::Read;
use tracing::trace;

/// Read a JPEG image from a reader.
///
/// # Arguments
/// * `reader` - A reader positioned at the JPEG SOI marker (`FF D8`)
///
/// # Returns
/// A 1-channel (grayscale) or 3-channel (BGR) `Pix`.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    let mut data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing".to_string()))?;

    let channels = match info.pixel_format {
        PixelFormat::L8 => 1,
        PixelFormat::RGB24 => {
            swap_red_blue(&mut data, 3);
            3
        }
        PixelFormat::CMYK32 => {
            data = cmyk_to_bgr(&data);
            3
        }
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported JPEG pixel format: {:?}",
                other
            )));
        }
    };
    trace!(width = info.width, height = info.height, channels, "decoded JPEG");

    Ok(Pix::from_raw(
        info.width as u32,
        info.height as u32,
        channels,
        data,
    )?)
}

/// Convert decoded CMYK samples to BGR.
///
/// Each channel is `(255 - ink) * (255 - k) / 255`, rounded.
fn cmyk_to_bgr(cmyk: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(cmyk.len() / 4 * 3);
    for px in cmyk.chunks_exact(4) {
        let white = 255 - px[3] as u32;
        let ink = |v: u8| (((255 - v as u32) * white + 127) / 255) as u8;
        out.extend_from_slice(&[ink(px[2]), ink(px[1]), ink(px[0])]);
    }
    out
}
