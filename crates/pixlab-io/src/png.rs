//! PNG image format support
//!
//! Decoding normalizes every PNG flavor (palette, low bit depth, 16-bit)
//! to 8-bit samples. Color samples are reordered from the file's RGB(A)
//! to the in-memory BGR(A) on read, and back on write.

use crate::{IoError, IoResult, swap_red_blue};
use pixlab_core::{Channels, Pix};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};
use tracing::trace;

/// Read a PNG image
///
/// Returns a `Pix` with the channel layout of the file: gray, gray+alpha,
/// BGR or BGRA.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    if output_info.bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unexpected PNG output depth: {:?}",
            output_info.bit_depth
        )));
    }

    let channels = match output_info.color_type {
        ColorType::Grayscale => Channels::Gray,
        ColorType::GrayscaleAlpha => Channels::GrayAlpha,
        ColorType::Rgb => Channels::Bgr,
        ColorType::Rgba => Channels::Bgra,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG output color type: {:?}",
                other
            )));
        }
    };

    let width = output_info.width;
    let height = output_info.height;
    let bytes_per_row = output_info.line_size;
    let packed = width as usize * channels.count() as usize;
    trace!(width, height, ?channels, "decoded PNG frame");

    let mut data = Vec::with_capacity(packed * height as usize);
    for y in 0..height as usize {
        let row_start = y * bytes_per_row;
        data.extend_from_slice(&buf[row_start..row_start + packed]);
    }
    if matches!(channels, Channels::Bgr | Channels::Bgra) {
        swap_red_blue(&mut data, channels.count() as usize);
    }

    Ok(Pix::from_raw(width, height, channels.count(), data)?)
}

/// Write a PNG image
///
/// All four channel layouts are written losslessly at 8 bits per sample.
pub fn write_png<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    let channels = pix.channels();
    let color_type = match channels {
        Channels::Gray => ColorType::Grayscale,
        Channels::GrayAlpha => ColorType::GrayscaleAlpha,
        Channels::Bgr => ColorType::Rgb,
        Channels::Bgra => ColorType::Rgba,
    };

    let mut encoder = Encoder::new(writer, pix.width(), pix.height());
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let mut data = pix.data().to_vec();
    if matches!(channels, Channels::Bgr | Channels::Bgra) {
        swap_red_blue(&mut data, channels.count() as usize);
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
