//! GIF image format support
//!
//! Reads the first frame of a GIF image as BGRA on the full logical
//! screen. Pixels the frame does not cover take the background color of
//! the global palette, or transparent black when there is none. Later
//! frames of an animation are ignored.

use crate::{IoError, IoResult, swap_red_blue};
use gif::{ColorOutput, DecodeOptions};
use pixlab_core::Pix;
use std::io::Read;
use tracing::trace;

/// Read a GIF image
pub fn read_gif<R: Read>(reader: R) -> IoResult<Pix> {
    let mut options = DecodeOptions::new();
    options.set_color_output(ColorOutput::RGBA);

    let mut decoder = options
        .read_info(reader)
        .map_err(|e| IoError::DecodeError(format!("GIF decode error: {}", e)))?;

    let width = decoder.width() as usize;
    let height = decoder.height() as usize;
    let background = match (decoder.global_palette(), decoder.bg_color()) {
        (Some(palette), Some(i)) => palette
            .get(i * 3..i * 3 + 3)
            .map_or([0; 4], |rgb| [rgb[0], rgb[1], rgb[2], 255]),
        _ => [0; 4],
    };
    let mut canvas: Vec<u8> = background
        .iter()
        .copied()
        .cycle()
        .take(width * height * 4)
        .collect();

    let frame = decoder
        .read_next_frame()
        .map_err(|e| IoError::DecodeError(format!("GIF frame error: {}", e)))?
        .ok_or_else(|| IoError::InvalidData("no frames in GIF".to_string()))?;

    // Clip the frame rectangle to the screen
    let (left, top) = (frame.left as usize, frame.top as usize);
    let fw = frame.width as usize;
    let visible_w = width.saturating_sub(left).min(fw);
    let visible_h = height.saturating_sub(top).min(frame.height as usize);
    for y in 0..visible_h {
        let src = &frame.buffer[y * fw * 4..(y * fw + visible_w) * 4];
        let start = ((top + y) * width + left) * 4;
        canvas[start..start + visible_w * 4].copy_from_slice(src);
    }
    trace!(
        width,
        height,
        frame_left = left,
        frame_top = top,
        frame_width = fw,
        frame_height = frame.height,
        "decoded GIF frame"
    );

    swap_red_blue(&mut canvas, 4);
    Ok(Pix::from_raw(width as u32, height as u32, 4, canvas)?)
}
