//! Synthetic test images
//!
//! Deterministic generators that stand in for photographic fixtures.

use crate::error::{TestError, TestResult};
use pixlab_core::Pix;

fn build(name: &'static str, w: u32, h: u32, channels: u32, data: Vec<u8>) -> TestResult<Pix> {
    Pix::from_raw(w, h, channels, data).map_err(|source| TestError::Synth { name, source })
}

/// Constant 1-channel image.
pub fn constant_gray(w: u32, h: u32, val: u8) -> TestResult<Pix> {
    build("constant_gray", w, h, 1, vec![val; w as usize * h as usize])
}

/// Constant 3-channel image with the same (b, g, r) everywhere.
pub fn constant_bgr(w: u32, h: u32, bgr: [u8; 3]) -> TestResult<Pix> {
    let data = bgr
        .iter()
        .copied()
        .cycle()
        .take(w as usize * h as usize * 3)
        .collect();
    build("constant_bgr", w, h, 3, data)
}

/// Horizontal 1-channel ramp from 0 at the left edge to 255 at the right.
pub fn ramp_gray(w: u32, h: u32) -> TestResult<Pix> {
    let denom = (w.max(2) - 1) as f32;
    let mut data = Vec::with_capacity(w as usize * h as usize);
    for _ in 0..h {
        for x in 0..w {
            data.push((x as f32 * 255.0 / denom).round() as u8);
        }
    }
    build("ramp_gray", w, h, 1, data)
}

/// 3-channel image whose blue varies with x, green with y and red with both.
pub fn gradient_bgr(w: u32, h: u32) -> TestResult<Pix> {
    let mut data = Vec::with_capacity(w as usize * h as usize * 3);
    for y in 0..h {
        for x in 0..w {
            let b = (x * 255 / w.max(1)) as u8;
            let g = (y * 255 / h.max(1)) as u8;
            let r = ((x + y) * 255 / (w + h).max(1)) as u8;
            data.extend_from_slice(&[b, g, r]);
        }
    }
    build("gradient_bgr", w, h, 3, data)
}

/// 1-channel image with only `lo` and `hi`: left `split` columns are `lo`.
pub fn two_level_gray(w: u32, h: u32, split: u32, lo: u8, hi: u8) -> TestResult<Pix> {
    let mut data = Vec::with_capacity(w as usize * h as usize);
    for _ in 0..h {
        for x in 0..w {
            data.push(if x < split { lo } else { hi });
        }
    }
    build("two_level_gray", w, h, 1, data)
}

/// 1-channel checkerboard with square cells of side `cell`.
pub fn checker_gray(w: u32, h: u32, cell: u32, lo: u8, hi: u8) -> TestResult<Pix> {
    let cell = cell.max(1);
    let mut data = Vec::with_capacity(w as usize * h as usize);
    for y in 0..h {
        for x in 0..w {
            let on = ((x / cell) + (y / cell)) % 2 == 1;
            data.push(if on { hi } else { lo });
        }
    }
    build("checker_gray", w, h, 1, data)
}

/// Dark one-pixel strokes every `pitch` columns over a background that
/// brightens from left to right, like unevenly lit text.
pub fn strokes_on_gradient(w: u32, h: u32, pitch: u32) -> TestResult<Pix> {
    let pitch = pitch.max(2);
    let mut data = Vec::with_capacity(w as usize * h as usize);
    for _ in 0..h {
        for x in 0..w {
            let background = 90 + (x * 140 / w.max(1)) as u8;
            let stroke = x % pitch == pitch / 2;
            data.push(if stroke {
                background.saturating_sub(60)
            } else {
                background
            });
        }
    }
    build("strokes_on_gradient", w, h, 1, data)
}

/// Build an image from explicit per-pixel triples, row-major.
pub fn from_triples(w: u32, h: u32, pixels: &[[u8; 3]]) -> TestResult<Pix> {
    let data = pixels.iter().flat_map(|p| p.iter().copied()).collect();
    build("from_triples", w, h, 3, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixlab_core::Channels;

    #[test]
    fn test_ramp_endpoints() {
        let pix = ramp_gray(16, 2).unwrap();
        assert_eq!(pix.sample(0, 0, 0), Some(0));
        assert_eq!(pix.sample(15, 1, 0), Some(255));
    }

    #[test]
    fn test_constant_bgr_layout() {
        let pix = constant_bgr(3, 2, [1, 2, 3]).unwrap();
        assert_eq!(pix.channels(), Channels::Bgr);
        assert_eq!(pix.pixel(2, 1), Some(&[1u8, 2, 3][..]));
    }

    #[test]
    fn test_from_triples_length_checked() {
        assert!(from_triples(2, 2, &[[0; 3]; 3]).is_err());
        assert!(from_triples(2, 2, &[[0; 3]; 4]).is_ok());
    }
}
