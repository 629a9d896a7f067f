//! Pixel access functions
//!
//! Bounds-checked getters and setters for individual samples and pixels.

use super::{Pix, PixMut};
use crate::error::{Error, Result};

impl Pix {
    /// Get one sample at (x, y) in channel `c`.
    ///
    /// Returns `None` if any coordinate is out of bounds.
    pub fn sample(&self, x: u32, y: u32, c: u32) -> Option<u8> {
        self.pixel(x, y)?.get(c as usize).copied()
    }

    /// Get all samples of the pixel at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let n = self.channels().count() as usize;
        let start = (y as usize * self.width() as usize + x as usize) * n;
        Some(&self.data()[start..start + n])
    }
}

impl PixMut {
    fn offset(&self, x: u32, y: u32) -> Result<usize> {
        let (w, h) = (self.width(), self.height());
        if x >= w {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: w as usize,
            });
        }
        if y >= h {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: h as usize,
            });
        }
        Ok((y as usize * w as usize + x as usize) * self.channels().count() as usize)
    }

    /// Get one sample at (x, y) in channel `c`.
    pub fn sample(&self, x: u32, y: u32, c: u32) -> Option<u8> {
        if c >= self.channels().count() {
            return None;
        }
        let start = self.offset(x, y).ok()?;
        Some(self.data()[start + c as usize])
    }

    /// Set one sample at (x, y) in channel `c`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates or channel are out of bounds.
    pub fn set_sample(&mut self, x: u32, y: u32, c: u32, val: u8) -> Result<()> {
        let n = self.channels().count();
        if c >= n {
            return Err(Error::IndexOutOfBounds {
                index: c as usize,
                len: n as usize,
            });
        }
        let start = self.offset(x, y)?;
        self.data_mut()[start + c as usize] = val;
        Ok(())
    }

    /// Set every sample of the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] for bad coordinates and
    /// [`Error::InvalidChannelCount`] if `vals` does not hold one value per channel.
    pub fn set_pixel(&mut self, x: u32, y: u32, vals: &[u8]) -> Result<()> {
        let n = self.channels().count();
        if vals.len() != n as usize {
            return Err(Error::InvalidChannelCount(vals.len() as u32));
        }
        let start = self.offset(x, y)?;
        self.data_mut()[start..start + vals.len()].copy_from_slice(vals);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Channels, Pix};

    #[test]
    fn test_set_and_get_sample() {
        let mut pm = Pix::new(4, 3, Channels::Bgr).unwrap().to_mut();
        pm.set_sample(3, 2, 2, 200).unwrap();
        assert_eq!(pm.sample(3, 2, 2), Some(200));

        let pix: Pix = pm.into();
        assert_eq!(pix.sample(3, 2, 2), Some(200));
        assert_eq!(pix.sample(3, 2, 0), Some(0));
        assert_eq!(pix.sample(4, 2, 0), None);
        assert_eq!(pix.sample(0, 0, 3), None);
    }

    #[test]
    fn test_set_pixel() {
        let mut pm = Pix::new(2, 2, Channels::Bgr).unwrap().to_mut();
        pm.set_pixel(1, 0, &[10, 20, 30]).unwrap();
        assert!(pm.set_pixel(1, 0, &[10, 20]).is_err());
        assert!(pm.set_pixel(2, 0, &[1, 2, 3]).is_err());

        let pix: Pix = pm.into();
        assert_eq!(pix.pixel(1, 0), Some(&[10u8, 20, 30][..]));
    }
}
