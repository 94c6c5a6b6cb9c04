//! Source raster contract.
//!
//! The encoder does not load or decode images itself; a collaborator hands
//! it a raw RGB buffer. Everything downstream indexes into that buffer, so
//! the contract is checked once here, before the first packet is built.

use crate::color;
use crate::error::Error;

/// Bytes per pixel of the input contract: 8-bit RGB, no alpha.
pub const CHANNELS: usize = 3;

/// A validated top-down 8-bit RGB raster.
#[derive(Clone, Debug)]
pub struct Raster {
    width: u32,
    height: u32,
    rowstride: usize,
    pixels: Vec<u8>,
}

impl Raster {
    /// Wrap a raw pixel buffer, rejecting anything that violates the input
    /// contract: zero dimensions, a row stride shorter than a row, or a
    /// buffer too small to hold the last row.
    pub fn new(width: u32, height: u32, rowstride: usize, pixels: Vec<u8>) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::RasterContract(format!(
                "degenerate dimensions {}x{}",
                width, height
            )));
        }
        let row_bytes = width as usize * CHANNELS;
        if rowstride < row_bytes {
            return Err(Error::RasterContract(format!(
                "rowstride {} shorter than row of {} bytes",
                rowstride, row_bytes
            )));
        }
        let needed = (height as usize - 1) * rowstride + row_bytes;
        if pixels.len() < needed {
            return Err(Error::RasterContract(format!(
                "buffer holds {} bytes, geometry needs {}",
                pixels.len(),
                needed
            )));
        }
        Ok(Self {
            width,
            height,
            rowstride,
            pixels,
        })
    }

    /// Wrap a tightly packed RGB buffer (rowstride == width * 3).
    pub fn from_packed(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, Error> {
        Self::new(width, height, width as usize * CHANNELS, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Read one pixel. Callers guarantee `x < width` and `y < height`;
    /// the ray mapper's clamp upholds that.
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height);
        let offset = y as usize * self.rowstride + x as usize * CHANNELS;
        let p = &self.pixels[offset..offset + CHANNELS];
        (p[0], p[1], p[2])
    }

    /// Produce a tightly packed posterized copy of the raster for the
    /// diagnostic preview image. The copy never feeds the encoding path.
    pub fn posterized(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.width as usize * self.height as usize * CHANNELS);
        for y in 0..self.height {
            let row = y as usize * self.rowstride;
            for x in 0..self.width {
                let offset = row + x as usize * CHANNELS;
                for channel in &self.pixels[offset..offset + CHANNELS] {
                    out.push(color::posterize_channel(*channel));
                }
            }
        }
        out
    }
}
