//! CPU-side RGBA surface and the slice-shift glitch.
//!
//! The buffer is independent of any rendering context: the web frontend
//! copies canvas pixels in, the transforms here run on plain bytes, and
//! the result is written back.

use crate::constants::*;
use rand::Rng;

pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Fresh transparent buffer.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height * 4],
        }
    }

    /// Wrap pixels copied out of a canvas; refuses length mismatches.
    pub fn from_rgba(width: usize, height: usize, data: Vec<u8>) -> Option<Self> {
        (data.len() == width * height * 4).then(|| Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Write one pixel; out-of-range coordinates are ignored.
    #[inline]
    pub fn put(&mut self, x: usize, y: usize, rgb: [u8; 3], alpha: u8) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = (y * self.width + x) * 4;
        self.data[i..i + 3].copy_from_slice(&rgb);
        self.data[i + 3] = alpha;
    }
}

/// Horizontal wraparound shift of a few randomly placed slices
/// (datamoshing). Each affected row is a pure rotation of its pixels.
pub fn apply_glitch(buf: &mut PixelBuffer, rng: &mut impl Rng) {
    let (w, h) = (buf.width, buf.height);
    if w == 0 || h == 0 {
        return;
    }
    let slices = GLITCH_MIN_SLICES + rng.gen_range(0..GLITCH_SLICE_SPAN);
    for _ in 0..slices {
        let slice_y = rng.gen_range(0..h);
        let slice_h =
            (GLITCH_SLICE_MIN_HEIGHT + rng.gen_range(0..GLITCH_SLICE_HEIGHT_SPAN)) as usize;
        let shift = rng.gen_range(-GLITCH_MAX_SHIFT..GLITCH_MAX_SHIFT);
        let offset = shift.rem_euclid(w as i32) as usize * 4;
        for y in slice_y..(slice_y + slice_h).min(h) {
            let row = y * w * 4;
            buf.data[row..row + w * 4].rotate_right(offset);
        }
    }
}
