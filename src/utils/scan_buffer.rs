//! Reusable grayscale scan buffer owned by a decoding context
//!
//! The buffer keeps its capacity across resizes so a context reused for
//! same-sized frames allocates once.

use crate::error::{Error, Result};

/// Grayscale pixel storage sized to exactly width * height
#[derive(Debug, Default)]
pub struct ScanBuffer {
    pixels: Vec<u8>,
    width: usize,
    height: usize,
}

impl ScanBuffer {
    /// Empty buffer with no allocation
    pub fn new() -> Self {
        Self::default()
    }

    /// Resize to `width` x `height`, refusing more than `max_pixels`.
    ///
    /// Growth goes through `try_reserve_exact`, so an allocator refusal is
    /// reported as [`Error::Allocation`] instead of aborting the process.
    /// On failure the buffer is left empty with zero dimensions.
    pub fn resize(&mut self, width: usize, height: usize, max_pixels: usize) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let len = width
            .checked_mul(height)
            .ok_or(Error::InvalidDimensions { width, height })?;

        if len > max_pixels {
            self.release();
            return Err(Error::allocation("scan buffer", len));
        }

        if len > self.pixels.capacity() {
            self.pixels.clear();
            if self.pixels.try_reserve_exact(len).is_err() {
                self.release();
                return Err(Error::allocation("scan buffer", len));
            }
        }

        self.pixels.clear();
        self.pixels.resize(len, 0);
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Drop the allocation and reset dimensions
    pub fn release(&mut self) {
        self.pixels = Vec::new();
        self.width = 0;
        self.height = 0;
    }

    /// Current width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Current height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Bytes currently reserved
    pub fn capacity(&self) -> usize {
        self.pixels.capacity()
    }

    /// Pixels, row-major
    pub fn as_slice(&self) -> &[u8] {
        &self.pixels
    }

    /// Writable pixels, exactly width * height bytes
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.pixels
    }
}
