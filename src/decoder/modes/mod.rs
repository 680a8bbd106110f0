//! QR code data mode decoders
//!
//! Each decoder reads one segment body from a [`BitReader`] and appends the
//! decoded bytes to the payload:
//! - Numeric: digits, three per 10 bits
//! - Alphanumeric: 45-character set, two per 11 bits
//! - Byte: raw 8-bit values
//! - Kanji: 13-bit values expanded to Shift-JIS byte pairs

use crate::error::DecodeError;

/// Alphanumeric segments
pub mod alphanumeric;
/// Byte segments
pub mod byte;
/// Kanji segments
pub mod kanji;
/// Numeric segments
pub mod numeric;

/// MSB-first bit reader over data codewords
pub struct BitReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BitReader<'a> {
    /// Reader positioned at the first bit of `data`
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bits left to read
    pub fn remaining(&self) -> usize {
        self.data.len() * 8 - self.pos
    }

    /// Read `n` (at most 32) bits, failing with `DataUnderflow` past the end
    pub fn read_bits(&mut self, n: usize) -> Result<u32, DecodeError> {
        if n > self.remaining() {
            return Err(DecodeError::DataUnderflow);
        }
        let mut value = 0u32;
        for _ in 0..n {
            let bit = (self.data[self.pos / 8] >> (7 - self.pos % 8)) & 1;
            value = (value << 1) | bit as u32;
            self.pos += 1;
        }
        Ok(value)
    }
}
