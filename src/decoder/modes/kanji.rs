//! Kanji mode decoder (Mode 1000)
//! Each character is 13 bits, expanded back to a two-byte Shift-JIS code

use super::BitReader;
use crate::error::DecodeError;

/// Kanji mode segment decoder
pub struct KanjiDecoder;

impl KanjiDecoder {
    /// Decode `count` characters, appending Shift-JIS byte pairs to `out`
    pub fn decode(
        reader: &mut BitReader<'_>,
        count: usize,
        out: &mut Vec<u8>,
    ) -> Result<(), DecodeError> {
        for _ in 0..count {
            let packed = reader.read_bits(13)?;
            let mut sjis = ((packed / 0xC0) << 8) | (packed % 0xC0);
            sjis += if sjis < 0x1F00 { 0x8140 } else { 0xC140 };
            out.push((sjis >> 8) as u8);
            out.push(sjis as u8);
        }
        Ok(())
    }
}
