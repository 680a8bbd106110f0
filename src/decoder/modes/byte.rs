//! Byte mode decoder (Mode 0100)

use super::BitReader;
use crate::error::DecodeError;

/// Byte mode segment decoder
pub struct ByteDecoder;

impl ByteDecoder {
    /// Copy `count` bytes into `out`
    pub fn decode(
        reader: &mut BitReader<'_>,
        count: usize,
        out: &mut Vec<u8>,
    ) -> Result<(), DecodeError> {
        if reader.remaining() < count * 8 {
            return Err(DecodeError::DataUnderflow);
        }
        for _ in 0..count {
            out.push(reader.read_bits(8)? as u8);
        }
        Ok(())
    }
}
