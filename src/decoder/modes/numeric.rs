//! Numeric mode decoder (Mode 0001)
//! Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits

use super::BitReader;
use crate::error::DecodeError;

/// Numeric mode segment decoder
pub struct NumericDecoder;

impl NumericDecoder {
    /// Decode `count` digits, appending ASCII digits to `out`.
    /// Out-of-range groups keep their low decimal digits.
    pub fn decode(
        reader: &mut BitReader<'_>,
        count: usize,
        out: &mut Vec<u8>,
    ) -> Result<(), DecodeError> {
        let mut remaining = count;
        while remaining > 0 {
            let digits = remaining.min(3);
            let bits = match digits {
                3 => 10,
                2 => 7,
                _ => 4,
            };
            let mut value = reader.read_bits(bits)?;
            let start = out.len();
            out.resize(start + digits, b'0');
            for slot in out[start..].iter_mut().rev() {
                *slot = b'0' + (value % 10) as u8;
                value /= 10;
            }
            remaining -= digits;
        }
        Ok(())
    }
}
