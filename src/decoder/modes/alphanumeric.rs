//! Alphanumeric mode decoder (Mode 0010)
//! Pairs of characters = 11 bits, a trailing single character = 6 bits

use super::BitReader;
use crate::error::DecodeError;

const ALPHANUMERIC_CHARS: &[u8; 45] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

/// Alphanumeric mode segment decoder
pub struct AlphanumericDecoder;

impl AlphanumericDecoder {
    /// Decode `count` characters, appending ASCII to `out`
    pub fn decode(
        reader: &mut BitReader<'_>,
        count: usize,
        out: &mut Vec<u8>,
    ) -> Result<(), DecodeError> {
        let mut remaining = count;
        while remaining >= 2 {
            let value = reader.read_bits(11)? as usize;
            out.push(ALPHANUMERIC_CHARS[(value / 45) % 45]);
            out.push(ALPHANUMERIC_CHARS[value % 45]);
            remaining -= 2;
        }
        if remaining == 1 {
            let value = reader.read_bits(6)? as usize;
            out.push(ALPHANUMERIC_CHARS[value % 45]);
        }
        Ok(())
    }
}
