//! Format information extraction from a sampled module grid

use crate::error::DecodeError;
use crate::models::{BitMatrix, EcLevel, MaskPattern};

/// XOR mask applied to every stored format word
const FORMAT_MASK: u16 = 0x5412;
/// BCH(15,5) generator: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
const FORMAT_GENERATOR: u16 = 0x537;
/// BCH(15,5) corrects up to three bit errors
const MAX_FORMAT_ERRORS: u32 = 3;

const fn format_codeword(data: u16) -> u16 {
    let mut rem = data;
    let mut i = 0;
    while i < 10 {
        rem = (rem << 1) ^ ((rem >> 9) * FORMAT_GENERATOR);
        i += 1;
    }
    ((data << 10) | (rem & 0x3FF)) ^ FORMAT_MASK
}

const fn build_format_codewords() -> [u16; 32] {
    let mut words = [0u16; 32];
    let mut d = 0;
    while d < 32 {
        words[d] = format_codeword(d as u16);
        d += 1;
    }
    words
}

/// Every valid stored format word, indexed by its 5 data bits
static FORMAT_CODEWORDS: [u16; 32] = build_format_codewords();

/// Error correction level and mask carried by the format information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    /// Error correction level
    pub ec_level: EcLevel,
    /// Mask applied to the data modules
    pub mask_pattern: MaskPattern,
}

impl FormatInfo {
    /// Read and correct the format information, trying the copy around the
    /// top-left finder first and the split copy second.
    pub fn extract(grid: &BitMatrix) -> Result<Self, DecodeError> {
        [Self::read_primary(grid), Self::read_secondary(grid)]
            .into_iter()
            .find_map(Self::decode)
            .ok_or(DecodeError::FormatEcc)
    }

    /// Nearest valid format word within three bit errors
    pub fn decode(raw: u16) -> Option<Self> {
        let (data, distance) = FORMAT_CODEWORDS
            .iter()
            .enumerate()
            .map(|(data, &word)| (data as u8, (word ^ raw).count_ones()))
            .min_by_key(|&(_, distance)| distance)?;
        if distance > MAX_FORMAT_ERRORS {
            return None;
        }
        Some(Self {
            ec_level: EcLevel::from_format_bits(data >> 3),
            mask_pattern: MaskPattern::from_bits(data),
        })
    }

    /// Stored 15-bit word for this format
    pub fn codeword(&self) -> u16 {
        let data = (self.ec_level.format_bits() << 3) | self.mask_pattern.id();
        FORMAT_CODEWORDS[data as usize]
    }

    /// Bit i of the copy wrapped around the top-left finder
    pub fn primary_position(i: usize) -> (usize, usize) {
        match i {
            0..=5 => (8, i),
            6 => (8, 7),
            7 => (8, 8),
            8 => (7, 8),
            _ => (14 - i, 8),
        }
    }

    /// Bit i of the copy split between the top-right and bottom-left finders
    pub fn secondary_position(i: usize, size: usize) -> (usize, usize) {
        if i < 8 {
            (size - 1 - i, 8)
        } else {
            (8, size - 15 + i)
        }
    }

    fn read_primary(grid: &BitMatrix) -> u16 {
        (0..15).fold(0u16, |bits, i| {
            let (x, y) = Self::primary_position(i);
            bits | ((grid.get(x, y) as u16) << i)
        })
    }

    fn read_secondary(grid: &BitMatrix) -> u16 {
        let size = grid.width();
        (0..15).fold(0u16, |bits, i| {
            let (x, y) = Self::secondary_position(i, size);
            bits | ((grid.get(x, y) as u16) << i)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with_format(info: FormatInfo, size: usize) -> BitMatrix {
        let mut grid = BitMatrix::square(size);
        let word = info.codeword();
        for i in 0..15 {
            let bit = (word >> i) & 1 == 1;
            let (x, y) = FormatInfo::primary_position(i);
            grid.set(x, y, bit);
            let (x, y) = FormatInfo::secondary_position(i, size);
            grid.set(x, y, bit);
        }
        grid
    }

    #[test]
    fn test_known_codewords() {
        // M / mask 0 and L / mask 4 from the published format table
        let m0 = FormatInfo {
            ec_level: EcLevel::M,
            mask_pattern: MaskPattern::Pattern0,
        };
        assert_eq!(m0.codeword(), 0x5412);
        let l4 = FormatInfo {
            ec_level: EcLevel::L,
            mask_pattern: MaskPattern::Pattern4,
        };
        assert_eq!(l4.codeword(), 0x662F);
    }

    #[test]
    fn test_decode_corrects_three_errors() {
        let info = FormatInfo {
            ec_level: EcLevel::Q,
            mask_pattern: MaskPattern::Pattern5,
        };
        let raw = info.codeword() ^ 0b100_0000_0100_0001;
        assert_eq!(FormatInfo::decode(raw), Some(info));
    }

    #[test]
    fn test_decode_rejects_blank() {
        // Every valid word has at least five set bits
        assert_eq!(FormatInfo::decode(0), None);
    }

    #[test]
    fn test_extract_falls_back_to_secondary_copy() {
        let info = FormatInfo {
            ec_level: EcLevel::H,
            mask_pattern: MaskPattern::Pattern3,
        };
        let mut grid = grid_with_format(info, 21);
        for i in 0..15 {
            let (x, y) = FormatInfo::primary_position(i);
            grid.set(x, y, false);
        }
        assert_eq!(FormatInfo::extract(&grid), Ok(info));
    }

    #[test]
    fn test_extract_fails_when_both_copies_blank() {
        let grid = BitMatrix::square(25);
        assert_eq!(FormatInfo::extract(&grid), Err(DecodeError::FormatEcc));
    }
}
