//! Version information extraction for QR codes v7+

use crate::models::BitMatrix;

/// BCH(18,6) generator: x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
const VERSION_GENERATOR: u32 = 0x1F25;
const MAX_VERSION_ERRORS: u32 = 3;

/// Version info is 18 bits (6 data + 12 ECC) for versions 7-40
pub struct VersionInfo;

impl VersionInfo {
    /// Stored 18-bit word for a version
    pub const fn codeword(version: u8) -> u32 {
        let data = version as u32;
        let mut rem = data;
        let mut i = 0;
        while i < 12 {
            rem = (rem << 1) ^ ((rem >> 11) * VERSION_GENERATOR);
            i += 1;
        }
        (data << 12) | (rem & 0xFFF)
    }

    /// Read both version blocks and return the first that corrects cleanly.
    /// None for grids below version 7 or when neither block is readable.
    pub fn extract(grid: &BitMatrix) -> Option<u8> {
        let size = grid.width();
        if size < 45 {
            return None;
        }
        let mut top_right = 0u32;
        let mut bottom_left = 0u32;
        for i in 0..18 {
            let (a, b) = (size - 11 + i % 3, i / 3);
            top_right |= (grid.get(a, b) as u32) << i;
            bottom_left |= (grid.get(b, a) as u32) << i;
        }
        Self::decode(top_right).or_else(|| Self::decode(bottom_left))
    }

    /// Nearest valid version word within three bit errors
    pub fn decode(raw: u32) -> Option<u8> {
        let (version, distance) = (7..=40u8)
            .map(|v| (v, (Self::codeword(v) ^ raw).count_ones()))
            .min_by_key(|&(_, distance)| distance)?;
        (distance <= MAX_VERSION_ERRORS).then_some(version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codewords() {
        assert_eq!(VersionInfo::codeword(7), 0x07C94);
        assert_eq!(VersionInfo::codeword(40), 0x28C69);
    }

    #[test]
    fn test_decode_with_errors() {
        assert_eq!(VersionInfo::decode(0x07C94 ^ 0b101), Some(7));
        assert_eq!(VersionInfo::decode(VersionInfo::codeword(23) ^ 0x20001), Some(23));
        assert_eq!(VersionInfo::decode(0), None);
    }

    #[test]
    fn test_extract_small_grid() {
        assert_eq!(VersionInfo::extract(&BitMatrix::square(41)), None);
    }

    #[test]
    fn test_extract_bottom_left_only() {
        let size = 17 + 4 * 9;
        let mut grid = BitMatrix::square(size);
        let word = VersionInfo::codeword(9);
        for i in 0..18 {
            if (word >> i) & 1 == 1 {
                grid.set(i / 3, size - 11 + i % 3, true);
            }
        }
        assert_eq!(VersionInfo::extract(&grid), Some(9));
    }
}
