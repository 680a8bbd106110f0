//! Codeword extraction from a sampled module grid

use crate::decoder::function_mask::FunctionMask;
use crate::decoder::tables::total_codewords;
use crate::models::{BitMatrix, MaskPattern};

/// Read all codewords in zigzag order, removing the data mask on the fly.
///
/// Column pairs are walked right to left, skipping the vertical timing
/// column, alternating upward and downward. Bits are packed MSB first.
/// Remainder bits after the last full codeword are dropped.
pub fn read_codewords(grid: &BitMatrix, version: u8, mask: MaskPattern) -> Vec<u8> {
    let func = FunctionMask::new(version);
    let size = func.size();
    let total = total_codewords(version);

    let mut codewords = Vec::with_capacity(total);
    let mut current = 0u8;
    let mut bit_count = 0;

    let mut right = size - 1;
    loop {
        if right == 6 {
            right = 5;
        }
        let upward = (right + 1) & 2 == 0;
        for vert in 0..size {
            let y = if upward { size - 1 - vert } else { vert };
            for x in [right, right - 1] {
                if func.is_function(x, y) {
                    continue;
                }
                let bit = grid.get(x, y) ^ mask.is_masked(y, x);
                current = (current << 1) | bit as u8;
                bit_count += 1;
                if bit_count == 8 {
                    if codewords.len() < total {
                        codewords.push(current);
                    }
                    current = 0;
                    bit_count = 0;
                }
            }
        }
        if right < 2 {
            break;
        }
        right -= 2;
    }

    codewords
}
