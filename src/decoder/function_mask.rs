use crate::models::BitMatrix;

/// Function module mask for a specific QR version.
/// true = function module (not data), false = data module.
pub struct FunctionMask {
    mask: BitMatrix,
}

impl FunctionMask {
    /// Mask for `version` (1-40)
    pub fn new(version: u8) -> Self {
        let size = 17 + 4 * version as usize;
        let mut mask = BitMatrix::square(size);

        // Finder patterns with separators and the format areas next to them
        Self::mark_rect(&mut mask, 0, 0, 9, 9);
        Self::mark_rect(&mut mask, size - 8, 0, 8, 9);
        Self::mark_rect(&mut mask, 0, size - 8, 9, 8);

        // Timing patterns (row 6 and column 6)
        Self::mark_rect(&mut mask, 6, 0, 1, size);
        Self::mark_rect(&mut mask, 0, 6, size, 1);

        let align = alignment_pattern_positions(version);
        let last = align.len().saturating_sub(1);
        for (i, &cx) in align.iter().enumerate() {
            for (j, &cy) in align.iter().enumerate() {
                // The three corners overlap finder patterns
                if (i == 0 && j == 0) || (i == 0 && j == last) || (i == last && j == 0) {
                    continue;
                }
                Self::mark_rect(&mut mask, cx - 2, cy - 2, 5, 5);
            }
        }

        if version >= 7 {
            Self::mark_rect(&mut mask, size - 11, 0, 3, 6);
            Self::mark_rect(&mut mask, 0, size - 11, 6, 3);
        }

        Self { mask }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.mask.width()
    }

    /// True when (x, y) belongs to a function pattern
    pub fn is_function(&self, x: usize, y: usize) -> bool {
        self.mask.get(x, y)
    }

    /// Modules left for data and ECC bits
    pub fn data_modules_count(&self) -> usize {
        self.size() * self.size() - self.mask.count_ones()
    }

    fn mark_rect(mask: &mut BitMatrix, x: usize, y: usize, w: usize, h: usize) {
        for yy in y..y + h {
            for xx in x..x + w {
                mask.set(xx, yy, true);
            }
        }
    }
}

/// Alignment pattern centers for a given version (same list for x and y).
pub fn alignment_pattern_positions(version: u8) -> Vec<usize> {
    if version < 2 {
        return Vec::new();
    }
    let version = version as usize;
    let num_align = version / 7 + 2;
    let step = if version == 32 {
        26
    } else {
        (version * 4 + num_align * 2 + 1) / (num_align * 2 - 2) * 2
    };

    let size = 17 + 4 * version;
    let mut positions = vec![6usize; num_align];
    for (k, slot) in positions.iter_mut().skip(1).rev().enumerate() {
        *slot = size - 7 - k * step;
    }
    positions
}
