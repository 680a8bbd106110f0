//! Finder pattern detection using 1:1:3:1:1 ratio scanning with cross-checks

use crate::models::{BitMatrix, Point};

/// Expected run widths, in modules, across a finder pattern
const FINDER_RATIO: [f32; 5] = [1.0, 1.0, 3.0, 1.0, 1.0];

/// A confirmed finder pattern
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinderPattern {
    /// Center of the 3x3 core, in pixels
    pub center: Point,
    /// Estimated width of one module, in pixels
    pub module_size: f32,
    /// Row hits merged into this pattern
    pub count: usize,
}

impl FinderPattern {
    /// Single hit at (x, y)
    pub fn new(x: f32, y: f32, module_size: f32) -> Self {
        Self {
            center: Point::new(x, y),
            module_size,
            count: 1,
        }
    }

    /// Fold another hit into the running average
    fn absorb(&mut self, other: &FinderPattern) {
        let n = self.count as f32;
        self.center.x = (self.center.x * n + other.center.x) / (n + 1.0);
        self.center.y = (self.center.y * n + other.center.y) / (n + 1.0);
        self.module_size = (self.module_size * n + other.module_size) / (n + 1.0);
        self.count += 1;
    }

    fn is_near(&self, other: &FinderPattern) -> bool {
        let reach = self.module_size * 2.0;
        (self.center.x - other.center.x).abs() <= reach
            && (self.center.y - other.center.y).abs() <= reach
    }
}

/// Row scanner for finder patterns
pub struct FinderDetector;

impl FinderDetector {
    /// Scan every row for dark-light-dark-light-dark runs, confirm each hit
    /// vertically and again horizontally, and merge hits on the same pattern.
    pub fn detect(matrix: &BitMatrix) -> Vec<FinderPattern> {
        let mut patterns: Vec<FinderPattern> = Vec::new();
        for y in 0..matrix.height() {
            for hit in Self::scan_row(matrix, y) {
                match patterns.iter_mut().find(|p| p.is_near(&hit)) {
                    Some(existing) => existing.absorb(&hit),
                    None => patterns.push(hit),
                }
            }
        }
        patterns
    }

    fn scan_row(matrix: &BitMatrix, y: usize) -> Vec<FinderPattern> {
        let width = matrix.width();
        let mut hits = Vec::new();
        if width == 0 {
            return hits;
        }

        let mut run_lengths: Vec<usize> = Vec::new();
        let mut run_colors: Vec<bool> = Vec::new();
        let mut run_start = 0usize;
        let mut current_color = matrix.get(0, y);

        // One past the end closes the final run
        for x in 1..=width {
            let color = if x < width {
                matrix.get(x, y)
            } else {
                !current_color
            };
            if color == current_color {
                continue;
            }
            run_lengths.push(x - run_start);
            run_colors.push(current_color);
            run_start = x;
            current_color = color;

            let n = run_colors.len();
            if n < 5 || !run_colors[n - 5] || !run_colors[n - 1] {
                continue;
            }
            let lengths = [
                run_lengths[n - 5],
                run_lengths[n - 4],
                run_lengths[n - 3],
                run_lengths[n - 2],
                run_lengths[n - 1],
            ];
            if let Some(pattern) = Self::check_pattern(matrix, &lengths, x, y) {
                hits.push(pattern);
            }
        }

        hits
    }

    /// Validate a row hit ending just before `end_x` and refine its center
    fn check_pattern(
        matrix: &BitMatrix,
        lengths: &[usize; 5],
        end_x: usize,
        y: usize,
    ) -> Option<FinderPattern> {
        if !ratio_ok(lengths) {
            return None;
        }
        let total_h: usize = lengths.iter().sum();
        let center_x = end_x as f32
            - lengths[4] as f32
            - lengths[3] as f32
            - lengths[2] as f32 / 2.0;
        let column = center_x.floor() as usize;

        let (center_y, total_v) =
            measure_line(|i| matrix.get(column, i), y, matrix.height(), total_h)?;
        let row = center_y.floor() as usize;
        let (center_x, total_h) =
            measure_line(|i| matrix.get(i, row), column, matrix.width(), total_h)?;

        let module_size = (total_h + total_v) as f32 / 14.0;
        Some(FinderPattern::new(center_x, center_y, module_size))
    }
}

/// Check five run lengths against the 1:1:3:1:1 ratio
pub(crate) fn ratio_ok(lengths: &[usize; 5]) -> bool {
    let total: usize = lengths.iter().sum();
    if total < 7 {
        return false;
    }
    let unit = total as f32 / 7.0;
    lengths.iter().zip(FINDER_RATIO).all(|(&len, expected)| {
        let tolerance = if expected > 1.0 { 0.75 } else { 0.5 };
        (len as f32 / unit - expected).abs() < tolerance
    })
}

/// Count the five runs through `start` along one line of `len` pixels.
///
/// Returns the center of the middle dark run and the total run length.
/// Outer runs are cut off once they exceed `max_run`.
fn measure_line(
    dark: impl Fn(usize) -> bool,
    start: usize,
    len: usize,
    max_run: usize,
) -> Option<(f32, usize)> {
    let at = |i: isize| i >= 0 && (i as usize) < len && dark(i as usize);
    let inside = |i: isize| i >= 0 && (i as usize) < len;
    if !at(start as isize) {
        return None;
    }
    let mut counts = [0usize; 5];

    let mut i = start as isize;
    while at(i) {
        counts[2] += 1;
        i -= 1;
    }
    let first = (i + 1) as usize;
    while inside(i) && !at(i) && counts[1] <= max_run {
        counts[1] += 1;
        i -= 1;
    }
    while at(i) && counts[0] <= max_run {
        counts[0] += 1;
        i -= 1;
    }

    let mut i = start as isize + 1;
    while at(i) {
        counts[2] += 1;
        i += 1;
    }
    let end = i as usize;
    while inside(i) && !at(i) && counts[3] <= max_run {
        counts[3] += 1;
        i += 1;
    }
    while at(i) && counts[4] <= max_run {
        counts[4] += 1;
        i += 1;
    }

    if !ratio_ok(&counts) {
        return None;
    }
    Some(((first + end) as f32 / 2.0, counts.iter().sum()))
}
