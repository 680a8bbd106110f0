//! Geometry utilities for perspective transformations

use crate::models::Point;

/// Perspective transformation matrix (3x3, a33 = 1).
///
/// Coefficients are kept in f64: module coordinates are small while image
/// coordinates can reach the thousands, and the products in the 8x8 system
/// lose too much precision in f32.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveTransform {
    c: [f64; 8],
}

impl PerspectiveTransform {
    /// Create transform mapping 4 source points onto 4 destination points
    pub fn from_points(src: &[Point; 4], dst: &[Point; 4]) -> Option<Self> {
        let mut a = [[0.0f64; 8]; 8];
        let mut b = [0.0f64; 8];

        for i in 0..4 {
            let (sx, sy) = (src[i].x as f64, src[i].y as f64);
            let (dx, dy) = (dst[i].x as f64, dst[i].y as f64);

            let row = i * 2;
            a[row] = [sx, sy, 1.0, 0.0, 0.0, 0.0, -dx * sx, -dx * sy];
            b[row] = dx;
            a[row + 1] = [0.0, 0.0, 0.0, sx, sy, 1.0, -dy * sx, -dy * sy];
            b[row + 1] = dy;
        }

        solve_linear_system(&a, &b).map(|c| Self { c })
    }

    /// Map (x, y) through the transform, None when it lands at infinity
    pub fn map(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        let c = &self.c;
        let denominator = c[6] * x + c[7] * y + 1.0;
        if denominator.abs() < 1e-12 {
            return None;
        }
        Some((
            (c[0] * x + c[1] * y + c[2]) / denominator,
            (c[3] * x + c[4] * y + c[5]) / denominator,
        ))
    }

    /// Transform a point using this perspective matrix
    pub fn transform(&self, p: &Point) -> Option<Point> {
        self.map(p.x as f64, p.y as f64)
            .map(|(x, y)| Point::new(x as f32, y as f32))
    }
}

/// Solve 8x8 linear system using Gaussian elimination with partial pivoting
#[allow(clippy::needless_range_loop)]
fn solve_linear_system(a: &[[f64; 8]; 8], b: &[f64; 8]) -> Option<[f64; 8]> {
    let mut a = *a;
    let mut b = *b;
    let n = 8;

    for i in 0..n {
        let mut max_val = a[i][i].abs();
        let mut max_row = i;
        for k in (i + 1)..n {
            if a[k][i].abs() > max_val {
                max_val = a[k][i].abs();
                max_row = k;
            }
        }

        if max_val < 1e-12 {
            return None;
        }

        if max_row != i {
            a.swap(i, max_row);
            b.swap(i, max_row);
        }

        for k in (i + 1)..n {
            let factor = a[k][i] / a[i][i];
            b[k] -= factor * b[i];
            for j in i..n {
                a[k][j] -= factor * a[i][j];
            }
        }
    }

    let mut x = [0.0f64; 8];
    for i in (0..n).rev() {
        let mut sum = b[i];
        for j in (i + 1)..n {
            sum -= a[i][j] * x[j];
        }
        x[i] = sum / a[i][i];
    }

    Some(x)
}
