//! Perspective-corrected module sampling for a finder group

use super::grouping::FinderGroup;
use crate::models::{BitMatrix, Point, Position};
use crate::utils::geometry::PerspectiveTransform;

/// Alignment candidates with more mismatched cells than this are ignored
const MAX_ALIGNMENT_MISMATCH: usize = 3;

/// A located symbol: its sampled modules and where it sits in the image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampledGrid {
    /// One bit per module, dark = true
    pub grid: BitMatrix,
    /// Image positions of module-grid corners (0,0), (n,0), (n,n), (0,n)
    pub corners: [Position; 4],
}

impl SampledGrid {
    /// Side length in modules
    pub fn size(&self) -> usize {
        self.grid.width()
    }
}

/// Fit a transform to the finder centers, refine it on the bottom-right
/// alignment pattern when the symbol has one, then sample every module.
pub fn sample_grid(binary: &BitMatrix, group: &FinderGroup) -> Option<SampledGrid> {
    let dimension = group.dimension()?;
    let module_size = group.module_size();
    let top_left = group.top_left.center;
    let top_right = group.top_right.center;
    let bottom_left = group.bottom_left.center;
    let bottom_right = calculate_bottom_right(&top_left, &top_right, &bottom_left);

    let mut transform = build_transform(
        &[top_left, top_right, bottom_left, bottom_right],
        finder_sources(dimension, None),
    )?;

    if dimension > 21 {
        let align = dimension as f32 - 6.5;
        if let Some(found) = find_alignment_center(binary, &transform, align, module_size) {
            if let Some(refined) = build_transform(
                &[top_left, top_right, bottom_left, found],
                finder_sources(dimension, Some(align)),
            ) {
                transform = refined;
            }
        }
    }

    let mut grid = BitMatrix::square(dimension);
    for y in 0..dimension {
        for x in 0..dimension {
            let (px, py) = transform.map(x as f64 + 0.5, y as f64 + 0.5)?;
            grid.set(x, y, binary.get_signed(px.floor() as i64, py.floor() as i64));
        }
    }

    let n = dimension as f64;
    let mut corners = [Position::default(); 4];
    for (corner, (x, y)) in corners
        .iter_mut()
        .zip([(0.0, 0.0), (n, 0.0), (n, n), (0.0, n)])
    {
        let (px, py) = transform.map(x, y)?;
        *corner = Position::new(px.round() as i32, py.round() as i32);
    }

    Some(SampledGrid { grid, corners })
}

/// In a perfect parallelogram, bottom_right = top_right + bottom_left - top_left
fn calculate_bottom_right(top_left: &Point, top_right: &Point, bottom_left: &Point) -> Point {
    Point::new(
        top_right.x + bottom_left.x - top_left.x,
        top_right.y + bottom_left.y - top_left.y,
    )
}

/// Module coordinates of the three finder centers plus the fourth anchor:
/// the alignment center when given, else the virtual fourth finder
fn finder_sources(dimension: usize, align: Option<f32>) -> [Point; 4] {
    let far = dimension as f32 - 3.5;
    let fourth = match align {
        Some(a) => Point::new(a, a),
        None => Point::new(far, far),
    };
    [
        Point::new(3.5, 3.5),
        Point::new(far, 3.5),
        Point::new(3.5, far),
        fourth,
    ]
}

fn build_transform(image: &[Point; 4], modules: [Point; 4]) -> Option<PerspectiveTransform> {
    PerspectiveTransform::from_points(&modules, image)
}

/// Search around the predicted alignment center for the best 5x5 match.
///
/// Ties on mismatch count go to the candidate closest to the prediction.
fn find_alignment_center(
    binary: &BitMatrix,
    transform: &PerspectiveTransform,
    align: f32,
    module_size: f32,
) -> Option<Point> {
    let (px, py) = transform.map(align as f64, align as f64)?;
    if !px.is_finite() || !py.is_finite() {
        return None;
    }
    let radius = (module_size as f64 * 4.0).max(4.0);

    let mut best: Option<(usize, f64, Point)> = None;
    for y in (py - radius).floor() as i64..=(py + radius).ceil() as i64 {
        for x in (px - radius).floor() as i64..=(px + radius).ceil() as i64 {
            let (cx, cy) = (x as f64 + 0.5, y as f64 + 0.5);
            let Some(mismatch) = alignment_pattern_mismatch(binary, transform, align, cx, cy)
            else {
                continue;
            };
            let distance = (cx - px).powi(2) + (cy - py).powi(2);
            let better = match best {
                Some((m, d, _)) => (mismatch, distance) < (m, d),
                None => true,
            };
            if better {
                best = Some((mismatch, distance, Point::new(cx as f32, cy as f32)));
            }
        }
    }

    match best {
        Some((mismatch, _, center)) if mismatch <= MAX_ALIGNMENT_MISMATCH => Some(center),
        _ => None,
    }
}

/// Count cells of the 5x5 alignment template that disagree with the image
/// when the template is centered at (cx, cy). None if it leaves the image.
fn alignment_pattern_mismatch(
    binary: &BitMatrix,
    transform: &PerspectiveTransform,
    align: f32,
    cx: f64,
    cy: f64,
) -> Option<usize> {
    let a = align as f64;
    let (bx, by) = transform.map(a, a)?;
    let mut mismatches = 0usize;
    for dy in -2i32..=2 {
        for dx in -2i32..=2 {
            let expected_dark = dx.abs().max(dy.abs()) != 1;
            let (mx, my) = transform.map(a + dx as f64, a + dy as f64)?;
            let sx = (cx + mx - bx).floor() as i64;
            let sy = (cy + my - by).floor() as i64;
            if sx < 0 || sy < 0 || sx as usize >= binary.width() || sy as usize >= binary.height() {
                return None;
            }
            if binary.get(sx as usize, sy as usize) != expected_dark {
                mismatches += 1;
            }
        }
    }
    Some(mismatches)
}
