//! Grouping of finder patterns into symbol candidates

use super::finder::FinderPattern;
use crate::models::Point;

/// Largest |cos| between the two legs at the corner finder
const MAX_CORNER_COSINE: f32 = 0.3;
/// Largest ratio between the two leg lengths
const MAX_LEG_RATIO: f32 = 1.3;
/// Largest ratio between finder module sizes in one symbol
const MAX_SIZE_RATIO: f32 = 1.5;

/// Three finders forming the top-left, top-right and bottom-left corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinderGroup {
    /// Corner finder, where both legs meet
    pub top_left: FinderPattern,
    /// End of the leg along the first row
    pub top_right: FinderPattern,
    /// End of the leg along the first column
    pub bottom_left: FinderPattern,
}

impl FinderGroup {
    /// Mean module size of the three finders
    pub fn module_size(&self) -> f32 {
        (self.top_left.module_size + self.top_right.module_size + self.bottom_left.module_size)
            / 3.0
    }

    /// Grid size implied by the mean leg length, if it is a valid size
    pub fn dimension(&self) -> Option<usize> {
        let legs = (self.top_left.center.distance(&self.top_right.center)
            + self.top_left.center.distance(&self.bottom_left.center))
            / 2.0;
        dimension_from(legs, self.module_size())
    }
}

/// Grid size whose finder centers lie `distance` apart, snapped to 17 + 4v
pub fn dimension_from(distance: f32, module_size: f32) -> Option<usize> {
    if module_size <= 0.0 {
        return None;
    }
    let modules = distance / module_size + 7.0;
    let version = ((modules - 17.0) / 4.0).round();
    if !(1.0..=40.0).contains(&version) {
        return None;
    }
    Some(17 + 4 * version as usize)
}

struct Scored {
    score: f32,
    members: [usize; 3],
    group: FinderGroup,
}

/// Choose the best non-overlapping finder triples.
///
/// Every triple is scored by how square its corner is, how equal its legs
/// are and how consistent its module sizes are. Triples are then taken
/// greedily, best first, never reusing a finder. The result is ordered by
/// the top-left finder, top to bottom.
pub fn group_finders(patterns: &[FinderPattern]) -> Vec<FinderGroup> {
    let n = patterns.len();
    let mut scored = Vec::new();
    for i in 0..n {
        for j in i + 1..n {
            for k in j + 1..n {
                if let Some(s) = score_triple(patterns, [i, j, k]) {
                    scored.push(s);
                }
            }
        }
    }
    scored.sort_by(|a, b| a.score.total_cmp(&b.score));

    let mut used = vec![false; n];
    let mut groups = Vec::new();
    for s in scored {
        if s.members.iter().any(|&m| used[m]) {
            continue;
        }
        for &m in &s.members {
            used[m] = true;
        }
        groups.push(s.group);
    }
    groups.sort_by(|a, b| {
        let (pa, pb) = (a.top_left.center, b.top_left.center);
        pa.y.total_cmp(&pb.y).then(pa.x.total_cmp(&pb.x))
    });
    groups
}

fn score_triple(patterns: &[FinderPattern], members: [usize; 3]) -> Option<Scored> {
    let tri = members.map(|m| patterns[m]);
    let sizes = tri.map(|p| p.module_size);
    let largest = sizes.iter().copied().fold(f32::MIN, f32::max);
    let smallest = sizes.iter().copied().fold(f32::MAX, f32::min);
    if smallest <= 0.0 || largest / smallest > MAX_SIZE_RATIO {
        return None;
    }

    // The corner finder is the one with the squarest angle
    let (cosine, corner, l1, l2) = (0..3)
        .filter_map(|c| {
            let p = tri[c].center;
            let a = tri[(c + 1) % 3].center;
            let b = tri[(c + 2) % 3].center;
            let (l1, l2) = (p.distance(&a), p.distance(&b));
            if l1 == 0.0 || l2 == 0.0 {
                return None;
            }
            let dot = (a.x - p.x) * (b.x - p.x) + (a.y - p.y) * (b.y - p.y);
            Some(((dot / (l1 * l2)).abs(), c, l1, l2))
        })
        .min_by(|x, y| x.0.total_cmp(&y.0))?;

    if cosine > MAX_CORNER_COSINE || l1.max(l2) / l1.min(l2) > MAX_LEG_RATIO {
        return None;
    }
    let module_size = sizes.iter().sum::<f32>() / 3.0;
    let d1 = dimension_from(l1, module_size)?;
    let d2 = dimension_from(l2, module_size)?;
    if d1.abs_diff(d2) > 4 {
        return None;
    }

    let top_left = tri[corner];
    let a = tri[(corner + 1) % 3];
    let b = tri[(corner + 2) % 3];
    // Clockwise in image coordinates means a is the top-right finder
    let (top_right, bottom_left) = if cross(&top_left.center, &a.center, &b.center) > 0.0 {
        (a, b)
    } else {
        (b, a)
    };

    Some(Scored {
        score: cosine + (1.0 - l1 / l2).abs() + (largest / smallest - 1.0),
        members,
        group: FinderGroup {
            top_left,
            top_right,
            bottom_left,
        },
    })
}

fn cross(origin: &Point, a: &Point, b: &Point) -> f32 {
    (a.x - origin.x) * (b.y - origin.y) - (a.y - origin.y) * (b.x - origin.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finder(x: f32, y: f32) -> FinderPattern {
        FinderPattern::new(x, y, 4.0)
    }

    #[test]
    fn test_dimension_from() {
        // Version 1: centers 14 modules apart
        assert_eq!(dimension_from(56.0, 4.0), Some(21));
        assert_eq!(dimension_from(18.0 * 4.0, 4.0), Some(25));
        assert_eq!(dimension_from(10.0, 4.0), None);
        assert_eq!(dimension_from(56.0, 0.0), None);
    }

    #[test]
    fn test_assigns_corners() {
        let patterns = [finder(86.0, 30.0), finder(30.0, 86.0), finder(30.0, 30.0)];
        let groups = group_finders(&patterns);
        assert_eq!(groups.len(), 1);
        let g = groups[0];
        assert_eq!(g.top_left.center, Point::new(30.0, 30.0));
        assert_eq!(g.top_right.center, Point::new(86.0, 30.0));
        assert_eq!(g.bottom_left.center, Point::new(30.0, 86.0));
        assert_eq!(g.dimension(), Some(21));
    }

    #[test]
    fn test_mirrored_layout_swaps_corners() {
        // Reflected left to right, the finder at x=86 ends up to the left
        let patterns = [finder(30.0, 30.0), finder(86.0, 30.0), finder(86.0, 86.0)];
        let g = group_finders(&patterns)[0];
        assert_eq!(g.top_left.center, Point::new(86.0, 30.0));
        assert_eq!(g.top_right.center, Point::new(86.0, 86.0));
        assert_eq!(g.bottom_left.center, Point::new(30.0, 30.0));
    }

    #[test]
    fn test_two_symbols_sorted_top_to_bottom() {
        let patterns = [
            finder(30.0, 230.0),
            finder(86.0, 230.0),
            finder(30.0, 286.0),
            finder(30.0, 30.0),
            finder(86.0, 30.0),
            finder(30.0, 86.0),
        ];
        let groups = group_finders(&patterns);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].top_left.center, Point::new(30.0, 30.0));
        assert_eq!(groups[1].top_left.center, Point::new(30.0, 230.0));
    }

    #[test]
    fn test_rejects_skewed_triples() {
        // Collinear
        assert!(group_finders(&[finder(0.0, 0.0), finder(50.0, 0.0), finder(100.0, 0.0)]).is_empty());
        // Unequal legs
        assert!(group_finders(&[finder(30.0, 30.0), finder(86.0, 30.0), finder(30.0, 150.0)]).is_empty());
        // Mismatched module sizes
        let patterns = [
            FinderPattern::new(30.0, 30.0, 4.0),
            FinderPattern::new(86.0, 30.0, 4.0),
            FinderPattern::new(30.0, 86.0, 8.0),
        ];
        assert!(group_finders(&patterns).is_empty());
    }
}
