//! QR code detection modules
//!
//! This module contains all the logic for locating QR codes in a grayscale
//! image:
//! - Finder pattern detection (the three square markers)
//! - Grouping finders into symbol candidates
//! - Perspective correction and module sampling, refined on the alignment
//!   pattern for version 2 and above

use tracing::{debug, trace};

use crate::config::EngineConfig;
use crate::models::BitMatrix;
use crate::utils::binarization::{adaptive_binarize, otsu_binarize};

/// Finder pattern detection using 1:1:3:1:1 ratio scanning
pub mod finder;
/// Sample grid extraction and perspective correction
pub mod grid;
/// Finder triples forming one symbol
pub mod grouping;

use finder::{FinderDetector, FinderPattern};
use grid::{sample_grid, SampledGrid};
use grouping::group_finders;

/// Locate every symbol candidate in a grayscale image.
///
/// A global Otsu threshold is tried first. When it yields fewer than three
/// finders the image is re-binarized with a local mean threshold, which
/// copes with uneven lighting. At most `config.max_candidates` grids are
/// returned, top-left finder first.
pub fn locate(gray: &[u8], width: usize, height: usize, config: &EngineConfig) -> Vec<SampledGrid> {
    if width == 0 || height == 0 || gray.len() < width * height {
        return Vec::new();
    }

    let (binary, patterns) = binarize_and_find(gray, width, height, config);
    trace!(finders = patterns.len(), "finder scan complete");

    let groups = group_finders(&patterns);
    let grids: Vec<SampledGrid> = groups
        .iter()
        .filter_map(|group| sample_grid(&binary, group))
        .take(config.max_candidates)
        .collect();

    debug!(
        finders = patterns.len(),
        groups = groups.len(),
        candidates = grids.len(),
        "located candidates"
    );
    grids
}

fn binarize_and_find(
    gray: &[u8],
    width: usize,
    height: usize,
    config: &EngineConfig,
) -> (BitMatrix, Vec<FinderPattern>) {
    let binary = otsu_binarize(gray, width, height);
    let patterns = FinderDetector::detect(&binary);
    if patterns.len() >= 3 {
        return (binary, patterns);
    }

    debug!(
        finders = patterns.len(),
        radius = config.adaptive_radius,
        "too few finders after global threshold, trying adaptive"
    );
    let fallback = adaptive_binarize(
        gray,
        width,
        height,
        config.adaptive_radius,
        config.adaptive_bias,
    );
    let fallback_patterns = FinderDetector::detect(&fallback);
    if fallback_patterns.len() > patterns.len() {
        (fallback, fallback_patterns)
    } else {
        (binary, patterns)
    }
}
