use crate::models::BitMatrix;

/// Convert grayscale image to binary using Otsu's thresholding method.
/// Returns a BitMatrix where true = dark, false = light.
pub fn otsu_binarize(gray: &[u8], width: usize, height: usize) -> BitMatrix {
    let threshold = calculate_otsu_threshold(&gray[..width * height]);
    threshold_binarize(gray, width, height, threshold)
}

/// Otsu's optimal threshold; pixels strictly below it are dark.
///
/// Runs over cumulative histogram sums, so the search is O(256) after the
/// histogram pass. A single-intensity image returns 128.
pub fn calculate_otsu_threshold(gray: &[u8]) -> u8 {
    let mut histogram = [0u64; 256];
    for &pixel in gray {
        histogram[pixel as usize] += 1;
    }

    let total = gray.len() as u64;
    let sum_all: u64 = histogram
        .iter()
        .enumerate()
        .map(|(i, &count)| i as u64 * count)
        .sum();

    let mut below_count = 0u64;
    let mut below_sum = 0u64;
    let mut max_variance = 0.0f64;
    let mut optimal_threshold = 128u8;

    for threshold in 1..=255usize {
        below_count += histogram[threshold - 1];
        below_sum += (threshold as u64 - 1) * histogram[threshold - 1];
        let above_count = total - below_count;
        if below_count == 0 || above_count == 0 {
            continue;
        }

        let below_mean = below_sum as f64 / below_count as f64;
        let above_mean = (sum_all - below_sum) as f64 / above_count as f64;
        let variance =
            below_count as f64 * above_count as f64 * (below_mean - above_mean).powi(2);

        if variance > max_variance {
            max_variance = variance;
            optimal_threshold = threshold as u8;
        }
    }

    optimal_threshold
}

/// Simple global threshold binarization
pub fn threshold_binarize(gray: &[u8], width: usize, height: usize, threshold: u8) -> BitMatrix {
    let mut binary = BitMatrix::new(width, height);
    for y in 0..height {
        let row = &gray[y * width..(y + 1) * width];
        for (x, &pixel) in row.iter().enumerate() {
            if pixel < threshold {
                binary.set(x, y, true);
            }
        }
    }
    binary
}

/// Local-mean binarization over a (2r+1)^2 window using an integral image.
///
/// A pixel is dark when it sits at least `bias_percent` below the mean of
/// its window. Windows are clipped at the image border.
pub fn adaptive_binarize(
    gray: &[u8],
    width: usize,
    height: usize,
    radius: usize,
    bias_percent: u8,
) -> BitMatrix {
    let stride = width + 1;
    let mut integral = vec![0u64; stride * (height + 1)];
    for y in 0..height {
        let mut row_sum = 0u64;
        for x in 0..width {
            row_sum += gray[y * width + x] as u64;
            integral[(y + 1) * stride + x + 1] = integral[y * stride + x + 1] + row_sum;
        }
    }

    let keep = 100 - bias_percent.min(100) as u64;
    let mut binary = BitMatrix::new(width, height);
    for y in 0..height {
        let y0 = y.saturating_sub(radius);
        let y1 = (y + radius + 1).min(height);
        for x in 0..width {
            let x0 = x.saturating_sub(radius);
            let x1 = (x + radius + 1).min(width);
            let sum = integral[y1 * stride + x1] + integral[y0 * stride + x0]
                - integral[y0 * stride + x1]
                - integral[y1 * stride + x0];
            let count = ((x1 - x0) * (y1 - y0)) as u64;
            let pixel = gray[y * width + x] as u64;
            if pixel * count * 100 <= sum * keep {
                binary.set(x, y, true);
            }
        }
    }
    binary
}
