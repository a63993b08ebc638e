//! Order statistics and histogram thresholds over luminance data

use crate::analysis::grayscale::luminance;
use crate::io::configuration::CHANNELS;
use crate::math::blend::to_channel;
use crate::raster::RasterImage;

/// Number of bins in a byte histogram
pub const HISTOGRAM_BINS: usize = 256;

/// Median of `values`, averaging the middle pair for even counts
///
/// Reorders the slice. Returns `None` when it is empty.
pub fn median(values: &mut [f32]) -> Option<f32> {
    if values.is_empty() {
        return None;
    }
    values.sort_unstable_by(f32::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        Some(values[mid])
    } else {
        Some(f32::midpoint(values[mid - 1], values[mid]))
    }
}

/// Counts of rounded luminance levels over every pixel
pub fn luminance_histogram(image: &RasterImage) -> [u64; HISTOGRAM_BINS] {
    let mut bins = [0_u64; HISTOGRAM_BINS];
    for pixel in image.pixels().chunks_exact(CHANNELS) {
        let level = to_channel(luminance(pixel[0], pixel[1], pixel[2]));
        bins[usize::from(level)] += 1;
    }
    bins
}

/// Otsu's cut level: the `t` maximising between-class variance when levels
/// `<= t` form the dark class
///
/// Splits with an empty class are skipped and ties keep the lowest level.
/// A histogram with fewer than two occupied levels yields 0.
pub fn otsu_threshold(histogram: &[u64; HISTOGRAM_BINS]) -> u8 {
    let total: u64 = histogram.iter().sum();
    let weighted_total: f64 = histogram
        .iter()
        .enumerate()
        .map(|(level, &count)| level as f64 * count as f64)
        .sum();

    let mut best_level = 0_u8;
    let mut best_variance = 0.0_f64;
    let mut dark_count = 0_u64;
    let mut dark_sum = 0.0_f64;

    for (level, &count) in (0_u8..=u8::MAX).zip(histogram.iter()) {
        dark_count += count;
        dark_sum = f64::from(level).mul_add(count as f64, dark_sum);
        let light_count = total - dark_count;
        if dark_count == 0 || light_count == 0 {
            continue;
        }

        let dark_mean = dark_sum / dark_count as f64;
        let light_mean = (weighted_total - dark_sum) / light_count as f64;
        let spread = dark_mean - light_mean;
        let variance = dark_count as f64 * light_count as f64 * spread * spread;
        if variance > best_variance {
            best_variance = variance;
            best_level = level;
        }
    }
    best_level
}
