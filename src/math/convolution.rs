//! 3x3 kernel convolution and separable Gaussian smoothing over float planes
//!
//! Planes are `Array2<f32>` indexed `(row, column)`. The 3x3 convolution only
//! evaluates interior pixels; the outermost ring of the output is explicitly
//! zero so downstream stages can read every index. The Gaussian pass clamps
//! to the edge instead, so it preserves the plane's full extent.

use crate::io::configuration::GAUSSIAN_RADIUS_SIGMAS;
use crate::io::error::{PreprocessError, Result};
use ndarray::Array2;

/// Row-major 3x3 kernel
pub type Kernel3 = [[f32; 3]; 3];

/// Horizontal Sobel derivative
pub const SOBEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
/// Vertical Sobel derivative
pub const SOBEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];
/// Four-neighbour Laplacian
pub const LAPLACIAN: Kernel3 = [[0.0, 1.0, 0.0], [1.0, -4.0, 1.0], [0.0, 1.0, 0.0]];

/// Weighted 8-neighbourhood sum at an interior pixel
///
/// Caller guarantees `1 <= row < rows - 1` and `1 <= col < cols - 1`.
#[inline]
pub fn convolve3_at(plane: &Array2<f32>, kernel: &Kernel3, row: usize, col: usize) -> f32 {
    let mut sum = 0.0;
    for (ky, kernel_row) in kernel.iter().enumerate() {
        for (kx, &weight) in kernel_row.iter().enumerate() {
            sum += plane[(row + ky - 1, col + kx - 1)] * weight;
        }
    }
    sum
}

/// Convolve the interior of `plane`, leaving a zero border ring
pub fn convolve3(plane: &Array2<f32>, kernel: &Kernel3) -> Array2<f32> {
    let (rows, cols) = plane.dim();
    let mut output = Array2::<f32>::zeros((rows, cols));
    if rows < 3 || cols < 3 {
        return output;
    }

    for row in 1..rows - 1 {
        for col in 1..cols - 1 {
            output[(row, col)] = convolve3_at(plane, kernel, row, col);
        }
    }
    output
}

/// Normalised 1D Gaussian taps for `sigma`
///
/// Radius is `ceil(3 * sigma)`, capped at `max_radius`; a non-positive or NaN
/// sigma yields the identity kernel `[1.0]`.
///
/// # Errors
///
/// Returns an error if the taps cannot be allocated
pub fn gaussian_kernel(sigma: f32, max_radius: usize) -> Result<Vec<f32>> {
    if sigma.is_nan() || sigma <= 0.0 {
        return Ok(vec![1.0]);
    }

    let radius = (GAUSSIAN_RADIUS_SIGMAS * sigma)
        .ceil()
        .min(max_radius as f32) as usize;
    let len = radius * 2 + 1;
    let mut taps = Vec::new();
    taps.try_reserve_exact(len)
        .map_err(|_alloc_error| PreprocessError::Allocation {
            bytes: len * size_of::<f32>(),
        })?;

    let denominator = 2.0 * sigma * sigma;
    for index in 0..len {
        let offset = index as f32 - radius as f32;
        taps.push((-(offset * offset) / denominator).exp());
    }

    let total: f32 = taps.iter().sum();
    for tap in &mut taps {
        *tap /= total;
    }
    Ok(taps)
}

// One 1D pass with clamp-to-edge addressing along the chosen axis
fn convolve_axis(plane: &Array2<f32>, taps: &[f32], horizontal: bool) -> Array2<f32> {
    let (rows, cols) = plane.dim();
    let half = (taps.len() / 2) as isize;
    let mut output = Array2::<f32>::zeros((rows, cols));

    for ((row, col), value) in output.indexed_iter_mut() {
        let mut acc = 0.0;
        for (ki, &weight) in taps.iter().enumerate() {
            let shift = ki as isize - half;
            let sample = if horizontal {
                let sc = (col as isize + shift).clamp(0, cols as isize - 1) as usize;
                plane[(row, sc)]
            } else {
                let sr = (row as isize + shift).clamp(0, rows as isize - 1) as usize;
                plane[(sr, col)]
            };
            acc += sample * weight;
        }
        *value = acc;
    }
    output
}

/// Separable Gaussian blur with clamp-to-edge borders
///
/// The kernel radius never exceeds the longer plane side; past that the
/// clamped samples repeat the edge value.
///
/// # Errors
///
/// Returns an error if the kernel cannot be allocated
pub fn gaussian_blur(plane: &Array2<f32>, sigma: f32) -> Result<Array2<f32>> {
    let (rows, cols) = plane.dim();
    let taps = gaussian_kernel(sigma, rows.max(cols))?;
    if taps.len() == 1 || plane.is_empty() {
        return Ok(plane.clone());
    }
    let horizontal = convolve_axis(plane, &taps, true);
    Ok(convolve_axis(&horizontal, &taps, false))
}
