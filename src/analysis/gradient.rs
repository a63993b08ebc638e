//! Sobel gradient field over a luminance plane
//!
//! - Applies the fixed Sobel X/Y kernel pair to interior pixels.
//! - The outermost ring of `gx`, `gy` and `magnitude` is zero.
//! - Magnitude is Euclidean by default; [`GradientNorm::L1`] selects
//!   `|gx| + |gy|` for the Canny `use_l2_gradient = false` path.
//!
//! Complexity: O(W·H); the field is owned by the caller and never cached.

use crate::math::convolution::{SOBEL_X, SOBEL_Y, convolve3};
use log::debug;
use ndarray::{Array2, Zip};

/// Norm used to combine the two derivatives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientNorm {
    /// `|gx| + |gy|`
    L1,
    /// `sqrt(gx² + gy²)`
    #[default]
    L2,
}

/// Parallel derivative and magnitude planes, each indexed `(y, x)`
#[derive(Debug, Clone)]
pub struct GradientField {
    /// Horizontal derivative
    pub gx: Array2<f32>,
    /// Vertical derivative
    pub gy: Array2<f32>,
    /// Combined per-pixel edge strength
    pub magnitude: Array2<f32>,
}

impl GradientField {
    /// Plane width in pixels
    pub fn width(&self) -> usize {
        self.magnitude.ncols()
    }

    /// Plane height in pixels
    pub fn height(&self) -> usize {
        self.magnitude.nrows()
    }

    /// Largest magnitude in the field, zero for an empty field
    pub fn peak(&self) -> f32 {
        self.magnitude.iter().copied().fold(0.0, f32::max)
    }
}

/// Compute Sobel derivatives and their magnitude
pub fn sobel(gray: &Array2<f32>, norm: GradientNorm) -> GradientField {
    let (rows, cols) = gray.dim();
    let gx = convolve3(gray, &SOBEL_X);
    let gy = convolve3(gray, &SOBEL_Y);

    let mut magnitude = Array2::<f32>::zeros((rows, cols));
    Zip::from(&mut magnitude)
        .and(&gx)
        .and(&gy)
        .for_each(|m, &dx: &f32, &dy: &f32| {
            *m = match norm {
                GradientNorm::L1 => dx.abs() + dy.abs(),
                GradientNorm::L2 => dx.mul_add(dx, dy * dy).sqrt(),
            };
        });

    let field = GradientField { gx, gy, magnitude };
    debug!(
        "sobel {cols}x{rows} ({norm:?}): peak magnitude {:.1}",
        field.peak()
    );
    field
}
