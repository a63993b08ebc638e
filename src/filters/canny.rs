//! Canny-style edge map: blur, Sobel gradient, double threshold
//!
//! The output is opaque grayscale with levels 0, 128 and 255 under the
//! default [`EdgeStrategy::IndependentThreshold`].

use crate::analysis::edges::{EdgeMap, EdgeStrategy, classify};
use crate::analysis::gradient::{GradientNorm, sobel};
use crate::analysis::grayscale::grayscale;
use crate::io::configuration::{
    DEFAULT_GAUSSIAN_BLUR, DEFAULT_HIGH_THRESHOLD, DEFAULT_LOW_THRESHOLD, MAX_GAUSSIAN_SIGMA,
};
use crate::io::error::Result;
use crate::math::blend::clamp_parameter;
use crate::math::convolution::gaussian_blur;
use crate::raster::RasterImage;

/// Edge detector parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CannyParams {
    /// Lower magnitude bound for weak edges (0-255)
    pub low_threshold: f32,
    /// Lower magnitude bound for strong edges (0-255)
    pub high_threshold: f32,
    /// Euclidean magnitude when true, `|gx| + |gy|` when false
    pub use_l2_gradient: bool,
    /// Sigma of the Gaussian pre-pass (0-100); zero disables it
    pub gaussian_blur: f32,
    /// Weak edge handling
    pub strategy: EdgeStrategy,
}

impl Default for CannyParams {
    fn default() -> Self {
        Self {
            low_threshold: DEFAULT_LOW_THRESHOLD,
            high_threshold: DEFAULT_HIGH_THRESHOLD,
            use_l2_gradient: true,
            gaussian_blur: DEFAULT_GAUSSIAN_BLUR,
            strategy: EdgeStrategy::default(),
        }
    }
}

impl CannyParams {
    /// Copy with every numeric field clamped into its documented range
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            low_threshold: clamp_parameter(
                "low_threshold",
                self.low_threshold,
                0.0,
                255.0,
                DEFAULT_LOW_THRESHOLD,
            ),
            high_threshold: clamp_parameter(
                "high_threshold",
                self.high_threshold,
                0.0,
                255.0,
                DEFAULT_HIGH_THRESHOLD,
            ),
            gaussian_blur: clamp_parameter(
                "gaussian_blur",
                self.gaussian_blur,
                0.0,
                MAX_GAUSSIAN_SIGMA,
                DEFAULT_GAUSSIAN_BLUR,
            ),
            ..*self
        }
    }

    const fn norm(&self) -> GradientNorm {
        if self.use_l2_gradient {
            GradientNorm::L2
        } else {
            GradientNorm::L1
        }
    }
}

/// Classified edge levels of `image`, indexed `(y, x)`
///
/// # Errors
///
/// Returns an error if the input buffer is malformed or the blur kernel
/// cannot be allocated
pub fn edge_map(image: &RasterImage, params: &CannyParams) -> Result<EdgeMap> {
    image.validate()?;
    let params = params.normalized();

    let gray = gaussian_blur(&grayscale(image), params.gaussian_blur)?;
    let gradient = sobel(&gray, params.norm());
    Ok(classify(
        &gradient.magnitude,
        params.low_threshold,
        params.high_threshold,
        params.strategy,
    ))
}

/// Render the edge map of `image`
///
/// # Errors
///
/// Returns an error if the input buffer is malformed or the output cannot be
/// allocated
pub fn process(image: &RasterImage, params: &CannyParams) -> Result<RasterImage> {
    let edges = edge_map(image, params)?;
    let mut output = image.blank_like()?;
    output.fill_gray(edges.iter().copied(), Some(255));
    Ok(output)
}
