//! Scribble map from a difference of Gaussians
//!
//! A pixel becomes a white stroke when its fine blur is darker than its
//! coarse blur by more than half of `threshold`.

use crate::analysis::grayscale::grayscale;
use crate::io::configuration::{
    DEFAULT_SCRIBBLE_THRESHOLD, SCRIBBLE_COARSE_SIGMA, SCRIBBLE_FINE_SIGMA,
};
use crate::io::error::Result;
use crate::math::blend::clamp_parameter;
use crate::math::convolution::gaussian_blur;
use crate::raster::RasterImage;

/// Scribble parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScribbleParams {
    /// Cut level for twice the Gaussian difference (0-255)
    pub threshold: f32,
}

impl Default for ScribbleParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SCRIBBLE_THRESHOLD,
        }
    }
}

impl ScribbleParams {
    /// Copy with `threshold` clamped into its documented range
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            threshold: clamp_parameter(
                "threshold",
                self.threshold,
                0.0,
                255.0,
                DEFAULT_SCRIBBLE_THRESHOLD,
            ),
        }
    }
}

/// Render the binary scribble map of `image`, opaque
///
/// # Errors
///
/// Returns an error if the input buffer is malformed or a buffer cannot be
/// allocated
pub fn process(image: &RasterImage, params: &ScribbleParams) -> Result<RasterImage> {
    image.validate()?;
    let params = params.normalized();

    let gray = grayscale(image);
    let fine = gaussian_blur(&gray, SCRIBBLE_FINE_SIGMA)?;
    let coarse = gaussian_blur(&gray, SCRIBBLE_COARSE_SIGMA)?;

    let levels = coarse.iter().zip(fine.iter()).map(|(&wide, &narrow)| {
        let darkening = (wide - narrow).clamp(0.0, 255.0);
        if 2.0 * darkening > params.threshold { 255 } else { 0 }
    });

    let mut output = image.blank_like()?;
    output.fill_gray(levels, Some(255));
    Ok(output)
}
