//! Raw Sobel magnitude map

use crate::analysis::gradient::{GradientNorm, sobel};
use crate::analysis::grayscale::grayscale;
use crate::io::configuration::{DEFAULT_RESPONSE_DELTA, DEFAULT_RESPONSE_SCALE};
use crate::io::error::Result;
use crate::math::blend::{clamp_parameter, to_channel};
use crate::raster::RasterImage;

/// Linear mapping from a filter response to output levels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponseParams {
    /// Multiplier applied to the response (0.1-2.0)
    pub scale: f32,
    /// Offset added after scaling (0-100)
    pub delta: f32,
}

/// Sobel map parameters
pub type SobelParams = ResponseParams;

impl Default for ResponseParams {
    fn default() -> Self {
        Self {
            scale: DEFAULT_RESPONSE_SCALE,
            delta: DEFAULT_RESPONSE_DELTA,
        }
    }
}

impl ResponseParams {
    /// Copy with both fields clamped into their documented ranges
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            scale: clamp_parameter("scale", self.scale, 0.1, 2.0, DEFAULT_RESPONSE_SCALE),
            delta: clamp_parameter("delta", self.delta, 0.0, 100.0, DEFAULT_RESPONSE_DELTA),
        }
    }

    /// Output level for a non-negative response
    pub fn level(&self, response: f32) -> u8 {
        to_channel(response.mul_add(self.scale, self.delta))
    }
}

/// Render the clamped Sobel magnitude of `image` as opaque grayscale
///
/// # Errors
///
/// Returns an error if the input buffer is malformed or the output cannot be
/// allocated
pub fn process(image: &RasterImage, params: &SobelParams) -> Result<RasterImage> {
    image.validate()?;
    let params = params.normalized();
    let gradient = sobel(&grayscale(image), GradientNorm::L2);

    let mut output = image.blank_like()?;
    output.fill_gray(gradient.magnitude.iter().map(|&m| params.level(m)), Some(255));
    Ok(output)
}
