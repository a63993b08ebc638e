//! Surface normals estimated from the luminance gradient
//!
//! Each pixel's normal is `(gx, gy, 1)` normalised, with the derivatives
//! divided by 255 and scaled by `strength`. Components map from [-1, 1] to
//! [0, 255], so a flat region reads as (128, 128, 255).

use crate::analysis::gradient::{GradientNorm, sobel};
use crate::analysis::grayscale::grayscale;
use crate::io::configuration::{CHANNELS, DEFAULT_NORMAL_STRENGTH};
use crate::io::error::Result;
use crate::math::blend::{clamp_parameter, to_channel};
use crate::raster::RasterImage;

/// Normal map parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalParams {
    /// Gradient multiplier (0.1-10)
    pub strength: f32,
}

impl Default for NormalParams {
    fn default() -> Self {
        Self {
            strength: DEFAULT_NORMAL_STRENGTH,
        }
    }
}

impl NormalParams {
    /// Copy with `strength` clamped into its documented range
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            strength: clamp_parameter(
                "strength",
                self.strength,
                0.1,
                10.0,
                DEFAULT_NORMAL_STRENGTH,
            ),
        }
    }
}

/// Unit normal for one pair of scaled derivatives
pub fn surface_normal(dx: f32, dy: f32) -> [f32; 3] {
    let length = dx.hypot(dy).hypot(1.0);
    [dx / length, dy / length, 1.0 / length]
}

/// Render the RGB normal map of `image`, opaque
///
/// # Errors
///
/// Returns an error if the input buffer is malformed or the output cannot be
/// allocated
pub fn process(image: &RasterImage, params: &NormalParams) -> Result<RasterImage> {
    image.validate()?;
    let params = params.normalized();
    let field = sobel(&grayscale(image), GradientNorm::L2);
    let factor = params.strength / 255.0;

    let mut output = image.blank_like()?;
    let normals = field.gx.iter().zip(field.gy.iter());
    for (pixel, (&gx, &gy)) in output.pixels_mut().chunks_exact_mut(CHANNELS).zip(normals) {
        let normal = surface_normal(gx * factor, gy * factor);
        for (channel, component) in pixel.iter_mut().zip(normal) {
            *channel = to_channel((component + 1.0) * 127.5);
        }
        pixel[3] = 255;
    }
    Ok(output)
}
