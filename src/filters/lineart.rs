//! Lineart from the residual over a wide Gaussian background
//!
//! Pixels brighter than their blurred surroundings are kept and scaled so
//! the median residual lands at [`LINEART_GAIN`].

use crate::analysis::grayscale::grayscale;
use crate::io::configuration::{
    DEFAULT_LINEART_SIGMA, LINEART_GAIN, LINEART_MIN_SCALE, LINEART_NOISE_FLOOR,
};
use crate::io::error::Result;
use crate::math::blend::{clamp_parameter, to_channel};
use crate::math::convolution::gaussian_blur;
use crate::math::statistics::median;
use crate::raster::RasterImage;
use log::debug;
use ndarray::Zip;

/// Lineart parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineartParams {
    /// Sigma of the background blur (0.5-20)
    pub sigma: f32,
}

impl Default for LineartParams {
    fn default() -> Self {
        Self {
            sigma: DEFAULT_LINEART_SIGMA,
        }
    }
}

impl LineartParams {
    /// Copy with `sigma` clamped into its documented range
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            sigma: clamp_parameter("sigma", self.sigma, 0.5, 20.0, DEFAULT_LINEART_SIGMA),
        }
    }
}

/// Render the lineart of `image` as opaque grayscale
///
/// # Errors
///
/// Returns an error if the input buffer is malformed or a buffer cannot be
/// allocated
pub fn process(image: &RasterImage, params: &LineartParams) -> Result<RasterImage> {
    image.validate()?;
    let params = params.normalized();

    let gray = grayscale(image);
    let background = gaussian_blur(&gray, params.sigma)?;
    let mut residual = gray;
    Zip::from(&mut residual)
        .and(&background)
        .for_each(|value, &blurred| *value = (*value - blurred).max(0.0));

    let mut salient: Vec<f32> = residual
        .iter()
        .copied()
        .filter(|&r| r > LINEART_NOISE_FLOOR)
        .collect();
    let scale = median(&mut salient).map_or(LINEART_MIN_SCALE, |m| m.max(LINEART_MIN_SCALE));
    debug!("lineart scale {scale} from {} salient pixels", salient.len());

    let mut output = image.blank_like()?;
    output.fill_gray(
        residual.iter().map(|&r| to_channel(r / scale * LINEART_GAIN)),
        Some(255),
    );
    Ok(output)
}
