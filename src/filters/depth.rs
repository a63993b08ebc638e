//! Brightness-as-depth fallback map
//!
//! Treats luminance as inverse distance: brighter reads as nearer. A Canny
//! edge cue is blended in so object outlines stand out. This is the map used
//! when no depth model is available.

use crate::analysis::edges::EdgeStrategy;
use crate::analysis::grayscale::grayscale;
use crate::filters::canny::{self, CannyParams};
use crate::io::configuration::{
    DEFAULT_DEPTH_BRIGHTNESS, DEFAULT_DEPTH_CONTRAST, DEFAULT_DEPTH_EDGE_WEIGHT,
    DEFAULT_DEPTH_STRENGTH, DEPTH_EDGE_HIGH, DEPTH_EDGE_LOW, MAX_DEPTH_SMOOTHING,
};
use crate::io::error::Result;
use crate::math::blend::{clamp_parameter, lerp, to_channel, unit_interval};
use crate::math::convolution::gaussian_blur;
use crate::raster::RasterImage;
use ndarray::{Array2, Zip};

/// Depth fallback parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthParams {
    /// Multiplier on normalised depth (0-3)
    pub contrast: f32,
    /// Offset after contrast (-1 to 1)
    pub brightness: f32,
    /// Stretch depth to the full [0, 1] range before contrast
    pub normalize: bool,
    /// Output `1 - depth`
    pub invert: bool,
    /// Weight of the edge cue against luminance (0-1)
    pub edge_weight: f32,
    /// Spread around mid-gray, 1 leaves depth unchanged (0.1-3)
    pub depth_strength: f32,
    /// Gaussian sigma applied before contrast (0-10); zero disables it
    pub smoothing: f32,
}

impl Default for DepthParams {
    fn default() -> Self {
        Self {
            contrast: DEFAULT_DEPTH_CONTRAST,
            brightness: DEFAULT_DEPTH_BRIGHTNESS,
            normalize: false,
            invert: false,
            edge_weight: DEFAULT_DEPTH_EDGE_WEIGHT,
            depth_strength: DEFAULT_DEPTH_STRENGTH,
            smoothing: 0.0,
        }
    }
}

impl DepthParams {
    /// Copy with numeric fields clamped into their documented ranges
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            contrast: clamp_parameter("contrast", self.contrast, 0.0, 3.0, DEFAULT_DEPTH_CONTRAST),
            brightness: clamp_parameter(
                "brightness",
                self.brightness,
                -1.0,
                1.0,
                DEFAULT_DEPTH_BRIGHTNESS,
            ),
            edge_weight: unit_interval("edge_weight", self.edge_weight, DEFAULT_DEPTH_EDGE_WEIGHT),
            depth_strength: clamp_parameter(
                "depth_strength",
                self.depth_strength,
                0.1,
                3.0,
                DEFAULT_DEPTH_STRENGTH,
            ),
            smoothing: clamp_parameter("smoothing", self.smoothing, 0.0, MAX_DEPTH_SMOOTHING, 0.0),
            ..*self
        }
    }
}

// Min-max stretch; a flat plane collapses to zero
fn stretch(depth: &mut Array2<f32>) {
    let min = depth.iter().copied().fold(f32::INFINITY, f32::min);
    let max = depth.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let range = max - min;
    if range > 0.0 {
        depth.mapv_inplace(|d| (d - min) / range);
    } else {
        depth.mapv_inplace(|d| d - min);
    }
}

// Depth before contrast, roughly in [0, 1]; expects normalised parameters
fn estimate(image: &RasterImage, params: &DepthParams) -> Result<Array2<f32>> {
    let mut depth = grayscale(image).mapv(|g| g / 255.0);
    if params.edge_weight > 0.0 {
        let cue = canny::edge_map(
            image,
            &CannyParams {
                low_threshold: DEPTH_EDGE_LOW,
                high_threshold: DEPTH_EDGE_HIGH,
                use_l2_gradient: true,
                gaussian_blur: 0.0,
                strategy: EdgeStrategy::HysteresisLinked,
            },
        )?;
        Zip::from(&mut depth).and(&cue).for_each(|d, &edge| {
            *d = lerp(*d, f32::from(edge) / 255.0, params.edge_weight);
        });
    }

    if params.normalize {
        stretch(&mut depth);
    }
    if (params.depth_strength - 1.0).abs() > f32::EPSILON {
        depth.mapv_inplace(|d| (d - 0.5).mul_add(params.depth_strength, 0.5));
    }
    gaussian_blur(&depth, params.smoothing)
}

/// Render the depth fallback of `image` as opaque grayscale
///
/// # Errors
///
/// Returns an error if the input buffer is malformed or the output cannot be
/// allocated
pub fn process(image: &RasterImage, params: &DepthParams) -> Result<RasterImage> {
    image.validate()?;
    let params = params.normalized();
    let depth = estimate(image, &params)?;

    let levels = depth.iter().map(|&d| {
        let adjusted = d.mul_add(params.contrast, params.brightness).clamp(0.0, 1.0);
        let adjusted = if params.invert { 1.0 - adjusted } else { adjusted };
        to_channel(adjusted * 255.0)
    });

    let mut output = image.blank_like()?;
    output.fill_gray(levels, Some(255));
    Ok(output)
}
