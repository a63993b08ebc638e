//! Luminance threshold binarizer
//!
//! Note that `intensity` scales the white level itself: at 0.5 the "white"
//! pixels come out mid-gray rather than blended with the source.
//!
//! In [`ThresholdMode::Otsu`] the cut level is chosen per image from the
//! rounded luminance histogram and `threshold` is ignored.

use crate::analysis::grayscale::luminance;
use crate::io::configuration::{CHANNELS, DEFAULT_BINARY_THRESHOLD, DEFAULT_INTENSITY};
use crate::io::error::Result;
use crate::math::blend::{clamp_parameter, to_channel, unit_interval};
use crate::math::statistics::{luminance_histogram, otsu_threshold};
use crate::raster::RasterImage;
use clap::ValueEnum;
use log::debug;

/// How the cut level is picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ThresholdMode {
    /// Use the `threshold` parameter as given
    #[default]
    Fixed,
    /// Derive the level from the image histogram
    Otsu,
}

/// Threshold binarizer parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdParams {
    /// Luminance cut level (0-255); pixels strictly above it become white
    pub threshold: f32,
    /// Scale applied to the binary level (0-1)
    pub intensity: f32,
    /// Swap black and white before scaling
    pub invert_colors: bool,
    /// Cut level selection
    pub mode: ThresholdMode,
}

impl Default for ThresholdParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_BINARY_THRESHOLD,
            intensity: DEFAULT_INTENSITY,
            invert_colors: false,
            mode: ThresholdMode::Fixed,
        }
    }
}

/// Output level for one pixel's luminance
pub fn binarize(gray: f32, threshold: f32, intensity: f32, invert: bool) -> u8 {
    let binary: f32 = if gray > threshold { 255.0 } else { 0.0 };
    let binary = if invert { 255.0 - binary } else { binary };
    to_channel(binary * intensity)
}

/// Binarize `image` against its luminance, preserving alpha
///
/// # Errors
///
/// Returns an error if the input buffer is malformed or the output cannot be
/// allocated
pub fn process(image: &RasterImage, params: &ThresholdParams) -> Result<RasterImage> {
    image.validate()?;
    let intensity = unit_interval("intensity", params.intensity, DEFAULT_INTENSITY);
    let threshold = match params.mode {
        ThresholdMode::Fixed => clamp_parameter(
            "threshold",
            params.threshold,
            0.0,
            255.0,
            DEFAULT_BINARY_THRESHOLD,
        ),
        ThresholdMode::Otsu => {
            let level = otsu_threshold(&luminance_histogram(image));
            debug!("otsu cut level {level}");
            f32::from(level)
        }
    };

    let mut output = image.try_clone()?;
    for pixel in output.pixels_mut().chunks_exact_mut(CHANNELS) {
        let gray = luminance(pixel[0], pixel[1], pixel[2]);
        // Otsu levels are chosen over rounded luminance
        let gray = match params.mode {
            ThresholdMode::Fixed => gray,
            ThresholdMode::Otsu => f32::from(to_channel(gray)),
        };
        let level = binarize(gray, threshold, intensity, params.invert_colors);
        pixel[..3].fill(level);
    }
    Ok(output)
}
