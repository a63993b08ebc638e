//! Post-processing shared by edge-style maps: widen, tone, invert
//!
//! Dilation uses an `edge_width x edge_width` box anchored at
//! `edge_width / 2`, applied per colour channel. Tone adjustment truncates
//! rather than rounds, and is skipped entirely at neutral settings.

use crate::io::configuration::{CHANNELS, MAX_EDGE_WIDTH};
use crate::io::error::Result;
use crate::math::blend::clamp_parameter;
use crate::raster::RasterImage;

/// Edge map post-processing parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeAdjustments {
    /// Dilation box size in pixels (1-5); 1 leaves the map untouched
    pub edge_width: u32,
    /// Offset added after contrast, in units of full scale (-0.5 to 0.5)
    pub brightness: f32,
    /// Multiplier applied to normalised levels (0.5-2.0)
    pub contrast: f32,
    /// Output `255 - value` as the last step
    pub invert: bool,
}

impl Default for EdgeAdjustments {
    fn default() -> Self {
        Self {
            edge_width: 1,
            brightness: 0.0,
            contrast: 1.0,
            invert: false,
        }
    }
}

impl EdgeAdjustments {
    /// Copy with every field clamped into its documented range
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            edge_width: self.edge_width.clamp(1, MAX_EDGE_WIDTH),
            brightness: clamp_parameter("brightness", self.brightness, -0.5, 0.5, 0.0),
            contrast: clamp_parameter("contrast", self.contrast, 0.5, 2.0, 1.0),
            invert: self.invert,
        }
    }

    /// True when applying these settings would not change any pixel
    pub fn is_neutral(&self) -> bool {
        let normalized = self.normalized();
        normalized.edge_width == 1
            && normalized.brightness.abs() <= f32::EPSILON
            && (normalized.contrast - 1.0).abs() <= f32::EPSILON
            && !normalized.invert
    }
}

// Per-channel maximum over the dilation box
fn dilate(image: &RasterImage, edge_width: u32) -> Result<RasterImage> {
    let mut output = image.try_clone()?;
    let anchor = i64::from(edge_width / 2);
    let reach = i64::from(edge_width) - 1 - anchor;
    let (width, height) = (i64::from(image.width()), i64::from(image.height()));

    for y in 0..height {
        for x in 0..width {
            let mut peak = [0u8; 3];
            for sy in (y - anchor).max(0)..=(y + reach).min(height - 1) {
                for sx in (x - anchor).max(0)..=(x + reach).min(width - 1) {
                    if let Some(sample) = image.pixel(sx as u32, sy as u32) {
                        for (p, &s) in peak.iter_mut().zip(&sample) {
                            *p = (*p).max(s);
                        }
                    }
                }
            }
            let offset = output.offset(x as u32, y as u32);
            output.pixels_mut()[offset..offset + 3].copy_from_slice(&peak);
        }
    }
    Ok(output)
}

/// Apply dilation, tone and inversion to `image`, preserving alpha
///
/// # Errors
///
/// Returns an error if the input buffer is malformed or the output cannot be
/// allocated
pub fn process(image: &RasterImage, adjustments: &EdgeAdjustments) -> Result<RasterImage> {
    image.validate()?;
    let adjustments = adjustments.normalized();

    let mut output = if adjustments.edge_width > 1 {
        dilate(image, adjustments.edge_width)?
    } else {
        image.try_clone()?
    };

    let tone = adjustments.brightness.abs() > f32::EPSILON
        || (adjustments.contrast - 1.0).abs() > f32::EPSILON;
    for pixel in output.pixels_mut().chunks_exact_mut(CHANNELS) {
        for channel in &mut pixel[..3] {
            if tone {
                let level = (f32::from(*channel) / 255.0)
                    .mul_add(adjustments.contrast, adjustments.brightness)
                    .clamp(0.0, 1.0);
                *channel = (level * 255.0) as u8;
            }
            if adjustments.invert {
                *channel = 255 - *channel;
            }
        }
    }
    Ok(output)
}
