//! Grayscale tinted toward a target colour

use crate::analysis::grayscale::luminance;
use crate::io::configuration::CHANNELS;
use crate::io::error::{Result, invalid_parameter};
use crate::math::blend::to_channel;
use crate::raster::RasterImage;
use clap::ValueEnum;

/// Source of the gray level that scales the target colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RecolorMethod {
    /// Rounded BT.601 luminance
    #[default]
    Luminance,
    /// Truncated mean of the three channels
    Intensity,
}

/// Recolor parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecolorParams {
    /// Gray level source
    pub method: RecolorMethod,
    /// Colour that full white maps to
    pub color: [u8; 3],
}

impl Default for RecolorParams {
    fn default() -> Self {
        Self {
            method: RecolorMethod::Luminance,
            color: [255; 3],
        }
    }
}

/// Parse `RRGGBB` or `#RRGGBB` hex
///
/// # Errors
///
/// Returns an error unless the text is six hex digits after an optional `#`
pub fn parse_color(text: &str) -> Result<[u8; 3]> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    let malformed = || invalid_parameter("color", &text, &"expected RRGGBB hex");
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(malformed());
    }

    let mut color = [0_u8; 3];
    for (index, channel) in color.iter_mut().enumerate() {
        let pair = &digits[index * 2..index * 2 + 2];
        *channel = u8::from_str_radix(pair, 16).map_err(|_parse_error| malformed())?;
    }
    Ok(color)
}

/// Scale `color` by a gray level, flooring like integer division
pub fn tint(level: u8, color: [u8; 3]) -> [u8; 3] {
    color.map(|c| ((u16::from(level) * u16::from(c)) / 255) as u8)
}

/// Tint every pixel of `image`, preserving alpha
///
/// # Errors
///
/// Returns an error if the input buffer is malformed or the output cannot be
/// allocated
pub fn process(image: &RasterImage, params: &RecolorParams) -> Result<RasterImage> {
    image.validate()?;
    let mut output = image.try_clone()?;

    for pixel in output.pixels_mut().chunks_exact_mut(CHANNELS) {
        let level = match params.method {
            RecolorMethod::Luminance => to_channel(luminance(pixel[0], pixel[1], pixel[2])),
            RecolorMethod::Intensity => {
                ((u16::from(pixel[0]) + u16::from(pixel[1]) + u16::from(pixel[2])) / 3) as u8
            }
        };
        pixel[..3].copy_from_slice(&tint(level, params.color));
    }
    Ok(output)
}
