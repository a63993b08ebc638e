//! Inpainting guide overlay
//!
//! Composes a darkened copy of the source with a fixed 32 px grid, a central
//! circular mask indicator and a caption. Purely presentational: nothing here
//! depends on image content.

use crate::io::configuration::{
    DEFAULT_INTENSITY, FONT_SCALE, GUIDE_GRID_ALPHA, GUIDE_GRID_SPACING, GUIDE_LABEL,
    GUIDE_MASK_ALPHA, GUIDE_MASK_RADIUS_FRACTION, GUIDE_WASH_OPACITY,
};
use crate::io::error::Result;
use crate::math::blend::unit_interval;
use crate::raster::RasterImage;
use crate::render::canvas::{BLACK, WHITE, draw_grid, fill_circle, wash};
use crate::render::font::{GLYPH_HEIGHT, draw_text, text_width};

/// Guide overlay parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InpaintGuideParams {
    /// Scales grid and mask opacity (0-1)
    pub intensity: f32,
}

impl Default for InpaintGuideParams {
    fn default() -> Self {
        Self {
            intensity: DEFAULT_INTENSITY,
        }
    }
}

/// Radius of the mask indicator for a `width x height` image
pub fn mask_radius(width: u32, height: u32) -> f32 {
    width.min(height) as f32 * GUIDE_MASK_RADIUS_FRACTION
}

/// Render the guide overlay for `image`
///
/// # Errors
///
/// Returns an error if the input buffer is malformed or the output cannot be
/// allocated
pub fn process(image: &RasterImage, params: &InpaintGuideParams) -> Result<RasterImage> {
    image.validate()?;
    let intensity = unit_interval("intensity", params.intensity, DEFAULT_INTENSITY);
    let (width, height) = (image.width(), image.height());

    let mut output = image.try_clone()?;
    wash(&mut output, BLACK, GUIDE_WASH_OPACITY);
    draw_grid(
        &mut output,
        GUIDE_GRID_SPACING,
        WHITE,
        GUIDE_GRID_ALPHA * intensity,
    );

    let center = (width as f32 / 2.0, height as f32 / 2.0);
    let radius = mask_radius(width, height);
    fill_circle(
        &mut output,
        center,
        radius,
        WHITE,
        GUIDE_MASK_ALPHA * intensity,
    );

    // Caption sits centred just below the mask
    let label_x = i64::from(width / 2) - i64::from(text_width(GUIDE_LABEL, FONT_SCALE) / 2);
    let label_y = (center.1 + radius) as i64 + i64::from(GLYPH_HEIGHT);
    draw_text(
        &mut output,
        label_x,
        label_y,
        GUIDE_LABEL,
        WHITE,
        FONT_SCALE,
    );

    Ok(output)
}
