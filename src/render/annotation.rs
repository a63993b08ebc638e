//! Provenance box listing the algorithm and its parameters

use crate::io::configuration::{
    ANNOTATION_BACKDROP_ALPHA, ANNOTATION_LINE_HEIGHT, ANNOTATION_MARGIN, ANNOTATION_PADDING,
    FONT_SCALE,
};
use crate::io::error::Result;
use crate::raster::RasterImage;
use crate::render::canvas::{BLACK, WHITE, fill_rect};
use crate::render::font::{GLYPH_HEIGHT, draw_text, text_width};

/// Size of the annotation box for `parameter_count` parameters
///
/// Height is `parameter_count * 20 + 40`; width fits the longest line plus
/// margins. Neither side is clipped here.
pub fn box_size(title: &str, parameters: &[(&str, String)]) -> (u32, u32) {
    let longest = parameters
        .iter()
        .map(|(name, value)| text_width(&format!("{name}: {value}"), FONT_SCALE))
        .chain(std::iter::once(text_width(title, FONT_SCALE)))
        .max()
        .unwrap_or(0);

    (
        longest + 2 * ANNOTATION_MARGIN,
        parameters.len() as u32 * ANNOTATION_LINE_HEIGHT + ANNOTATION_PADDING,
    )
}

/// Return a copy of `image` with the annotation box stamped top-left
///
/// # Errors
///
/// Returns an error if the output buffer cannot be allocated
pub fn annotate(
    image: &RasterImage,
    title: &str,
    parameters: &[(&str, String)],
) -> Result<RasterImage> {
    let mut output = image.try_clone()?;
    let (width, height) = box_size(title, parameters);
    fill_rect(
        &mut output,
        0,
        0,
        width,
        height,
        BLACK,
        ANNOTATION_BACKDROP_ALPHA,
    );

    // Centre glyphs vertically inside each line slot
    let inset = (ANNOTATION_LINE_HEIGHT - GLYPH_HEIGHT * FONT_SCALE) / 2;
    let margin = i64::from(ANNOTATION_MARGIN);
    draw_text(
        &mut output,
        margin,
        margin + i64::from(inset),
        title,
        WHITE,
        FONT_SCALE,
    );

    for (line, (name, value)) in parameters.iter().enumerate() {
        let top = margin + i64::from(ANNOTATION_LINE_HEIGHT) * (line as i64 + 1);
        draw_text(
            &mut output,
            margin,
            top + i64::from(inset),
            &format!("{name}: {value}"),
            WHITE,
            FONT_SCALE,
        );
    }

    Ok(output)
}
