//! BT.601 luminance extraction

use crate::io::configuration::{CHANNELS, LUMA_B, LUMA_G, LUMA_R};
use crate::raster::RasterImage;
use ndarray::Array2;

/// Luminance of one RGB triple, alpha ignored
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f32 {
    LUMA_R.mul_add(
        f32::from(r),
        LUMA_G.mul_add(f32::from(g), LUMA_B * f32::from(b)),
    )
}

/// Per-pixel luminance plane indexed `(y, x)`
pub fn grayscale(image: &RasterImage) -> Array2<f32> {
    let values: Vec<f32> = image
        .pixels()
        .chunks_exact(CHANNELS)
        .map(|pixel| luminance(pixel[0], pixel[1], pixel[2]))
        .collect();

    let shape = (image.height() as usize, image.width() as usize);
    Array2::from_shape_vec(shape, values)
        .unwrap_or_else(|_shape_error| Array2::zeros(shape))
}
