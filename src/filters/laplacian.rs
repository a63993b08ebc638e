//! Absolute Laplacian response map

use crate::analysis::grayscale::grayscale;
use crate::filters::sobel::ResponseParams;
use crate::io::error::Result;
use crate::math::convolution::{LAPLACIAN, convolve3};
use crate::raster::RasterImage;

/// Laplacian map parameters
pub type LaplacianParams = ResponseParams;

/// Render `|laplacian| * scale + delta` as opaque grayscale
///
/// The outermost pixel ring has no full neighbourhood and renders at `delta`.
///
/// # Errors
///
/// Returns an error if the input buffer is malformed or the output cannot be
/// allocated
pub fn process(image: &RasterImage, params: &LaplacianParams) -> Result<RasterImage> {
    image.validate()?;
    let params = params.normalized();
    let response = convolve3(&grayscale(image), &LAPLACIAN);

    let mut output = image.blank_like()?;
    output.fill_gray(response.iter().map(|&r| params.level(r.abs())), Some(255));
    Ok(output)
}
