//! Conditioning filters
//!
//! Every filter maps `(&RasterImage, &Params)` to a new image of the same
//! size. Inputs are never mutated.

/// Edge map post-processing
pub mod adjust;
/// Canny-style double-threshold edge map
pub mod canny;
/// Brightness-as-depth fallback
pub mod depth;
/// Inpainting guide overlay
pub mod inpaint_guide;
/// Absolute Laplacian map
pub mod laplacian;
/// Gaussian-residual lineart map
pub mod lineart;
/// Traced line segment map
pub mod mlsd;
/// Gradient normal map
pub mod normal;
/// Filter dispatch
pub mod preprocessor;
/// Colour tint over a gray level
pub mod recolor;
/// Difference-of-Gaussians scribble map
pub mod scribble;
/// Partial Fisher-Yates tile shuffle
pub mod shuffle;
/// Sobel magnitude map
pub mod sobel;
/// Luminance threshold binarizer
pub mod threshold;
/// Tile mean-blend pixelation
pub mod tile_resample;

pub use preprocessor::{FilterKind, Preprocessor};
