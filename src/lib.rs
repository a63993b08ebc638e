//! Pixel-buffer preprocessing for image-conditioning maps
//!
//! Converts RGBA8 photographs into structural maps (edges, traced lines,
//! tile abstractions, thresholds, depth-like maps) of the same size. Every
//! filter is a pure function over an owned buffer; only the tile shuffle
//! draws from a caller-supplied random source.

#![forbid(unsafe_code)]

/// Grayscale, gradient, edge classification and line tracing
pub mod analysis;
/// Conditioning filters and their dispatch
pub mod filters;
/// Input/output operations and error handling
pub mod io;
/// Blending, rounding and convolution helpers
pub mod math;
/// Pixel buffers, tiles and visitation flags
pub mod raster;
/// Drawing primitives for overlays and annotations
pub mod render;

pub use io::error::{PreprocessError, Result};
