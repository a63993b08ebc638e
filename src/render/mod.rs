//! Overlay rendering for guide images and annotations

/// Provenance annotation box
pub mod annotation;
/// Clipped drawing primitives with alpha blending
pub mod canvas;
/// 5x7 bitmap font
pub mod font;
