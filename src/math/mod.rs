//! Numeric utilities shared by the processors

/// Interpolation, byte conversion and parameter clamping
pub mod blend;
/// 3x3 kernels and separable Gaussian smoothing
pub mod convolution;
/// Median and Otsu histogram thresholds
pub mod statistics;
