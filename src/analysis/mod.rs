//! Numeric analysis of luminance: gradients, edge levels and traced lines

/// Double-threshold edge classification
pub mod edges;
/// Sobel gradient field computation
pub mod gradient;
/// BT.601 luminance extraction
pub mod grayscale;
/// Greedy gradient-following line tracer
pub mod lines;

pub use edges::{EdgeMap, EdgeStrategy};
pub use gradient::{GradientField, GradientNorm};
pub use lines::LineSegment;
