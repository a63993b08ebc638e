//! Raster data structures
//!
//! This module contains the pixel containers every processor works on:
//! - The canonical RGBA8 image buffer
//! - Tile partitioning and owned tile copies
//! - Scoped visitation flags for line tracing

/// RGBA8 image buffer with enforced length invariant
pub mod buffer;
/// Tile grid partitioning and tile pixel copies
pub mod tiles;
/// Per-call visited-pixel bitset
pub mod visited;

pub use buffer::RasterImage;
pub use tiles::{Tile, TileGrid, TileRect};
pub use visited::VisitedSet;
