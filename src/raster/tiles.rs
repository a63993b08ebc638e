//! Grid decomposition of a raster into owned tiles
//!
//! Tiles cover the image left-to-right, top-to-bottom. Tiles touching the
//! right or bottom edge are clipped to the remaining extent; nothing is padded
//! or dropped. Each [`Tile`] owns a copy of its pixels, so relocating tiles
//! never aliases the source buffer.

use crate::io::configuration::CHANNELS;
use crate::io::error::{Result, invalid_parameter};
use crate::raster::RasterImage;

/// Axis-aligned tile footprint in image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRect {
    /// Left edge (inclusive)
    pub origin_x: u32,
    /// Top edge (inclusive)
    pub origin_y: u32,
    /// Width in pixels, at most the configured tile size
    pub width: u32,
    /// Height in pixels, at most the configured tile size
    pub height: u32,
}

impl TileRect {
    /// Number of pixels covered
    pub const fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Row-major list of tile footprints with the grid shape that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    /// Tiles per row
    pub columns: u32,
    /// Tiles per column
    pub rows: u32,
    /// Footprints in left-to-right, top-to-bottom order
    pub rects: Vec<TileRect>,
}

impl TileGrid {
    /// Total number of tiles
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// True if the grid holds no tiles
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

/// Partition a `width x height` area into `tile_size` squares
///
/// # Errors
///
/// Returns an error if `tile_size` is zero
pub fn partition(width: u32, height: u32, tile_size: u32) -> Result<TileGrid> {
    if tile_size == 0 {
        return Err(invalid_parameter(
            "tile_size",
            &tile_size,
            &"tile size must be at least 1",
        ));
    }

    let columns = width.div_ceil(tile_size);
    let rows = height.div_ceil(tile_size);
    let mut rects = Vec::with_capacity(columns as usize * rows as usize);

    for row in 0..rows {
        let origin_y = row * tile_size;
        let tile_height = tile_size.min(height - origin_y);
        for column in 0..columns {
            let origin_x = column * tile_size;
            rects.push(TileRect {
                origin_x,
                origin_y,
                width: tile_size.min(width - origin_x),
                height: tile_height,
            });
        }
    }

    Ok(TileGrid {
        columns,
        rows,
        rects,
    })
}

/// Tile footprint plus an owned copy of its RGBA pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Where the pixels were taken from
    pub rect: TileRect,
    /// Row-major RGBA bytes, `rect.width * rect.height * 4` long
    pub pixels: Vec<u8>,
}

impl Tile {
    /// Copy the pixels under `rect` out of `image`
    ///
    /// The rectangle must lie inside the image, which holds for every rect
    /// produced by [`partition`] with the image's own dimensions.
    pub fn extract(image: &RasterImage, rect: TileRect) -> Self {
        let row_bytes = rect.width as usize * CHANNELS;
        let mut pixels = Vec::with_capacity(rect.area() * CHANNELS);

        for y in rect.origin_y..rect.origin_y + rect.height {
            let start = image.offset(rect.origin_x, y);
            if let Some(row) = image.pixels().get(start..start + row_bytes) {
                pixels.extend_from_slice(row);
            }
        }

        Self { rect, pixels }
    }

    /// Copy this tile's content into `slot` of `image`
    ///
    /// Only the overlapping `min(width) x min(height)` region is written;
    /// pixels of a larger slot outside that region keep their values.
    pub fn write_into(&self, image: &mut RasterImage, slot: TileRect) {
        let copy_width = self.rect.width.min(slot.width) as usize;
        let copy_height = self.rect.height.min(slot.height);
        let copy_bytes = copy_width * CHANNELS;
        let source_stride = self.rect.width as usize * CHANNELS;

        for dy in 0..copy_height {
            let source_start = dy as usize * source_stride;
            let target_start = image.offset(slot.origin_x, slot.origin_y + dy);
            let Some(source_row) = self.pixels.get(source_start..source_start + copy_bytes)
            else {
                continue;
            };
            if let Some(target_row) = image
                .pixels_mut()
                .get_mut(target_start..target_start + copy_bytes)
            {
                target_row.copy_from_slice(source_row);
            }
        }
    }

    /// Iterate over the tile's pixels as RGBA chunks
    pub fn pixel_chunks(&self) -> impl Iterator<Item = &[u8]> {
        self.pixels.chunks_exact(CHANNELS)
    }
}

/// Extract every tile of `grid` from `image`
pub fn extract_all(image: &RasterImage, grid: &TileGrid) -> Vec<Tile> {
    grid.rects
        .iter()
        .map(|&rect| Tile::extract(image, rect))
        .collect()
}
