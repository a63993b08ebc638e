//! Mean-blend pixelation
//!
//! Each tile's colour channels are pulled toward the tile mean by
//! `intensity`. Alpha is passed through from the source pixel.

use crate::io::configuration::{CHANNELS, DEFAULT_INTENSITY, DEFAULT_RESAMPLE_TILE_SIZE};
use crate::io::error::Result;
use crate::math::blend::{lerp, to_channel, unit_interval};
use crate::raster::RasterImage;
use crate::raster::tiles::{Tile, partition};
use log::debug;

/// Tile resampler parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileResampleParams {
    /// Tile edge length in pixels (at least 1)
    pub tile_size: u32,
    /// Blend weight of the tile mean (0-1)
    pub intensity: f32,
}

impl Default for TileResampleParams {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_RESAMPLE_TILE_SIZE,
            intensity: DEFAULT_INTENSITY,
        }
    }
}

/// Arithmetic mean of R, G, B and A over a tile
pub fn tile_mean(tile: &Tile) -> [f32; 4] {
    let mut sums = [0u64; 4];
    let mut count = 0u64;
    for pixel in tile.pixel_chunks() {
        for (sum, &channel) in sums.iter_mut().zip(pixel) {
            *sum += u64::from(channel);
        }
        count += 1;
    }

    if count == 0 {
        return [0.0; 4];
    }
    sums.map(|sum| sum as f32 / count as f32)
}

/// Blend every tile of `image` toward its mean colour
///
/// # Errors
///
/// Returns an error if the input buffer is malformed, `tile_size` is zero, or
/// the output cannot be allocated
pub fn process(image: &RasterImage, params: &TileResampleParams) -> Result<RasterImage> {
    image.validate()?;
    let intensity = unit_interval("intensity", params.intensity, DEFAULT_INTENSITY);
    let grid = partition(image.width(), image.height(), params.tile_size)?;
    let mut output = image.try_clone()?;

    for &rect in &grid.rects {
        let mut tile = Tile::extract(image, rect);
        let mean = tile_mean(&tile);
        for pixel in tile.pixels.chunks_exact_mut(CHANNELS) {
            for (channel, &target) in pixel.iter_mut().zip(&mean).take(3) {
                *channel = to_channel(lerp(f32::from(*channel), target, intensity));
            }
        }
        tile.write_into(&mut output, rect);
    }

    debug!(
        "resampled {} tiles of size {} at intensity {intensity}",
        grid.len(),
        params.tile_size
    );
    Ok(output)
}
