//! Partial Fisher-Yates tile shuffle
//!
//! Walks the tile list backwards, drawing a partner `j` in `[0, i]` for each
//! index and swapping only with probability `intensity`. At intensity 1 this
//! is the standard Fisher-Yates shuffle, at 0 the identity; in between the
//! permutation is not uniform.
//!
//! Tiles are written back into grid slots by content. Clipped edge tiles can
//! land in full-size slots (and the reverse), so only the overlapping region
//! is copied and the output starts as a copy of the input.

use crate::io::configuration::{DEFAULT_INTENSITY, DEFAULT_SHUFFLE_TILE_SIZE};
use crate::io::error::Result;
use crate::math::blend::unit_interval;
use crate::raster::RasterImage;
use crate::raster::tiles::{Tile, extract_all, partition};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Tile shuffle parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShuffleParams {
    /// Tile edge length in pixels (at least 1)
    pub tile_size: u32,
    /// Probability of performing each candidate swap (0-1)
    pub intensity: f32,
}

impl Default for ShuffleParams {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_SHUFFLE_TILE_SIZE,
            intensity: DEFAULT_INTENSITY,
        }
    }
}

/// Reorder `tiles` in place with the biased backward swap pass
///
/// Every index draws its partner before the swap decision, so the number of
/// random draws is independent of `intensity`.
pub fn partial_fisher_yates<T, R: Rng + ?Sized>(tiles: &mut [T], intensity: f32, rng: &mut R) {
    let probability = f64::from(intensity);
    for i in (1..tiles.len()).rev() {
        let j = rng.random_range(0..=i);
        if rng.random::<f64>() < probability {
            tiles.swap(i, j);
        }
    }
}

/// Shuffle the tiles of `image` using the supplied random source
///
/// # Errors
///
/// Returns an error if the input buffer is malformed, `tile_size` is zero, or
/// the output cannot be allocated
pub fn process<R: Rng + ?Sized>(
    image: &RasterImage,
    params: &ShuffleParams,
    rng: &mut R,
) -> Result<RasterImage> {
    image.validate()?;
    let intensity = unit_interval("intensity", params.intensity, DEFAULT_INTENSITY);
    let grid = partition(image.width(), image.height(), params.tile_size)?;

    let mut tiles: Vec<Tile> = extract_all(image, &grid);
    partial_fisher_yates(&mut tiles, intensity, rng);

    let mut output = image.try_clone()?;
    let mut moved = 0;
    for (slot, tile) in grid.rects.iter().zip(&tiles) {
        if tile.rect != *slot {
            moved += 1;
        }
        tile.write_into(&mut output, *slot);
    }

    debug!(
        "shuffled {}x{} grid of {} tiles, {moved} relocated",
        grid.columns,
        grid.rows,
        grid.len()
    );
    Ok(output)
}

/// Shuffle with a [`StdRng`] seeded from `seed`
///
/// # Errors
///
/// Same conditions as [`process`]
pub fn process_seeded(image: &RasterImage, params: &ShuffleParams, seed: u64) -> Result<RasterImage> {
    let mut rng = StdRng::seed_from_u64(seed);
    process(image, params, &mut rng)
}
