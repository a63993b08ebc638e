//! Tests for grid partitioning, tile extraction and slot writes

#[cfg(test)]
mod tests {
    use condprep::PreprocessError;
    use condprep::raster::tiles::{Tile, TileRect, extract_all, partition};
    use condprep::raster::RasterImage;

    fn gradient_image(width: u32, height: u32) -> RasterImage {
        let mut image = RasterImage::blank(width, height).unwrap();
        for y in 0..height {
            for x in 0..width {
                image.set_pixel(x, y, [x as u8, y as u8, (x + y) as u8, 255]);
            }
        }
        image
    }

    // Tests exact division produces uniform tiles
    // Verified by using floor instead of ceil
    #[test]
    fn test_partition_exact() {
        let grid = partition(8, 4, 4).unwrap();
        assert_eq!((grid.columns, grid.rows), (2, 1));
        assert_eq!(grid.len(), 2);
        assert!(grid.rects.iter().all(|r| r.width == 4 && r.height == 4));
    }

    // Tests edge tiles are clipped, not padded
    // Verified by padding edge tiles to full size
    #[test]
    fn test_partition_clips_edges() {
        let grid = partition(5, 3, 2).unwrap();
        assert_eq!((grid.columns, grid.rows), (3, 2));

        let last = grid.rects.last().unwrap();
        assert_eq!(
            *last,
            TileRect {
                origin_x: 4,
                origin_y: 2,
                width: 1,
                height: 1
            }
        );
        let area: usize = grid.rects.iter().map(TileRect::area).sum();
        assert_eq!(area, 15);
    }

    // Tests tiles are ordered left-to-right then top-to-bottom
    // Verified by iterating columns in the outer loop
    #[test]
    fn test_partition_order() {
        let grid = partition(4, 4, 2).unwrap();
        let origins: Vec<(u32, u32)> = grid
            .rects
            .iter()
            .map(|r| (r.origin_x, r.origin_y))
            .collect();
        assert_eq!(origins, vec![(0, 0), (2, 0), (0, 2), (2, 2)]);
    }

    // Tests a tile at least as large as the image yields one tile
    // Verified by always creating two columns
    #[test]
    fn test_partition_single_tile() {
        let grid = partition(7, 5, 7).unwrap();
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.rects[0].width, 7);
        assert_eq!(grid.rects[0].height, 5);
        assert!(!grid.is_empty());
    }

    // Tests zero tile size is a contract violation
    // Verified by treating zero as one
    #[test]
    fn test_partition_rejects_zero() {
        assert!(matches!(
            partition(4, 4, 0),
            Err(PreprocessError::InvalidParameter {
                parameter: "tile_size",
                ..
            })
        ));
    }

    // Tests extraction copies the right pixels row by row
    // Verified by ignoring origin_y
    #[test]
    fn test_extract() {
        let image = gradient_image(4, 4);
        let rect = TileRect {
            origin_x: 2,
            origin_y: 1,
            width: 2,
            height: 2,
        };
        let tile = Tile::extract(&image, rect);

        assert_eq!(tile.pixels.len(), 16);
        let first: Vec<&[u8]> = tile.pixel_chunks().take(3).collect();
        assert_eq!(first[0], [2, 1, 3, 255]);
        assert_eq!(first[1], [3, 1, 4, 255]);
        assert_eq!(first[2], [2, 2, 4, 255]);
    }

    // Tests writing a clipped tile into a larger slot copies only the overlap
    // Verified by copying the full slot size
    #[test]
    fn test_write_into_overlap_only() {
        let source = gradient_image(3, 3);
        let small = Tile::extract(
            &source,
            TileRect {
                origin_x: 2,
                origin_y: 2,
                width: 1,
                height: 1,
            },
        );

        let mut target = RasterImage::filled(3, 3, [9, 9, 9, 9]).unwrap();
        small.write_into(
            &mut target,
            TileRect {
                origin_x: 0,
                origin_y: 0,
                width: 2,
                height: 2,
            },
        );

        assert_eq!(target.pixel(0, 0), Some([2, 2, 4, 255]));
        assert_eq!(target.pixel(1, 0), Some([9, 9, 9, 9]));
        assert_eq!(target.pixel(0, 1), Some([9, 9, 9, 9]));
    }

    // Tests extracting then writing every tile reproduces the image
    // Verified by skipping the last row of each tile
    #[test]
    fn test_extract_all_round_trip() {
        let image = gradient_image(5, 3);
        let grid = partition(5, 3, 2).unwrap();
        let tiles = extract_all(&image, &grid);

        let mut rebuilt = image.blank_like().unwrap();
        for (tile, slot) in tiles.iter().zip(&grid.rects) {
            tile.write_into(&mut rebuilt, *slot);
        }
        assert_eq!(rebuilt, image);
    }
}
