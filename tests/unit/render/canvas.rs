//! Tests for clipped drawing primitives and alpha blending

#[cfg(test)]
mod tests {
    use condprep::raster::RasterImage;
    use condprep::render::canvas::{
        BLACK, WHITE, blend_pixel, draw_grid, draw_line, fill_circle, fill_rect, put_pixel, wash,
    };

    fn lit(image: &RasterImage) -> Vec<(u32, u32)> {
        let mut points = Vec::new();
        for y in 0..image.height() {
            for x in 0..image.width() {
                if image.pixel(x, y).is_some_and(|p| p[0] > 0) {
                    points.push((x, y));
                }
            }
        }
        points
    }

    // Tests source-over blending of colour and alpha
    // Verified by leaving destination alpha untouched
    #[test]
    fn test_blend_pixel() {
        let mut image = RasterImage::filled(2, 1, [0, 0, 0, 255]).unwrap();
        image.set_pixel(1, 0, [0, 0, 0, 0]);

        blend_pixel(&mut image, 0, 0, WHITE, 0.5);
        blend_pixel(&mut image, 1, 0, WHITE, 0.5);

        assert_eq!(image.pixel(0, 0), Some([128, 128, 128, 255]));
        assert_eq!(image.pixel(1, 0), Some([128, 128, 128, 128]));
    }

    // Tests out-of-range coordinates are ignored
    // Verified by wrapping negative coordinates
    #[test]
    fn test_clipping() {
        let mut image = RasterImage::blank(2, 2).unwrap();
        blend_pixel(&mut image, -1, 0, WHITE, 1.0);
        put_pixel(&mut image, 0, 5, WHITE);
        assert!(lit(&image).is_empty());

        fill_rect(&mut image, -1, -1, 2, 2, WHITE, 1.0);
        assert_eq!(lit(&image), vec![(0, 0)]);
    }

    // Tests Bresenham lines include both endpoints in either direction
    // Verified by stopping one pixel early
    #[test]
    fn test_draw_line() {
        let mut forward = RasterImage::filled(5, 5, [0, 0, 0, 255]).unwrap();
        draw_line(&mut forward, (0, 0), (3, 3), WHITE);
        assert_eq!(lit(&forward), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);

        let mut backward = RasterImage::filled(5, 5, [0, 0, 0, 255]).unwrap();
        draw_line(&mut backward, (4, 1), (0, 1), WHITE);
        assert_eq!(lit(&backward).len(), 5);

        let mut point = RasterImage::filled(3, 3, [0, 0, 0, 255]).unwrap();
        draw_line(&mut point, (1, 1), (1, 1), WHITE);
        assert_eq!(lit(&point), vec![(1, 1)]);
    }

    // Tests disc coverage by pixel centre
    // Verified by testing pixel corners instead of centres
    #[test]
    fn test_fill_circle() {
        let mut image = RasterImage::filled(5, 5, [0, 0, 0, 255]).unwrap();
        fill_circle(&mut image, (2.5, 2.5), 1.0, WHITE, 1.0);
        assert_eq!(lit(&image), vec![(2, 1), (1, 2), (2, 2), (3, 2), (2, 3)]);

        let mut untouched = RasterImage::filled(3, 3, [0, 0, 0, 255]).unwrap();
        fill_circle(&mut untouched, (1.5, 1.5), 0.0, WHITE, 1.0);
        assert!(lit(&untouched).is_empty());
    }

    // Tests grid lines land on multiples of the spacing
    // Verified by blending intersections twice
    #[test]
    fn test_draw_grid() {
        let mut image = RasterImage::filled(4, 4, [0, 0, 0, 255]).unwrap();
        draw_grid(&mut image, 2, WHITE, 0.5);

        assert_eq!(lit(&image).len(), 12);
        assert_eq!(image.pixel(0, 0), Some([128, 128, 128, 255]));
        assert_eq!(image.pixel(1, 1), Some([0, 0, 0, 255]));

        let before = image.clone();
        draw_grid(&mut image, 0, WHITE, 1.0);
        assert_eq!(image, before);
    }

    // Tests washing covers every pixel
    // Verified by skipping the last row
    #[test]
    fn test_wash() {
        let mut image = RasterImage::filled(3, 2, [200, 200, 200, 255]).unwrap();
        wash(&mut image, BLACK, 1.0);
        assert!(image.pixels().chunks_exact(4).all(|p| p == [0, 0, 0, 255]));
    }
}
