//! Tests for the difference-of-Gaussians scribble map

#[cfg(test)]
mod tests {
    use condprep::filters::scribble::{ScribbleParams, process};
    use condprep::raster::RasterImage;

    fn dark_column(level: u8) -> RasterImage {
        let mut image = RasterImage::filled(15, 15, [255, 255, 255, 255]).unwrap();
        for y in 0..15 {
            image.set_pixel(7, y, [level, level, level, 255]);
        }
        image
    }

    // Tests a dark stroke becomes the only white column
    // Verified by flipping the sign of the Gaussian difference
    #[test]
    fn test_dark_stroke() {
        let output = process(&dark_column(0), &ScribbleParams::default()).unwrap();
        for y in 0..15 {
            assert_eq!(output.pixel(7, y), Some([255, 255, 255, 255]));
            assert_eq!(output.pixel(6, y), Some([0, 0, 0, 255]));
            assert_eq!(output.pixel(0, y), Some([0, 0, 0, 255]));
        }
    }

    // Tests the threshold decides whether a faint stroke survives
    // Verified by comparing the undoubled difference
    #[test]
    fn test_threshold() {
        let image = dark_column(200);
        let kept = process(&image, &ScribbleParams { threshold: 32.0 }).unwrap();
        assert_eq!(kept.pixel(7, 7), Some([255, 255, 255, 255]));

        let dropped = process(&image, &ScribbleParams { threshold: 100.0 }).unwrap();
        assert_eq!(dropped.pixel(7, 7), Some([0, 0, 0, 255]));
    }

    // Tests a flat image has no strokes
    // Verified by using >= against a zero threshold
    #[test]
    fn test_flat_image() {
        let image = RasterImage::filled(8, 8, [33, 33, 33, 255]).unwrap();
        let output = process(&image, &ScribbleParams { threshold: 0.0 }).unwrap();
        assert!(output.pixels().chunks_exact(4).all(|p| p == [0, 0, 0, 255]));
    }

    // Tests threshold clamping
    // Verified by passing negative thresholds through
    #[test]
    fn test_normalized() {
        let params = ScribbleParams { threshold: -5.0 }.normalized();
        assert!(params.threshold.abs() < f32::EPSILON);
    }
}
