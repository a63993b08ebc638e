//! Tests for the luminance threshold binarizer

#[cfg(test)]
mod tests {
    use condprep::filters::threshold::{ThresholdMode, ThresholdParams, binarize, process};
    use condprep::raster::RasterImage;

    fn params(threshold: f32, intensity: f32, invert_colors: bool) -> ThresholdParams {
        ThresholdParams {
            threshold,
            intensity,
            invert_colors,
            mode: ThresholdMode::Fixed,
        }
    }

    // Tests the documented example levels
    // Verified by comparing against 128 instead of the parameter
    #[test]
    fn test_example_levels() {
        let mut image = RasterImage::blank(2, 1).unwrap();
        image.set_pixel(0, 0, [200, 200, 200, 255]);
        image.set_pixel(1, 0, [50, 50, 50, 255]);

        let output = process(&image, &params(127.0, 1.0, false)).unwrap();
        assert_eq!(output.pixel(0, 0), Some([255, 255, 255, 255]));
        assert_eq!(output.pixel(1, 0), Some([0, 0, 0, 255]));
    }

    // Tests the comparison is strict
    // Verified by using >=
    #[test]
    fn test_strict_comparison() {
        assert_eq!(binarize(128.0, 128.0, 1.0, false), 0);
        assert_eq!(binarize(128.5, 128.0, 1.0, false), 255);
    }

    // Tests inversion happens before intensity scaling
    // Verified by scaling before inverting
    #[test]
    fn test_invert_then_scale() {
        assert_eq!(binarize(10.0, 128.0, 1.0, true), 255);
        assert_eq!(binarize(200.0, 128.0, 1.0, true), 0);
        assert_eq!(binarize(10.0, 128.0, 0.5, true), 128);
        assert_eq!(binarize(200.0, 128.0, 0.5, false), 128);
    }

    // Tests alpha is untouched
    // Verified by forcing alpha to 255
    #[test]
    fn test_alpha_preserved() {
        let image = RasterImage::filled(3, 3, [250, 250, 250, 17]).unwrap();
        let output = process(&image, &ThresholdParams::default()).unwrap();
        assert!(output.pixels().chunks_exact(4).all(|p| p == [255, 255, 255, 17]));
    }

    // Tests a second pass at full intensity changes nothing
    // Verified by inverting on every pass
    #[test]
    fn test_idempotent() {
        let mut image = RasterImage::blank(4, 4).unwrap();
        for y in 0..4 {
            for x in 0..4 {
                let v = (x * 60 + y * 5) as u8;
                image.set_pixel(x, y, [v, v / 2, 255 - v, 255]);
            }
        }
        let settings = params(100.0, 1.0, false);
        let once = process(&image, &settings).unwrap();
        let twice = process(&once, &settings).unwrap();
        assert_eq!(once, twice);
    }

    // Tests Otsu mode splits a two-tone image between its levels
    // Verified by keeping the fixed threshold of 128
    #[test]
    fn test_otsu_split() {
        let mut image = RasterImage::filled(4, 1, [20, 20, 20, 255]).unwrap();
        image.set_pixel(2, 0, [90, 90, 90, 255]);
        image.set_pixel(3, 0, [90, 90, 90, 255]);
        let settings = ThresholdParams {
            mode: ThresholdMode::Otsu,
            ..params(250.0, 1.0, false)
        };

        let output = process(&image, &settings).unwrap();
        assert_eq!(output.pixel(0, 0), Some([0, 0, 0, 255]));
        assert_eq!(output.pixel(2, 0), Some([255, 255, 255, 255]));

        let fixed = process(&image, &params(128.0, 1.0, false)).unwrap();
        assert_eq!(fixed.pixel(2, 0), Some([0, 0, 0, 255]));
    }

    // Tests Otsu on a flat image turns every pixel white above level zero
    // Verified by treating a flat histogram as a split at its only level
    #[test]
    fn test_otsu_flat() {
        let image = RasterImage::filled(3, 3, [60, 60, 60, 255]).unwrap();
        let settings = ThresholdParams {
            mode: ThresholdMode::Otsu,
            ..ThresholdParams::default()
        };
        let output = process(&image, &settings).unwrap();
        assert!(output.pixels().chunks_exact(4).all(|p| p == [255, 255, 255, 255]));
    }
}
