//! Tests for edge map widening, tone and inversion

#[cfg(test)]
mod tests {
    use condprep::filters::adjust::{EdgeAdjustments, process};
    use condprep::raster::RasterImage;

    fn dot(size: u32, at: (u32, u32)) -> RasterImage {
        let mut image = RasterImage::filled(size, size, [0, 0, 0, 255]).unwrap();
        image.set_pixel(at.0, at.1, [255, 255, 255, 255]);
        image
    }

    fn white_count(image: &RasterImage) -> usize {
        image
            .pixels()
            .chunks_exact(4)
            .filter(|p| p[0] == 255)
            .count()
    }

    // Tests neutral settings return an identical image
    // Verified by always inverting
    #[test]
    fn test_neutral() {
        let image = dot(5, (2, 2));
        let adjustments = EdgeAdjustments::default();
        assert!(adjustments.is_neutral());
        assert_eq!(process(&image, &adjustments).unwrap(), image);
    }

    // Tests an odd width grows a dot symmetrically
    // Verified by anchoring the box at its corner
    #[test]
    fn test_dilate_odd() {
        let adjustments = EdgeAdjustments {
            edge_width: 3,
            ..EdgeAdjustments::default()
        };
        let output = process(&dot(7, (3, 3)), &adjustments).unwrap();

        assert_eq!(white_count(&output), 9);
        assert_eq!(output.pixel(2, 2), Some([255, 255, 255, 255]));
        assert_eq!(output.pixel(4, 4), Some([255, 255, 255, 255]));
        assert_eq!(output.pixel(5, 3), Some([0, 0, 0, 255]));
    }

    // Tests an even width grows toward the bottom right
    // Verified by centring even boxes on the pixel
    #[test]
    fn test_dilate_even() {
        let adjustments = EdgeAdjustments {
            edge_width: 2,
            ..EdgeAdjustments::default()
        };
        let output = process(&dot(5, (2, 2)), &adjustments).unwrap();

        assert_eq!(white_count(&output), 4);
        assert_eq!(output.pixel(3, 3), Some([255, 255, 255, 255]));
        assert_eq!(output.pixel(1, 1), Some([0, 0, 0, 255]));
    }

    // Tests brightness lifts black and truncates
    // Verified by rounding instead of truncating
    #[test]
    fn test_brightness() {
        let adjustments = EdgeAdjustments {
            brightness: 0.2,
            ..EdgeAdjustments::default()
        };
        let output = process(&dot(3, (0, 0)), &adjustments).unwrap();
        assert_eq!(output.pixel(1, 1), Some([51, 51, 51, 255]));
        assert_eq!(output.pixel(0, 0), Some([255, 255, 255, 255]));
    }

    // Tests inversion keeps alpha
    // Verified by inverting alpha too
    #[test]
    fn test_invert() {
        let image = RasterImage::filled(2, 2, [10, 20, 30, 99]).unwrap();
        let adjustments = EdgeAdjustments {
            invert: true,
            ..EdgeAdjustments::default()
        };
        let output = process(&image, &adjustments).unwrap();
        assert!(output.pixels().chunks_exact(4).all(|p| p == [245, 235, 225, 99]));
    }

    // Tests out-of-range settings are clamped
    // Verified by accepting edge width zero
    #[test]
    fn test_normalized() {
        let adjustments = EdgeAdjustments {
            edge_width: 0,
            brightness: 3.0,
            contrast: 0.0,
            invert: false,
        }
        .normalized();
        assert_eq!(adjustments.edge_width, 1);
        assert!((adjustments.brightness - 0.5).abs() < f32::EPSILON);
        assert!((adjustments.contrast - 0.5).abs() < f32::EPSILON);

        let wide = EdgeAdjustments {
            edge_width: 40,
            ..EdgeAdjustments::default()
        };
        assert_eq!(wide.normalized().edge_width, 5);
        assert!(!wide.is_neutral());
    }
}
