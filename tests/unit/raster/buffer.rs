//! Tests for the RGBA8 buffer and its length invariant

#[cfg(test)]
mod tests {
    use condprep::PreprocessError;
    use condprep::io::configuration::MAX_IMAGE_DIMENSION;
    use condprep::raster::RasterImage;
    use condprep::raster::buffer::buffer_len;

    // Tests buffer length is four bytes per pixel
    // Verified by using three channels
    #[test]
    fn test_buffer_len() {
        assert_eq!(buffer_len(3, 2).unwrap(), 24);
        assert_eq!(buffer_len(1, 1).unwrap(), 4);
    }

    // Tests zero and oversized sides are rejected before allocation
    // Verified by removing the zero check
    #[test]
    fn test_buffer_len_rejects_bad_dimensions() {
        assert!(matches!(
            buffer_len(0, 5),
            Err(PreprocessError::InvalidDimensions { width: 0, .. })
        ));
        assert!(matches!(
            buffer_len(5, 0),
            Err(PreprocessError::InvalidDimensions { height: 0, .. })
        ));
        assert!(buffer_len(MAX_IMAGE_DIMENSION + 1, 1).is_err());
        assert!(buffer_len(MAX_IMAGE_DIMENSION, 1).is_ok());
    }

    // Tests wrapping a buffer of the wrong length fails
    // Verified by accepting any length
    #[test]
    fn test_new_rejects_length_mismatch() {
        let error = RasterImage::new(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(
            error,
            PreprocessError::BufferLength {
                expected: 16,
                actual: 15,
                ..
            }
        ));
        assert!(RasterImage::new(2, 2, vec![0; 16]).is_ok());
    }

    // Tests pixels are stored row-major RGBA
    // Verified by swapping x and y in offset
    #[test]
    fn test_row_major_layout() {
        let pixels: Vec<u8> = (0..24).collect();
        let image = RasterImage::new(3, 2, pixels).unwrap();

        assert_eq!(image.offset(1, 0), 4);
        assert_eq!(image.offset(0, 1), 12);
        assert_eq!(image.pixel(2, 1), Some([20, 21, 22, 23]));
        assert_eq!(image.pixel(3, 0), None);
        assert_eq!(image.pixel(0, 2), None);
    }

    // Tests filled and blank constructors
    // Verified by leaving alpha unset in filled
    #[test]
    fn test_constructors() {
        let blank = RasterImage::blank(2, 3).unwrap();
        assert_eq!(blank.pixels().len(), 24);
        assert!(blank.pixels().iter().all(|&b| b == 0));
        assert_eq!(blank.pixel_count(), 6);

        let filled = RasterImage::filled(2, 2, [1, 2, 3, 4]).unwrap();
        assert!(filled.pixels().chunks_exact(4).all(|p| p == [1, 2, 3, 4]));

        let like = filled.blank_like().unwrap();
        assert_eq!((like.width(), like.height()), (2, 2));
        assert!(like.pixels().iter().all(|&b| b == 0));

        assert!(RasterImage::blank(0, 1).is_err());
    }

    // Tests set_pixel writes in bounds and ignores out of bounds
    // Verified by removing the bounds check
    #[test]
    fn test_set_pixel() {
        let mut image = RasterImage::blank(2, 2).unwrap();
        image.set_pixel(1, 1, [9, 8, 7, 6]);
        image.set_pixel(5, 5, [1, 1, 1, 1]);

        assert_eq!(image.pixel(1, 1), Some([9, 8, 7, 6]));
        assert_eq!(image.pixels().iter().map(|&b| u32::from(b)).sum::<u32>(), 30);
    }

    // Tests try_clone produces an equal but independent copy
    // Verified by returning the original buffer
    #[test]
    fn test_try_clone_independent() {
        let original = RasterImage::filled(2, 1, [5, 5, 5, 5]).unwrap();
        let mut copy = original.try_clone().unwrap();
        assert_eq!(copy, original);

        copy.set_pixel(0, 0, [0, 0, 0, 0]);
        assert_ne!(copy, original);
        assert_eq!(original.pixel(0, 0), Some([5, 5, 5, 5]));
    }

    // Tests gray fill writes RGB and optionally alpha
    // Verified by skipping the blue channel
    #[test]
    fn test_fill_gray() {
        let mut image = RasterImage::filled(2, 1, [1, 2, 3, 40]).unwrap();
        image.fill_gray([10, 20], None);
        assert_eq!(image.pixel(0, 0), Some([10, 10, 10, 40]));
        assert_eq!(image.pixel(1, 0), Some([20, 20, 20, 40]));

        image.fill_gray([30, 30], Some(255));
        assert_eq!(image.pixel(1, 0), Some([30, 30, 30, 255]));
    }

    // Tests validate and into_pixels on a healthy buffer
    // Verified by validating against three channels
    #[test]
    fn test_validate_and_into_pixels() {
        let image = RasterImage::filled(1, 2, [7, 7, 7, 7]).unwrap();
        assert!(image.validate().is_ok());
        assert_eq!(image.into_pixels(), vec![7; 8]);
    }
}
