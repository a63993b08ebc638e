//! Tests for the median and Otsu helpers

#[cfg(test)]
mod tests {
    use condprep::math::statistics::{
        HISTOGRAM_BINS, luminance_histogram, median, otsu_threshold,
    };
    use condprep::raster::RasterImage;

    // Tests odd and even counts and the empty case
    // Verified by taking the upper middle value for even counts
    #[test]
    fn test_median() {
        assert_eq!(median(&mut [5.0, 1.0, 3.0]), Some(3.0));
        assert_eq!(median(&mut [4.0, 1.0, 3.0, 10.0]), Some(3.5));
        assert_eq!(median(&mut []), None);
    }

    // Tests luminance levels are rounded into bins
    // Verified by truncating the luminance
    #[test]
    fn test_luminance_histogram() {
        let mut image = RasterImage::filled(3, 1, [10, 10, 10, 255]).unwrap();
        image.set_pixel(2, 0, [255, 0, 0, 0]);
        let bins = luminance_histogram(&image);

        assert_eq!(bins[10], 2);
        assert_eq!(bins[76], 1);
        assert_eq!(bins.iter().sum::<u64>(), 3);
    }

    // Tests a two-level histogram splits at the dark level
    // Verified by choosing the last maximum instead of the first
    #[test]
    fn test_otsu_bimodal() {
        let mut bins = [0_u64; HISTOGRAM_BINS];
        bins[40] = 50;
        bins[200] = 50;
        assert_eq!(otsu_threshold(&bins), 40);

        bins[45] = 10;
        bins[190] = 10;
        assert_eq!(otsu_threshold(&bins), 45);
    }

    // Tests flat and empty histograms fall back to zero
    // Verified by dividing by an empty class
    #[test]
    fn test_otsu_degenerate() {
        let mut bins = [0_u64; HISTOGRAM_BINS];
        assert_eq!(otsu_threshold(&bins), 0);

        bins[128] = 9;
        assert_eq!(otsu_threshold(&bins), 0);
    }
}
