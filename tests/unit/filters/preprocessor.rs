//! Tests for filter dispatch, naming and parameter listing

#[cfg(test)]
mod tests {
    use clap::ValueEnum;
    use condprep::filters::adjust::EdgeAdjustments;
    use condprep::filters::threshold::ThresholdParams;
    use condprep::filters::{FilterKind, Preprocessor};
    use condprep::raster::RasterImage;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample() -> RasterImage {
        let mut image = RasterImage::blank(9, 7).unwrap();
        for y in 0..7 {
            for x in 0..9 {
                image.set_pixel(x, y, [(x * 28) as u8, (y * 36) as u8, 90, 255]);
            }
        }
        image
    }

    // Tests every kind round-trips through its default preprocessor
    // Verified by mapping two kinds to the same variant
    #[test]
    fn test_kind_round_trip() {
        for &kind in FilterKind::value_variants() {
            assert_eq!(Preprocessor::with_defaults(kind).kind(), kind);
        }
    }

    // Tests names are unique and snake case
    // Verified by reusing a name
    #[test]
    fn test_names() {
        let mut names: Vec<&str> = FilterKind::value_variants()
            .iter()
            .map(|&kind| Preprocessor::with_defaults(kind).name())
            .collect();
        assert!(names.iter().all(|n| !n.contains('-')));
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), FilterKind::value_variants().len());
        assert_eq!(
            Preprocessor::with_defaults(FilterKind::InpaintGuide).name(),
            "inpaint_guide"
        );
    }

    // Tests edge map classification
    // Verified by including threshold among edge maps
    #[test]
    fn test_is_edge_map() {
        assert!(Preprocessor::with_defaults(FilterKind::Canny).is_edge_map());
        assert!(Preprocessor::with_defaults(FilterKind::Mlsd).is_edge_map());
        assert!(!Preprocessor::with_defaults(FilterKind::Threshold).is_edge_map());
        assert!(!Preprocessor::with_defaults(FilterKind::Shuffle).is_edge_map());
        assert!(Preprocessor::with_defaults(FilterKind::Lineart).is_edge_map());
        assert!(Preprocessor::with_defaults(FilterKind::Scribble).is_edge_map());
        assert!(!Preprocessor::with_defaults(FilterKind::Normal).is_edge_map());
        assert!(!Preprocessor::with_defaults(FilterKind::Recolor).is_edge_map());
    }

    // Tests parameter listings follow field order
    // Verified by sorting the listing
    #[test]
    fn test_parameters() {
        let listing = Preprocessor::Threshold(ThresholdParams::default()).parameters();
        let names: Vec<&str> = listing.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["threshold", "intensity", "invert_colors", "mode"]);
        assert_eq!(listing[0].1, "128");
        assert_eq!(listing[2].1, "false");
        assert_eq!(listing[3].1, "Fixed");

        let recolor = Preprocessor::with_defaults(FilterKind::Recolor).parameters();
        assert_eq!(recolor[1], ("color", "#ffffff".to_string()));
    }

    // Tests every filter preserves dimensions
    // Verified by returning a cropped buffer from one filter
    #[test]
    fn test_all_filters_preserve_dimensions() {
        let image = sample();
        let mut rng = StdRng::seed_from_u64(1);
        for &kind in FilterKind::value_variants() {
            let output = Preprocessor::with_defaults(kind)
                .process(&image, &mut rng)
                .unwrap();
            assert_eq!((output.width(), output.height()), (9, 7), "{kind:?}");
            assert_eq!(output.pixels().len(), 9 * 7 * 4, "{kind:?}");
        }
    }

    // Tests adjustments apply to edge maps only
    // Verified by applying adjustments to every filter
    #[test]
    fn test_process_adjusted() {
        let image = sample();
        let invert = EdgeAdjustments {
            invert: true,
            ..EdgeAdjustments::default()
        };
        let mut rng = StdRng::seed_from_u64(1);

        let canny = Preprocessor::with_defaults(FilterKind::Canny);
        let plain = canny.process(&image, &mut rng).unwrap();
        let inverted = canny.process_adjusted(&image, &invert, &mut rng).unwrap();
        assert_eq!(inverted.pixel(0, 0).map(|p| p[0]), plain.pixel(0, 0).map(|p| 255 - p[0]));

        let threshold = Preprocessor::with_defaults(FilterKind::Threshold);
        assert_eq!(
            threshold.process_adjusted(&image, &invert, &mut rng).unwrap(),
            threshold.process(&image, &mut rng).unwrap()
        );
    }
}
