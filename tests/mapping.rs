mod tests {
    use std::collections::HashSet;

    use bitmatrix_encoder::{Layout, LayoutError, PackedImage, Quadrant, Rgb};

    const QUADRANTS: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::BottomLeft,
        Quadrant::TopRight,
        Quadrant::BottomRight,
    ];

    fn layout() -> Layout {
        Layout::new(8, 8, 4, 8).unwrap()
    }

    #[test]
    fn test_layout_validation() {
        assert_eq!(Layout::new(0, 8, 1, 1), Err(LayoutError::EmptyImage));
        assert_eq!(Layout::new(8, 0, 1, 1), Err(LayoutError::EmptyImage));
        assert_eq!(Layout::new(7, 8, 1, 1), Err(LayoutError::OddDimension));
        assert_eq!(Layout::new(8, 6, 1, 1), Err(LayoutError::OddDimension));
        assert_eq!(Layout::new(8, 8, 0, 1), Err(LayoutError::StripLength));
        assert_eq!(Layout::new(8, 8, 5, 1), Err(LayoutError::StripLength));
        assert_eq!(Layout::new(8, 8, 4, 0), Err(LayoutError::PatternCount));
        assert_eq!(Layout::new(8, 8, 4, 9), Err(LayoutError::PatternCount));
        assert!(Layout::new(8, 8, 4, 8).is_ok());
    }

    #[test]
    fn test_resolve_is_a_bijection_within_bounds() {
        let layout = layout();
        for quadrant in QUADRANTS {
            let mut seen = HashSet::new();
            for pattern in 0..layout.patterns() {
                for led in 0..layout.leds_per_strip() {
                    let (row, col) = quadrant.resolve(&layout, pattern, led).unwrap();
                    assert!(row < layout.rows());
                    assert!(col < layout.cols());
                    assert!(
                        seen.insert((row, col)),
                        "{quadrant:?} mapped two pairs to ({row}, {col})"
                    );
                }
            }
            assert_eq!(seen.len(), layout.patterns() * layout.leds_per_strip());
        }
    }

    #[test]
    fn test_top_and_bottom_never_share_a_row() {
        let layout = layout();
        for pattern in 0..layout.patterns() {
            for led in 0..layout.leds_per_strip() {
                let (top_row, top_col) = Quadrant::TopLeft.resolve(&layout, pattern, led).unwrap();
                let (bottom_row, bottom_col) =
                    Quadrant::BottomLeft.resolve(&layout, pattern, led).unwrap();
                assert_eq!(top_col, bottom_col);
                assert!(top_row < layout.rows() / 2);
                assert!(bottom_row >= layout.rows() / 2);
            }
        }
    }

    #[test]
    fn test_led_zero_sits_on_the_centerline() {
        let layout = layout();
        assert_eq!(
            Quadrant::TopLeft.resolve(&layout, 0, 0),
            Some((layout.rows() / 2 - 1, 0))
        );
        assert_eq!(
            Quadrant::BottomLeft.resolve(&layout, 0, 0),
            Some((layout.rows() / 2, 0))
        );
    }

    #[test]
    fn test_right_quadrants_wrap_the_pattern_range() {
        let layout = layout();
        // cols/2 = 4, patterns = 8: pattern 5 wraps to column 1.
        assert_eq!(Quadrant::TopRight.resolve(&layout, 5, 0), Some((3, 1)));
        assert_eq!(Quadrant::BottomRight.resolve(&layout, 0, 0), Some((4, 4)));
    }

    #[test]
    fn test_out_of_range_indices_are_absent() {
        let layout = layout();
        for quadrant in QUADRANTS {
            assert_eq!(quadrant.resolve(&layout, 0, layout.leds_per_strip()), None);
            assert_eq!(quadrant.resolve(&layout, layout.patterns(), 0), None);
        }
    }

    #[test]
    fn test_absent_coordinate_reads_as_black() {
        let layout = layout();
        let data = vec![0xFF; layout.pixel_count()];
        let image = PackedImage::new(&data, layout).unwrap();

        let black = Rgb { r: 0, g: 0, b: 0 };
        assert_eq!(
            image.color_for_led(layout.patterns(), 0, Quadrant::TopLeft),
            black
        );
        assert_eq!(
            image.color_for_led(0, layout.leds_per_strip(), Quadrant::TopLeft),
            black
        );
        // In-range coordinates still read the real pixel.
        assert_ne!(image.color_for_led(0, 0, Quadrant::TopLeft), black);
    }
}
