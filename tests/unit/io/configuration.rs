//! Tests for generation constants and defaults

#[cfg(test)]
mod tests {
    use gridmosaic::io::configuration::{
        CELLS_LAYER_NAME, DEFAULT_DENSITY, DEFAULT_SEED, ERROR_NOTICE_PREFIX, INSERTED_NOTICE,
        LINE_COLOR, LINE_THICKNESS, LINES_LAYER_NAME, MAX_CELL_SIZE, MAX_GRID_DIMENSION,
        MIN_OPACITY, OPACITY_SPAN, OUTPUT_SUFFIX,
    };

    // Tests the opacity range ends at one
    // Verified by changing the span
    #[test]
    fn test_opacity_range() {
        assert!((MIN_OPACITY - 0.2).abs() < f64::EPSILON);
        assert!((MIN_OPACITY + OPACITY_SPAN - 1.0).abs() < f64::EPSILON);
    }

    // Tests separator line styling
    // Verified by thickening the lines
    #[test]
    fn test_line_style() {
        assert_eq!(LINE_THICKNESS, 1);
        assert!(LINE_COLOR.is_normalized());
        assert_ne!(LINES_LAYER_NAME, CELLS_LAYER_NAME);
    }

    // Tests the grid extent cannot overflow canvas units
    // Verified by raising the cell size limit
    #[test]
    fn test_limits_fit_u32() {
        assert!(MAX_GRID_DIMENSION.checked_mul(MAX_CELL_SIZE).is_some());
    }

    // Tests defaults used by the command line
    // Verified by changing seed value
    #[test]
    fn test_defaults() {
        assert_eq!(DEFAULT_SEED, 42);
        assert!((0.0..=1.0).contains(&DEFAULT_DENSITY));
    }

    // Tests user-facing notice texts
    // Verified by dropping the error prefix separator
    #[test]
    fn test_notice_texts() {
        assert_eq!(INSERTED_NOTICE, "Grid inserted.");
        assert_eq!(ERROR_NOTICE_PREFIX, "Error: ");
    }

    // Tests filesystem safety of suffix
    // Verified by adding special character
    #[test]
    fn test_output_suffix_no_special_chars() {
        assert!(OUTPUT_SUFFIX.starts_with('_'));
        for ch in OUTPUT_SUFFIX.chars() {
            assert!(
                ch.is_alphanumeric() || ch == '_' || ch == '-',
                "Output suffix contains invalid character: {ch}"
            );
        }
    }
}
