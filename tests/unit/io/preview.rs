//! Tests for text rendering of activation masks

#[cfg(test)]
mod tests {
    use gridmosaic::io::preview::{cell_glyph, render_mask};
    use gridmosaic::sampling::{ActivationMask, CellState};

    // Tests glyph selection by opacity band
    // Verified by ignoring the active flag
    #[test]
    fn test_cell_glyph_bands() {
        assert_eq!(cell_glyph(&CellState::INACTIVE), '.');
        assert_eq!(cell_glyph(&CellState::active(0.2)), '░');
        assert_eq!(cell_glyph(&CellState::active(0.3)), '▒');
        assert_eq!(cell_glyph(&CellState::active(0.6)), '▓');
        assert_eq!(cell_glyph(&CellState::active(0.99)), '█');
        assert_eq!(cell_glyph(&CellState::active(1.0)), '█');
    }

    // Tests one line per row with one glyph per column
    // Verified by joining rows without newlines
    #[test]
    fn test_render_mask_layout() {
        let mask = ActivationMask::from_fn(2, 3, |row, column| {
            if row == column {
                CellState::active(1.0)
            } else {
                CellState::INACTIVE
            }
        });

        assert_eq!(render_mask(&mask), "█..\n.█.");
    }
}
