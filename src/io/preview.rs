//! Text rendering of activation masks for terminal preview

use crate::sampling::{ActivationMask, CellState};

/// Glyphs for active cells from faintest to strongest
const SHADES: [char; 4] = ['░', '▒', '▓', '█'];
/// Glyph for inactive cells
const EMPTY: char = '.';

/// Glyph for one cell, chosen by opacity band
pub fn cell_glyph(cell: &CellState) -> char {
    if !cell.active {
        return EMPTY;
    }
    let band = (cell.opacity.clamp(0.0, 1.0) * SHADES.len() as f64) as usize;
    SHADES
        .get(band.min(SHADES.len() - 1))
        .copied()
        .unwrap_or(EMPTY)
}

/// Render a mask as one line of glyphs per row
pub fn render_mask(mask: &ActivationMask) -> String {
    mask.to_rows()
        .iter()
        .map(|row| row.iter().map(cell_glyph).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
