//! Edge-aware placement of separator lines and cell rectangles
//!
//! Lines sit on the trailing unit of the cell before them, so a line between
//! columns `c - 1` and `c` occupies `x = c * size - 1`. Cells give up one unit
//! on every side that faces a line and keep their full size on the outer
//! boundary. With every cell active, lines and rectangles tile the grid
//! extent exactly and nothing leaves it.

use crate::io::configuration::{
    CELLS_LAYER_NAME, LINE_COLOR, LINE_THICKNESS, LINES_LAYER_NAME,
};
use crate::io::error::{Result, invalid_mask, invalid_parameter};
use crate::layout::geometry::{CellRect, Layer, MosaicLayout, Orientation, Rect, SeparatorLine};
use crate::layout::parameters::GenerationParameters;
use crate::sampling::ActivationMask;

/// Coerce a requested cell size to a whole number of units, at least one
///
/// Non-finite sizes fall back to the minimum. Sizes beyond `u32` saturate and
/// are then caught by the extent check.
pub fn safe_cell_size(cell_size: f64) -> u32 {
    if !cell_size.is_finite() {
        return 1;
    }
    cell_size.round().max(1.0) as u32
}

/// Compute the renderable layout for a sampled mask
///
/// # Errors
///
/// Returns an error if:
/// - The mask is empty in either dimension
/// - The mask shape differs from the requested rows and columns
/// - The grid extent does not fit in canvas units
pub fn build_layout(
    parameters: &GenerationParameters,
    mask: &ActivationMask,
) -> Result<MosaicLayout> {
    if mask.is_empty() {
        return Err(invalid_mask(&format!(
            "mask is empty ({}x{})",
            mask.rows(),
            mask.columns()
        )));
    }

    let (rows, columns) = parameters.shape();
    if (mask.rows(), mask.columns()) != (rows, columns) {
        return Err(invalid_mask(&format!(
            "mask is {}x{} but {rows}x{columns} was requested",
            mask.rows(),
            mask.columns()
        )));
    }

    let size = safe_cell_size(parameters.cell_size);
    let width = extent("gridColumns", parameters.columns, size)?;
    let height = extent("gridRows", parameters.rows, size)?;

    let mut lines = Layer::new(LINES_LAYER_NAME, width, height);
    for column in 1..parameters.columns {
        lines.shapes.push(SeparatorLine {
            orientation: Orientation::Vertical,
            rect: Rect::new(column * size - LINE_THICKNESS, 0, LINE_THICKNESS, height),
            color: LINE_COLOR,
        });
    }
    for row in 1..parameters.rows {
        lines.shapes.push(SeparatorLine {
            orientation: Orientation::Horizontal,
            rect: Rect::new(0, row * size - LINE_THICKNESS, width, LINE_THICKNESS),
            color: LINE_COLOR,
        });
    }

    let mut cells = Layer::new(CELLS_LAYER_NAME, width, height);
    for (row, column, state) in mask.iter_active() {
        cells.shapes.push(CellRect {
            row,
            column,
            rect: cell_rect(row, column, rows, columns, size),
            color: parameters.color,
            opacity: state.opacity,
        });
    }

    Ok(MosaicLayout {
        width,
        height,
        cell_size: size,
        lines,
        cells,
    })
}

fn extent(parameter: &'static str, count: u32, size: u32) -> Result<u32> {
    count.checked_mul(size).ok_or_else(|| {
        invalid_parameter(
            parameter,
            &count,
            &format!("grid extent overflows at cell size {size}"),
        )
    })
}

// Callers guarantee row < rows and column < columns, both within u32.
fn cell_rect(row: usize, column: usize, rows: usize, columns: usize, size: u32) -> Rect {
    let inset = |index: usize, count: usize| {
        if index + 1 == count {
            size
        } else {
            size - LINE_THICKNESS
        }
    };

    Rect::new(
        column as u32 * size,
        row as u32 * size,
        inset(column, columns),
        inset(row, rows),
    )
}
