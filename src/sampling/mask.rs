//! Activation mask storing the sampled state of every grid cell

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::io::error::{MosaicError, invalid_mask};

/// Sampled state of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CellState {
    /// Whether the cell receives a rectangle
    pub active: bool,
    /// Fill opacity, zero for inactive cells
    pub opacity: f64,
}

impl CellState {
    /// Inactive cell with zero opacity
    pub const INACTIVE: Self = Self {
        active: false,
        opacity: 0.0,
    };

    /// Active cell with the given opacity
    pub const fn active(opacity: f64) -> Self {
        Self {
            active: true,
            opacity,
        }
    }
}

/// Rows x columns grid of cell states
///
/// Serialized as a nested row-major list so the settings panel can draw it
/// directly. Deserializing rejects ragged rows, so a mask value is always
/// rectangular.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<CellState>>", try_from = "Vec<Vec<CellState>>")]
pub struct ActivationMask {
    cells: Array2<CellState>,
}

impl ActivationMask {
    /// Build a mask by evaluating `f(row, column)` for every cell in row-major order
    pub fn from_fn(rows: usize, columns: usize, mut f: impl FnMut(usize, usize) -> CellState) -> Self {
        Self {
            cells: Array2::from_shape_fn((rows, columns), |(row, column)| f(row, column)),
        }
    }

    /// Mask with every cell in the same state
    pub fn filled(rows: usize, columns: usize, state: CellState) -> Self {
        Self {
            cells: Array2::from_elem((rows, columns), state),
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.cells.ncols()
    }

    /// Whether either dimension is zero
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// State of the cell at `(row, column)`, if in bounds
    pub fn get(&self, row: usize, column: usize) -> Option<&CellState> {
        self.cells.get([row, column])
    }

    /// Mutable state of the cell at `(row, column)`, if in bounds
    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut CellState> {
        self.cells.get_mut([row, column])
    }

    /// Number of active cells
    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.active).count()
    }

    /// Active cells as `(row, column, state)` in row-major order
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, usize, &CellState)> + '_ {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.active)
            .map(|((row, column), cell)| (row, column, cell))
    }

    /// Copy into a nested row-major list
    pub fn to_rows(&self) -> Vec<Vec<CellState>> {
        self.cells.rows().into_iter().map(|row| row.to_vec()).collect()
    }
}

impl From<ActivationMask> for Vec<Vec<CellState>> {
    fn from(mask: ActivationMask) -> Self {
        mask.to_rows()
    }
}

impl TryFrom<Vec<Vec<CellState>>> for ActivationMask {
    type Error = MosaicError;

    fn try_from(rows: Vec<Vec<CellState>>) -> Result<Self, Self::Error> {
        let row_count = rows.len();
        let column_count = rows.first().map_or(0, Vec::len);

        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != column_count)
        {
            return Err(invalid_mask(&format!(
                "row {index} has {} cells, expected {column_count}",
                row.len()
            )));
        }

        let data: Vec<CellState> = rows.into_iter().flatten().collect();
        let cells = Array2::from_shape_vec((row_count, column_count), data)
            .map_err(|e| invalid_mask(&e))?;
        Ok(Self { cells })
    }
}
