//! User-chosen generation parameters shared by sampling and layout

use serde::{Deserialize, Serialize};

use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_COLOR, DEFAULT_COLUMNS, DEFAULT_DENSITY, DEFAULT_ROWS,
    MAX_CELL_SIZE, MAX_GRID_DIMENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::layout::geometry::Rgb;

/// Parameters for one preview or confirm request
///
/// Field names on the wire follow the settings panel (`gridColumns`,
/// `gridRows`, `cellSize`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    /// Number of grid columns
    #[serde(rename = "gridColumns")]
    pub columns: u32,
    /// Number of grid rows
    #[serde(rename = "gridRows")]
    pub rows: u32,
    /// Fill color of active cells
    pub color: Rgb,
    /// Requested cell edge length, coerced by the layout builder
    #[serde(rename = "cellSize")]
    pub cell_size: f64,
    /// Probability that a cell is active
    pub density: f64,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            color: DEFAULT_COLOR,
            cell_size: DEFAULT_CELL_SIZE,
            density: DEFAULT_DENSITY,
        }
    }
}

impl GenerationParameters {
    /// Check the parameters before any sampling or layout work
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either dimension is zero or exceeds `MAX_GRID_DIMENSION`
    /// - Density is not a finite value in `[0, 1]`
    /// - A color channel lies outside `[0, 1]`
    /// - Cell size is not finite or rounds above `MAX_CELL_SIZE`
    ///
    /// Sizes below one are accepted and coerced to one unit by the layout builder.
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("gridColumns", self.columns), ("gridRows", self.rows)] {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be positive"));
            }
            if value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must not exceed {MAX_GRID_DIMENSION}"),
                ));
            }
        }

        if !self.density.is_finite() || !(0.0..=1.0).contains(&self.density) {
            return Err(invalid_parameter(
                "density",
                &self.density,
                &"must be between 0 and 1",
            ));
        }

        if !self.color.is_normalized() {
            return Err(invalid_parameter(
                "color",
                &format!("({}, {}, {})", self.color.r, self.color.g, self.color.b),
                &"channels must be between 0 and 1",
            ));
        }

        if !self.cell_size.is_finite() {
            return Err(invalid_parameter(
                "cellSize",
                &self.cell_size,
                &"must be a finite number",
            ));
        }
        if self.cell_size.round() > f64::from(MAX_CELL_SIZE) {
            return Err(invalid_parameter(
                "cellSize",
                &self.cell_size,
                &format!("must not exceed {MAX_CELL_SIZE}"),
            ));
        }

        Ok(())
    }

    /// Mask shape as `(rows, columns)`
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows as usize, self.columns as usize)
    }
}
