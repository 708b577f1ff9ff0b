//! Generation constants and runtime configuration defaults

use crate::layout::geometry::Rgb;

// Sampling
/// Lowest opacity an active cell can receive
pub const MIN_OPACITY: f64 = 0.2;
/// Width of the opacity range above `MIN_OPACITY`
pub const OPACITY_SPAN: f64 = 0.8;

// Layout
/// Thickness of separator lines in canvas units
pub const LINE_THICKNESS: u32 = 1;
/// Fixed light gray used for separator lines
pub const LINE_COLOR: Rgb = Rgb {
    r: 0.8,
    g: 0.8,
    b: 0.8,
};
/// Name of the separator line layer
pub const LINES_LAYER_NAME: &str = "Grid";
/// Name of the cell rectangle layer
pub const CELLS_LAYER_NAME: &str = "Mosaic";

// Safety limits to prevent excessive memory allocation
/// Maximum allowed number of rows or columns
pub const MAX_GRID_DIMENSION: u32 = 10_000;
/// Largest cell size a request may ask for
pub const MAX_CELL_SIZE: u32 = 4_096;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default number of grid columns
pub const DEFAULT_COLUMNS: u32 = 16;
/// Default number of grid rows
pub const DEFAULT_ROWS: u32 = 16;
/// Default cell edge length
pub const DEFAULT_CELL_SIZE: f64 = 20.0;
/// Default probability that a cell is active
pub const DEFAULT_DENSITY: f64 = 0.5;
/// Default fill color
pub const DEFAULT_COLOR: Rgb = Rgb {
    r: 0.0,
    g: 0.0,
    b: 0.0,
};

// User feedback
/// Notification shown after a grid has been inserted
pub const INSERTED_NOTICE: &str = "Grid inserted.";
/// Prefix for notifications describing a failed request
pub const ERROR_NOTICE_PREFIX: &str = "Error: ";

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_mosaic";
/// Output file used when no path is given
pub const DEFAULT_OUTPUT: &str = "mosaic.png";
