//! Randomized rectangular mosaic generation for design canvases
//!
//! A density parameter drives independent per-cell sampling of an activation
//! mask. The mask is then laid out as a layer of separator lines under a layer
//! of cell rectangles that tile the grid without covering the lines.

#![forbid(unsafe_code)]

/// Input/output operations and error handling
pub mod io;
/// Mask-to-geometry layout and generation parameters
pub mod layout;
/// Activation mask sampling
pub mod sampling;
/// Request handling between the settings panel and the canvas
pub mod session;

pub use io::error::{MosaicError, Result};
