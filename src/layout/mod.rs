//! Mosaic layout construction
//!
//! This module contains:
//! - Generation parameters and their validation
//! - Colors, rectangles, layers and the composed layout
//! - The builder turning an activation mask into geometry

/// Mask-to-geometry layout builder
pub mod builder;
/// Geometry and color primitives
pub mod geometry;
/// Request parameters
pub mod parameters;

pub use builder::{build_layout, safe_cell_size};
pub use geometry::{CellRect, Layer, MosaicLayout, Orientation, Rect, Rgb, SeparatorLine};
pub use parameters::GenerationParameters;
