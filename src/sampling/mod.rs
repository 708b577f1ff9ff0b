//! Activation mask sampling
//!
//! This module contains:
//! - The activation mask data structure
//! - Seeded per-cell sampling from a density parameter

/// Activation mask storage and validation
pub mod mask;
/// Density-driven mask sampling
pub mod sampler;

pub use mask::{ActivationMask, CellState};
pub use sampler::{GridSampler, sample};
