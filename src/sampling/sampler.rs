//! Independent per-cell sampling of activation masks

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::configuration::{MIN_OPACITY, OPACITY_SPAN};
use crate::sampling::mask::{ActivationMask, CellState};

/// Sample a `rows x columns` activation mask
///
/// Each cell draws one uniform value in `[0, 1)` and is active iff the value
/// is below `density`. Active cells draw a second value `u` and receive
/// opacity `MIN_OPACITY + OPACITY_SPAN * u`. Cells are visited in row-major
/// order, so a seeded generator always reproduces the same mask.
pub fn sample<R: Rng + ?Sized>(
    columns: usize,
    rows: usize,
    density: f64,
    rng: &mut R,
) -> ActivationMask {
    ActivationMask::from_fn(rows, columns, |_, _| sample_cell(density, &mut *rng))
}

fn sample_cell<R: Rng + ?Sized>(density: f64, rng: &mut R) -> CellState {
    if rng.random::<f64>() < density {
        CellState::active(OPACITY_SPAN.mul_add(rng.random::<f64>(), MIN_OPACITY))
    } else {
        CellState::INACTIVE
    }
}

/// Mask sampler owning its random source
///
/// The generator is injected so tests and the CLI can reproduce a mask from a
/// seed, while hosts that want fresh patterns can pass any other `Rng`.
#[derive(Debug, Clone)]
pub struct GridSampler<R = StdRng> {
    rng: R,
    samples_drawn: usize,
}

impl GridSampler<StdRng> {
    /// Create a deterministic sampler
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GridSampler<R> {
    /// Create a sampler around an existing generator
    pub const fn with_rng(rng: R) -> Self {
        Self {
            rng,
            samples_drawn: 0,
        }
    }

    /// Sample a fresh mask
    pub fn sample(&mut self, columns: usize, rows: usize, density: f64) -> ActivationMask {
        self.samples_drawn += 1;
        sample(columns, rows, density, &mut self.rng)
    }

    /// Number of masks produced so far
    pub const fn samples_drawn(&self) -> usize {
        self.samples_drawn
    }
}
