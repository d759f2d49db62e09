//! Tunable generation parameters. Defaults reproduce the classic layout: a 20-cell grid,
//! two walkers and six guards.

use serde::{Deserialize, Serialize};

use crate::grid::clamp_size;

pub const DEFAULT_WALKER_COUNT: usize = 2;
pub const DEFAULT_GUARD_COUNT: usize = 6;
pub const DEFAULT_WALKER_STEP_FACTOR: usize = 1;
pub const DEFAULT_WALKER_COVERAGE_PERCENT: usize = 45;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Requested side length; clamped into `20..=50` at generation time.
    pub size: usize,
    pub walker_count: usize,
    pub guard_count: usize,
    /// Each walker may take up to `interior_area * walker_step_factor` steps.
    pub walker_step_factor: usize,
    /// Walkers stop once this share of the interior has been carved.
    pub walker_coverage_percent: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: 20,
            walker_count: DEFAULT_WALKER_COUNT,
            guard_count: DEFAULT_GUARD_COUNT,
            walker_step_factor: DEFAULT_WALKER_STEP_FACTOR,
            walker_coverage_percent: DEFAULT_WALKER_COVERAGE_PERCENT,
        }
    }
}

impl GeneratorConfig {
    pub fn with_size(size: usize) -> Self {
        Self { size, ..Self::default() }
    }

    pub fn clamped_size(&self) -> usize {
        clamp_size(self.size)
    }

    /// Step budget for a single walker on a grid with `interior_area` open cells.
    pub fn walker_step_budget(&self, interior_area: usize) -> usize {
        interior_area.saturating_mul(self.walker_step_factor)
    }

    /// Number of carved floor cells at which walkers stop early.
    pub fn coverage_target(&self, interior_area: usize) -> usize {
        interior_area * self.walker_coverage_percent.min(100) / 100
    }
}
