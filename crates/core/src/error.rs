use thiserror::Error;

use crate::types::Pos;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// No floor tile is far enough from the goal to host a guard.
    #[error("no floor tile lies at least {} cells from goal {goal:?} on a {size}x{size} grid", .size / 2)]
    NoQualifyingGuardSite { size: usize, goal: Pos },
    #[error("grid size {size} is below the minimum of {minimum} needed to expand the goal")]
    DegenerateGrid { size: usize, minimum: usize },
    #[error("goal expansion around {goal:?} produced no player spawn cell")]
    MissingSpawn { goal: Pos },
}
