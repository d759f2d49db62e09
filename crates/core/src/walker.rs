//! Random-walk agent that carves a connected floor trail through the grid interior.

use crate::grid::Grid;
use crate::random::{DungeonRng, pick};
use crate::types::{CellKind, Pos};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WalkLimits {
    pub step_budget: usize,
    /// Grid-wide floor count at which the walk ends.
    pub coverage_target: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkStop {
    BudgetExhausted,
    CoverageReached,
    Stuck,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WalkReport {
    pub start: Pos,
    pub end: Pos,
    pub steps: usize,
    pub carved: usize,
    pub stop: WalkStop,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Walker {
    start: Pos,
    pos: Pos,
}

impl Walker {
    pub fn new(start: Pos) -> Self {
        Self { start, pos: start }
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Walks until the step budget runs out, the grid reaches its coverage target, or no
    /// interior neighbor is left. Every visited cell is carved to floor.
    pub fn walk(
        &mut self,
        grid: &mut Grid,
        rng: &mut (impl DungeonRng + ?Sized),
        limits: WalkLimits,
    ) -> WalkReport {
        let mut steps = 0;
        let mut carved = 0;

        let stop = loop {
            if !grid.is_within_grid(self.pos.x, self.pos.y) {
                break WalkStop::Stuck;
            }
            if grid.carve(self.pos) {
                carved += 1;
            }
            if grid.count_kind(CellKind::Floor) >= limits.coverage_target {
                break WalkStop::CoverageReached;
            }
            if steps >= limits.step_budget {
                break WalkStop::BudgetExhausted;
            }

            let options = interior_neighbors(grid, self.pos);
            let Some(&next) = pick(rng, &options) else {
                break WalkStop::Stuck;
            };
            self.pos = next;
            steps += 1;
        };

        WalkReport { start: self.start, end: self.pos, steps, carved, stop }
    }
}

fn interior_neighbors(grid: &Grid, pos: Pos) -> Vec<Pos> {
    grid.cell(pos)
        .map(|cell| {
            cell.neighbors()
                .iter()
                .copied()
                .filter(|next| grid.is_within_grid(next.x, next.y))
                .collect()
        })
        .unwrap_or_default()
}
