//! Generation pipeline: grid setup, goal selection, walker carving, goal expansion and
//! guard placement. Every stage finishes before the next one reads the grid.

mod expansion;
mod guards;

use log::debug;

use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use crate::grid::Grid;
use crate::model::Dungeon;
use crate::random::DungeonRng;
use crate::types::{CellKind, Pos};
use crate::walker::{WalkLimits, Walker};

use self::expansion::expand_end_point;
use self::guards::{GuardContext, spawn_guards};

/// Smallest side length for which the goal's neighborhood still has interior cells.
pub const MIN_EXPANDABLE_SIZE: usize = 5;

pub struct DungeonGenerator {
    config: GeneratorConfig,
}

impl DungeonGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn generate(
        &self,
        rng: &mut (impl DungeonRng + ?Sized),
    ) -> Result<Dungeon, GenerationError> {
        let size = self.config.clamped_size();
        ensure_expandable(size)?;

        let mut grid = Grid::build(size);
        grid.wire_neighbors();
        debug!("built {size}x{size} grid (requested {})", self.config.size);

        let goal = determine_end_point(&mut grid, rng);
        debug!("goal placed at {goal:?}");

        let mut walkers = spawn_walkers(size, self.config.walker_count, rng);
        let limits = WalkLimits {
            step_budget: self.config.walker_step_budget(grid.interior_area()),
            coverage_target: self.config.coverage_target(grid.interior_area()),
        };
        for walker in &mut walkers {
            let report = walker.walk(&mut grid, rng, limits);
            debug!(
                "walker {:?} -> {:?}: {} steps, {} carved, {:?}",
                report.start, report.end, report.steps, report.carved, report.stop
            );
        }

        let forced = expand_end_point(&mut grid, goal);
        debug!("expanded goal surroundings: {forced:?}");
        let player_spawn =
            find_player_spawn(&grid).ok_or(GenerationError::MissingSpawn { goal })?;

        let floor_tiles = collect_floor_tiles(&grid);
        let guards = spawn_guards(
            &GuardContext {
                floor_tiles: &floor_tiles,
                goal,
                size,
                guard_count: self.config.guard_count,
            },
            rng,
        )?;
        debug!("{} floor tiles, guards at {guards:?}", floor_tiles.len());

        Ok(Dungeon { grid, goal, floor_tiles, guards, player_spawn })
    }
}

pub(crate) fn ensure_expandable(size: usize) -> Result<(), GenerationError> {
    if size < MIN_EXPANDABLE_SIZE {
        return Err(GenerationError::DegenerateGrid { size, minimum: MIN_EXPANDABLE_SIZE });
    }
    Ok(())
}

/// Picks a non-corner border cell: one axis is pinned to either end of the grid, the
/// other is drawn from the interior range, and a coin flip decides which is which.
fn determine_end_point(grid: &mut Grid, rng: &mut (impl DungeonRng + ?Sized)) -> Pos {
    let last = grid.size() as i32 - 1;
    let mut n1 = rng.either(0, last);
    let mut n2 = rng.range_inclusive(1, last - 1);
    if rng.coin_flip() {
        (n1, n2) = (n2, n1);
    }

    let goal = Pos::new(n1, n2);
    grid.set_kind(goal, CellKind::Goal);
    goal
}

fn spawn_walkers(size: usize, count: usize, rng: &mut (impl DungeonRng + ?Sized)) -> Vec<Walker> {
    let last_interior = size as i32 - 2;
    let xs = rng.range_many(1, last_interior, count);
    let ys = rng.range_many(1, last_interior, count);
    xs.into_iter().zip(ys).map(|(x, y)| Walker::new(Pos::new(x, y))).collect()
}

fn collect_floor_tiles(grid: &Grid) -> Vec<Pos> {
    grid.cells().filter(|cell| cell.kind().is_walkable()).map(|cell| cell.pos()).collect()
}

/// The player starts on the last spawn cell in row-major order.
fn find_player_spawn(grid: &Grid) -> Option<Pos> {
    grid.cells().filter(|cell| cell.kind() == CellKind::Spawn).map(|cell| cell.pos()).last()
}
