//! Random-walk dungeon generation: a square grid carved by walker agents, a goal on the
//! border, a guaranteed entry next to it, and guards kept away from it.

pub mod config;
pub mod error;
pub mod generator;
pub mod grid;
pub mod model;
pub mod presentation;
pub mod random;
pub mod types;
pub mod walker;

pub use config::GeneratorConfig;
pub use error::GenerationError;
pub use generator::DungeonGenerator;
pub use grid::{Cell, Grid, MAX_GRID_SIZE, MIN_GRID_SIZE};
pub use model::Dungeon;
pub use presentation::{PresentationAdapter, TileVisual, WorldLayout, WorldPos, present};
pub use random::{DungeonRng, seeded_rng};
pub use types::{CellKind, Pos};

/// Generates a dungeon of (clamped) side `size` from a ChaCha stream seeded with `seed`.
pub fn generate(size: usize, seed: u64) -> Result<Dungeon, GenerationError> {
    DungeonGenerator::new(GeneratorConfig::with_size(size)).generate(&mut seeded_rng(seed))
}
