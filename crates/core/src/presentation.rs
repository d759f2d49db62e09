//! Seam between generation and whatever draws the dungeon.
//!
//! Renderers implement [`PresentationAdapter`]; [`present`] walks the finished grid,
//! decides the visual for each cell and hands over world-space positions.

use serde::{Deserialize, Serialize};

use crate::grid::Cell;
use crate::model::Dungeon;
use crate::types::{CellKind, Pos};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileVisual {
    Wall,
    Floor,
    Door,
}

impl TileVisual {
    pub fn for_kind(kind: CellKind) -> Self {
        match kind {
            CellKind::Wall | CellKind::Edge | CellKind::Null => Self::Wall,
            CellKind::Floor | CellKind::Spawn => Self::Floor,
            CellKind::Goal => Self::Door,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorldLayout {
    pub cell_size: f32,
}

impl Default for WorldLayout {
    fn default() -> Self {
        Self { cell_size: 2.0 }
    }
}

impl WorldLayout {
    /// Rows grow rightwards from a negative origin, columns grow downwards.
    pub fn world_position(&self, size: usize, pos: Pos) -> WorldPos {
        let half = self.cell_size / 2.0;
        let x_base = -(size as f32) + half;
        let y_base = size as f32 - half;
        WorldPos {
            x: x_base + pos.x as f32 * self.cell_size,
            y: y_base - pos.y as f32 * self.cell_size,
        }
    }
}

pub trait PresentationAdapter {
    fn draw_tile(&mut self, cell: &Cell, visual: TileVisual, world: WorldPos);

    fn place_player(&mut self, pos: Pos, world: WorldPos);

    fn place_guard(&mut self, index: usize, pos: Pos, world: WorldPos);
}

/// Draws column by column, then places the player and guards.
pub fn present(dungeon: &Dungeon, layout: &WorldLayout, adapter: &mut impl PresentationAdapter) {
    let size = dungeon.size();
    for y in 0..size as i32 {
        for x in 0..size as i32 {
            let Some(cell) = dungeon.grid.cell(Pos::new(x, y)) else {
                continue;
            };
            let world = layout.world_position(size, cell.pos());
            adapter.draw_tile(cell, TileVisual::for_kind(cell.kind()), world);
        }
    }

    adapter.place_player(dungeon.player_spawn, layout.world_position(size, dungeon.player_spawn));
    for (index, &guard) in dungeon.guards.iter().enumerate() {
        adapter.place_guard(index, guard, layout.world_position(size, guard));
    }
}
