//! The finished dungeon handed to presentation and tooling.

use serde::Serialize;
use xxhash_rust::xxh3::xxh3_64;

use crate::grid::{Cell, Grid};
use crate::types::{CellKind, Pos};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Dungeon {
    pub grid: Grid,
    pub goal: Pos,
    /// Every `Floor` or `Spawn` cell, row-major.
    pub floor_tiles: Vec<Pos>,
    pub guards: Vec<Pos>,
    pub player_spawn: Pos,
}

impl Dungeon {
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn kind_at(&self, pos: Pos) -> Option<CellKind> {
        self.grid.kind_at(pos)
    }

    pub fn is_within_grid(&self, x: i32, y: i32) -> bool {
        self.grid.is_within_grid(x, y)
    }

    pub fn floor_cells(&self) -> impl Iterator<Item = &Cell> {
        self.floor_tiles.iter().filter_map(|&pos| self.grid.cell(pos))
    }

    pub fn guard_cells(&self) -> impl Iterator<Item = &Cell> {
        self.guards.iter().filter_map(|&pos| self.grid.cell(pos))
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.size() * self.size() + 64);
        bytes.extend((self.size() as u32).to_le_bytes());
        for cell in self.grid.cells() {
            bytes.push(cell.kind().code());
        }
        push_pos(&mut bytes, self.goal);
        push_pos(&mut bytes, self.player_spawn);

        bytes.extend((self.floor_tiles.len() as u32).to_le_bytes());
        bytes.extend((self.guards.len() as u32).to_le_bytes());
        for &guard in &self.guards {
            push_pos(&mut bytes, guard);
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn push_pos(bytes: &mut Vec<u8>, pos: Pos) {
    bytes.extend(pos.x.to_le_bytes());
    bytes.extend(pos.y.to_le_bytes());
}
