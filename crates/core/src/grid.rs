//! Square cell grid with fixed orthogonal adjacency and bounds queries.

use std::mem;

use serde::Serialize;

use crate::types::{CellKind, Pos};

pub const MIN_GRID_SIZE: usize = 20;
pub const MAX_GRID_SIZE: usize = 50;

pub fn clamp_size(size: usize) -> usize {
    size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Cell {
    pos: Pos,
    kind: CellKind,
    neighbors: Vec<Pos>,
}

impl Cell {
    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn kind(&self) -> CellKind {
        self.kind
    }

    /// In-bounds orthogonal neighbors. Empty until the grid has been wired.
    pub fn neighbors(&self) -> &[Pos] {
        &self.neighbors
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
    #[serde(skip)]
    floor_count: usize,
}

impl Grid {
    /// Builds a `size x size` grid after clamping `size` into the supported range.
    /// Border cells start as `Edge`, everything else as `Null`.
    pub fn build(size: usize) -> Self {
        Self::allocate(clamp_size(size))
    }

    fn allocate(size: usize) -> Self {
        let mut cells = Vec::with_capacity(size * size);
        for x in 0..size {
            for y in 0..size {
                let pos = Pos::new(x as i32, y as i32);
                let kind = if is_edge(size, pos) { CellKind::Edge } else { CellKind::Null };
                cells.push(Cell { pos, kind, neighbors: Vec::new() });
            }
        }
        Self { size, cells, floor_count: 0 }
    }

    pub fn wire_neighbors(&mut self) {
        let size = self.size;
        for cell in &mut self.cells {
            cell.neighbors = orthogonal_neighbors(size, cell.pos);
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Cells strictly inside the border ring.
    pub fn interior_area(&self) -> usize {
        (self.size - 2) * (self.size - 2)
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        in_bounds(self.size, pos)
    }

    /// True iff `(x, y)` lies strictly inside the border ring.
    pub fn is_within_grid(&self, x: i32, y: i32) -> bool {
        let limit = self.size as i32 - 1;
        x > 0 && x < limit && y > 0 && y < limit
    }

    pub fn is_edge_of_grid(&self, x: i32, y: i32) -> bool {
        is_edge(self.size, Pos::new(x, y))
    }

    pub fn cell(&self, pos: Pos) -> Option<&Cell> {
        self.in_bounds(pos).then(|| &self.cells[self.index(pos)])
    }

    pub fn kind_at(&self, pos: Pos) -> Option<CellKind> {
        self.cell(pos).map(Cell::kind)
    }

    /// Row-major iteration: `x` outer, `y` inner.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn count_kind(&self, kind: CellKind) -> usize {
        if kind == CellKind::Floor {
            return self.floor_count;
        }
        self.cells.iter().filter(|cell| cell.kind == kind).count()
    }

    /// Overwrites the kind at `pos`. Returns `false` when `pos` is off the grid.
    pub(crate) fn set_kind(&mut self, pos: Pos, kind: CellKind) -> bool {
        if !self.in_bounds(pos) {
            return false;
        }
        let index = self.index(pos);
        let previous = mem::replace(&mut self.cells[index].kind, kind);
        if previous == CellKind::Floor {
            self.floor_count -= 1;
        }
        if kind == CellKind::Floor {
            self.floor_count += 1;
        }
        true
    }

    /// Turns an unvisited interior cell into floor. Any other kind is left untouched, so
    /// carving the same cell again is a no-op. Returns whether the cell changed.
    pub(crate) fn carve(&mut self, pos: Pos) -> bool {
        if !self.is_within_grid(pos.x, pos.y) || self.kind_at(pos) != Some(CellKind::Null) {
            return false;
        }
        self.set_kind(pos, CellKind::Floor)
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.x as usize) * self.size + (pos.y as usize)
    }
}

pub(crate) fn in_bounds(size: usize, pos: Pos) -> bool {
    pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < size && (pos.y as usize) < size
}

fn is_edge(size: usize, pos: Pos) -> bool {
    let last = size as i32 - 1;
    in_bounds(size, pos) && (pos.x == 0 || pos.y == 0 || pos.x == last || pos.y == last)
}

fn orthogonal_neighbors(size: usize, pos: Pos) -> Vec<Pos> {
    [pos.offset(-1, 0), pos.offset(1, 0), pos.offset(0, -1), pos.offset(0, 1)]
        .into_iter()
        .filter(|&next| in_bounds(size, next))
        .collect()
}
