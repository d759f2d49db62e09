//! Widening the goal's surroundings so the player always has somewhere to enter from.

use crate::grid::Grid;
use crate::types::{CellKind, Pos};

const DIAGONALS: [(i32, i32); 4] = [(-1, 1), (1, 1), (1, -1), (-1, -1)];

/// Forces the inward neighbors of `goal` to `Spawn` and its diagonals to `Floor`.
/// Returns the positions that were actually forced; anything outside the interior is
/// skipped so the border ring is never rewritten.
pub(super) fn expand_end_point(grid: &mut Grid, goal: Pos) -> Vec<Pos> {
    let last = grid.size() as i32 - 1;
    let mut forced = Vec::with_capacity(6);

    if goal.y == 0 || goal.y == last {
        forced.extend(force_floor(grid, goal.offset(0, -1), true));
        forced.extend(force_floor(grid, goal.offset(0, 1), true));
    }
    if goal.x == 0 || goal.x == last {
        forced.extend(force_floor(grid, goal.offset(1, 0), true));
        forced.extend(force_floor(grid, goal.offset(-1, 0), true));
    }
    for (dx, dy) in DIAGONALS {
        forced.extend(force_floor(grid, goal.offset(dx, dy), false));
    }

    forced
}

fn force_floor(grid: &mut Grid, pos: Pos, is_player_spawn: bool) -> Option<Pos> {
    if !grid.is_within_grid(pos.x, pos.y) {
        return None;
    }
    let kind = if is_player_spawn { CellKind::Spawn } else { CellKind::Floor };
    grid.set_kind(pos, kind).then_some(pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with_goal(goal: Pos) -> Grid {
        let mut grid = Grid::build(20);
        grid.set_kind(goal, CellKind::Goal);
        grid
    }

    #[test]
    fn top_edge_goal_gets_inward_spawn_and_diagonal_floor() {
        let goal = Pos::new(0, 7);
        let mut grid = grid_with_goal(goal);

        let forced = expand_end_point(&mut grid, goal);

        assert_eq!(forced, vec![Pos::new(1, 7), Pos::new(1, 8), Pos::new(1, 6)]);
        assert_eq!(grid.kind_at(Pos::new(1, 7)), Some(CellKind::Spawn));
        assert_eq!(grid.kind_at(Pos::new(1, 6)), Some(CellKind::Floor));
        assert_eq!(grid.kind_at(Pos::new(1, 8)), Some(CellKind::Floor));
        assert_eq!(grid.kind_at(Pos::new(0, 6)), Some(CellKind::Edge));
        assert_eq!(grid.kind_at(Pos::new(0, 8)), Some(CellKind::Edge));
        assert_eq!(grid.kind_at(goal), Some(CellKind::Goal));
    }

    #[test]
    fn right_edge_goal_expands_leftwards() {
        let goal = Pos::new(11, 19);
        let mut grid = grid_with_goal(goal);

        expand_end_point(&mut grid, goal);

        assert_eq!(grid.kind_at(Pos::new(11, 18)), Some(CellKind::Spawn));
        assert_eq!(grid.kind_at(Pos::new(10, 18)), Some(CellKind::Floor));
        assert_eq!(grid.kind_at(Pos::new(12, 18)), Some(CellKind::Floor));
        assert_eq!(grid.count_kind(CellKind::Spawn), 1);
    }

    #[test]
    fn goal_next_to_a_corner_skips_border_targets() {
        let goal = Pos::new(19, 1);
        let mut grid = grid_with_goal(goal);

        let forced = expand_end_point(&mut grid, goal);

        assert_eq!(forced, vec![Pos::new(18, 1), Pos::new(18, 2)]);
        assert_eq!(grid.kind_at(Pos::new(18, 0)), Some(CellKind::Edge));
        assert_eq!(grid.kind_at(Pos::new(19, 0)), Some(CellKind::Edge));
    }

    #[test]
    fn expansion_overwrites_carved_floor_with_spawn() {
        let goal = Pos::new(5, 0);
        let mut grid = grid_with_goal(goal);
        grid.carve(Pos::new(5, 1));

        expand_end_point(&mut grid, goal);

        assert_eq!(grid.kind_at(Pos::new(5, 1)), Some(CellKind::Spawn));
        assert_eq!(grid.count_kind(CellKind::Floor), 2);
    }
}
