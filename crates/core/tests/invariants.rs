use std::collections::{BTreeSet, VecDeque};

use dungeon::{CellKind, Dungeon, GenerationError, Pos, generate};
use proptest::prelude::*;

fn check_invariants(dungeon: &Dungeon, requested: usize) -> Result<(), TestCaseError> {
    let size = dungeon.size();
    let last = size as i32 - 1;
    prop_assert_eq!(size, requested.clamp(20, 50));
    prop_assert_eq!(dungeon.grid.cells().count(), size * size);

    let goals: Vec<Pos> = dungeon
        .grid
        .cells()
        .filter(|cell| cell.kind() == CellKind::Goal)
        .map(|cell| cell.pos())
        .collect();
    prop_assert_eq!(goals, vec![dungeon.goal]);
    let goal = dungeon.goal;
    let on_row_edge = goal.x == 0 || goal.x == last;
    let on_col_edge = goal.y == 0 || goal.y == last;
    prop_assert!(on_row_edge != on_col_edge, "goal {:?} must be on one border, not a corner", goal);

    for cell in dungeon.grid.cells() {
        let Pos { x, y } = cell.pos();
        if dungeon.grid.is_edge_of_grid(x, y) && cell.pos() != goal {
            prop_assert_eq!(cell.kind(), CellKind::Edge, "border cell {:?} overwritten", (x, y));
        }
        prop_assert_ne!(cell.kind(), CellKind::Wall);
    }

    for (dx, dy) in [(0, -1), (0, 1), (1, 0), (-1, 0), (-1, 1), (1, 1), (1, -1), (-1, -1)] {
        let forced = goal.offset(dx, dy);
        if dungeon.is_within_grid(forced.x, forced.y) {
            let kind = dungeon.kind_at(forced);
            prop_assert!(
                matches!(kind, Some(CellKind::Floor | CellKind::Spawn)),
                "forced neighbor {:?} is {:?}",
                forced,
                kind
            );
        }
    }

    prop_assert!(dungeon.grid.count_kind(CellKind::Spawn) >= 1);
    prop_assert_eq!(dungeon.kind_at(dungeon.player_spawn), Some(CellKind::Spawn));

    prop_assert_eq!(dungeon.guards.len(), 6);
    let half = size / 2;
    for guard in &dungeon.guards {
        prop_assert!(
            (guard.x.abs_diff(goal.x) as usize) >= half
                || (guard.y.abs_diff(goal.y) as usize) >= half,
            "guard {:?} is too close to goal {:?}",
            guard,
            goal
        );
        let kind = dungeon.kind_at(*guard);
        prop_assert!(matches!(kind, Some(CellKind::Floor | CellKind::Spawn)));
    }

    Ok(())
}

fn walkable_region_count(dungeon: &Dungeon) -> usize {
    let walkable: BTreeSet<Pos> = dungeon.floor_tiles.iter().copied().collect();
    let mut seen = BTreeSet::new();
    let mut regions = 0;
    for &start in &walkable {
        if !seen.insert(start) {
            continue;
        }
        regions += 1;
        let mut open = VecDeque::from([start]);
        while let Some(pos) = open.pop_front() {
            for next in [pos.offset(-1, 0), pos.offset(1, 0), pos.offset(0, -1), pos.offset(0, 1)] {
                if walkable.contains(&next) && seen.insert(next) {
                    open.push_back(next);
                }
            }
        }
    }
    regions
}

#[test]
fn every_size_in_range_generates_a_full_grid() {
    for size in 20..=50 {
        let dungeon = (0..50_u64)
            .find_map(|seed| generate(size, seed).ok())
            .unwrap_or_else(|| panic!("no seed generated size {size}"));
        assert_eq!(dungeon.size(), size);
        assert_eq!(dungeon.grid.cells().count(), size * size);
    }
}

#[test]
fn walkable_area_splits_into_few_regions() {
    // Two walkers and the goal pocket give at most three disconnected regions.
    for seed in 0..40_u64 {
        if let Ok(dungeon) = generate(25, seed) {
            let regions = walkable_region_count(&dungeon);
            assert!((1..=3).contains(&regions), "seed {seed} produced {regions} regions");
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]
    #[test]
    fn generated_dungeons_hold_every_invariant(seed in any::<u64>(), size in 0_usize..=80) {
        match generate(size, seed) {
            Ok(dungeon) => check_invariants(&dungeon, size)?,
            Err(GenerationError::NoQualifyingGuardSite { .. }) => {}
            Err(other) => return Err(TestCaseError::fail(format!("unexpected error {other}"))),
        }
    }

    #[test]
    fn same_seed_is_bit_identical(seed in any::<u64>(), size in 20_usize..=50) {
        let first = generate(size, seed);
        let second = generate(size, seed);
        prop_assert_eq!(first, second);
    }
}
