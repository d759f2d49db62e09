//! Guard placement on floor tiles far from the goal.

use log::warn;

use crate::error::GenerationError;
use crate::random::{DungeonRng, are_numbers_distance_apart, filter_list, pick};
use crate::types::Pos;

pub(super) struct GuardContext<'a> {
    pub(super) floor_tiles: &'a [Pos],
    pub(super) goal: Pos,
    pub(super) size: usize,
    pub(super) guard_count: usize,
}

/// Floor tiles at least half the grid away from the goal on either axis.
fn guard_candidates(floor_tiles: &[Pos], goal: Pos, size: usize) -> Vec<Pos> {
    let distance = (size / 2) as i32;
    filter_list(floor_tiles, |tile| {
        are_numbers_distance_apart(tile.x, goal.x, distance)
            || are_numbers_distance_apart(tile.y, goal.y, distance)
    })
}

/// Draws guard positions uniformly, with replacement, from the qualifying candidates.
pub(super) fn spawn_guards(
    context: &GuardContext<'_>,
    rng: &mut (impl DungeonRng + ?Sized),
) -> Result<Vec<Pos>, GenerationError> {
    let candidates = guard_candidates(context.floor_tiles, context.goal, context.size);
    if candidates.is_empty() {
        warn!(
            "no guard site among {} floor tiles for goal {:?}",
            context.floor_tiles.len(),
            context.goal
        );
        return Err(GenerationError::NoQualifyingGuardSite {
            size: context.size,
            goal: context.goal,
        });
    }

    let mut guards = Vec::with_capacity(context.guard_count);
    for _ in 0..context.guard_count {
        if let Some(&pos) = pick(rng, &candidates) {
            guards.push(pos);
        }
    }
    Ok(guards)
}
