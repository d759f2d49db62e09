//! Random source seam and the small selection helpers generation is built from.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

/// The only randomness generation consumes. Implemented for every `rand_core` generator
/// so tests and tools can inject a seeded stream.
pub trait DungeonRng {
    /// Uniform integer in `min..=max`.
    fn range_inclusive(&mut self, min: i32, max: i32) -> i32;

    fn coin_flip(&mut self) -> bool;

    /// Returns `a` or `b` with equal probability.
    fn either(&mut self, a: i32, b: i32) -> i32 {
        if self.coin_flip() { a } else { b }
    }

    fn range_many(&mut self, min: i32, max: i32, count: usize) -> Vec<i32> {
        (0..count).map(|_| self.range_inclusive(min, max)).collect()
    }
}

impl<R: Rng + ?Sized> DungeonRng for R {
    fn range_inclusive(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min <= max);
        let span = (i64::from(max) - i64::from(min) + 1) as u64;
        min + (self.next_u64() % span) as i32
    }

    fn coin_flip(&mut self) -> bool {
        self.next_u32() & 1 == 1
    }
}

pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Picks one element uniformly. `None` only for an empty slice.
pub fn pick<'a, T>(rng: &mut (impl DungeonRng + ?Sized), items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let index = rng.range_inclusive(0, items.len() as i32 - 1);
    items.get(index as usize)
}

pub fn filter_list<T: Clone>(items: &[T], predicate: impl Fn(&T) -> bool) -> Vec<T> {
    items.iter().filter(|item| predicate(item)).cloned().collect()
}

pub fn are_numbers_distance_apart(a: i32, b: i32, distance: i32) -> bool {
    a.abs_diff(b) >= distance.unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_inclusive_stays_inside_requested_bounds() {
        let mut rng = seeded_rng(12_345);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..500 {
            let value = rng.range_inclusive(7, 13);
            assert!((7..=13).contains(&value));
            seen_min |= value == 7;
            seen_max |= value == 13;
        }
        assert!(seen_min && seen_max, "both endpoints should be reachable");
    }

    #[test]
    fn either_only_returns_the_two_endpoints() {
        let mut rng = seeded_rng(3);
        let picks: Vec<i32> = (0..200).map(|_| rng.either(0, 19)).collect();
        assert!(picks.iter().all(|&value| value == 0 || value == 19));
        assert!(picks.contains(&0) && picks.contains(&19));
    }

    #[test]
    fn same_seed_yields_same_stream() {
        let mut a = seeded_rng(99);
        let mut b = seeded_rng(99);
        assert_eq!(a.range_many(1, 18, 16), b.range_many(1, 18, 16));
    }

    #[test]
    fn pick_handles_empty_slice() {
        let mut rng = seeded_rng(1);
        let empty: [u8; 0] = [];
        assert_eq!(pick(&mut rng, &empty), None);
        assert_eq!(pick(&mut rng, &[42]), Some(&42));
    }

    #[test]
    fn distance_predicate_is_symmetric_and_inclusive() {
        assert!(are_numbers_distance_apart(0, 10, 10));
        assert!(are_numbers_distance_apart(10, 0, 10));
        assert!(!are_numbers_distance_apart(1, 10, 10));
    }

    #[test]
    fn filter_list_keeps_order() {
        let kept = filter_list(&[5, 1, 8, 3, 9], |&value| value > 4);
        assert_eq!(kept, vec![5, 8, 9]);
    }
}
