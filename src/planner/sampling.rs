use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::planner::constants::{MAX_SAMPLED_FOODS, MIN_SAMPLED_FOODS};

/// Source of uniform random numbers used for food sampling.
pub trait RandomSource {
    /// Next value in `[0, 1)`.
    fn next(&mut self) -> f64;
}

/// `RandomSource` backed by any `rand` generator.
pub struct RngSource<R: Rng>(pub R);

impl RngSource<StdRng> {
    /// Reproducible source for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        RngSource(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from OS entropy.
    pub fn from_entropy() -> Self {
        RngSource(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next(&mut self) -> f64 {
        self.0.gen_range(0.0..1.0)
    }
}

/// Replays a fixed list of values, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    pos: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, pos: 0 }
    }
}

impl RandomSource for SequenceSource {
    fn next(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.pos % self.values.len()];
        self.pos += 1;
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

/// Number of foods to pick for a meal with `available` selections.
pub fn sample_size(available: usize) -> usize {
    MAX_SAMPLED_FOODS.min(MIN_SAMPLED_FOODS.max(available))
}

/// Fisher-Yates shuffle driven by `rng`.
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = ((rng.next() * (i + 1) as f64) as usize).min(i);
        items.swap(i, j);
    }
}

/// Shuffle the selections and take a prefix of `sample_size` items.
///
/// Fewer than `MIN_SAMPLED_FOODS` selections yields all of them.
pub fn sample_foods<'a, I>(selections: I, rng: &mut dyn RandomSource) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut pool: Vec<String> = selections.into_iter().map(str::to_string).collect();
    let take = sample_size(pool.len());
    shuffle(&mut pool, rng);
    pool.truncate(take);
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_sample_size_bounds() {
        assert_eq!(sample_size(2), 3);
        assert_eq!(sample_size(3), 3);
        assert_eq!(sample_size(4), 4);
        assert_eq!(sample_size(9), 4);
    }

    #[test]
    fn test_sample_two_returns_both() {
        let mut rng = SequenceSource::new(vec![0.5]);
        let mut sampled = sample_foods(["Eggs", "Toast"], &mut rng);
        sampled.sort();
        assert_eq!(sampled, vec!["Eggs", "Toast"]);
    }

    #[test]
    fn test_sample_many_returns_four_distinct() {
        let foods = ["A", "B", "C", "D", "E", "F"];
        let mut rng = RngSource::seeded(7);
        let sampled = sample_foods(foods, &mut rng);
        assert_eq!(sampled.len(), 4);
        let unique: BTreeSet<_> = sampled.iter().collect();
        assert_eq!(unique.len(), 4);
        assert!(sampled.iter().all(|f| foods.contains(&f.as_str())));
    }

    #[test]
    fn test_zero_sequence_rotates_first_item_to_end() {
        // j is always 0: each step swaps position i with the head.
        let mut items = vec![1, 2, 3, 4];
        shuffle(&mut items, &mut SequenceSource::new(vec![0.0]));
        assert_eq!(items, vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let foods = ["A", "B", "C", "D", "E", "F", "G"];
        let first = sample_foods(foods, &mut RngSource::seeded(42));
        let second = sample_foods(foods, &mut RngSource::seeded(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_sequence_source_cycles_and_clamps() {
        let mut rng = SequenceSource::new(vec![0.25, 1.5]);
        assert_eq!(rng.next(), 0.25);
        assert!(rng.next() < 1.0);
        assert_eq!(rng.next(), 0.25);
    }
}
