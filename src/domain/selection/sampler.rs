//! Sampling algorithms behind the draw.
//!
//! Both functions are pure apart from the random source, which callers pass
//! in so tests can seed it.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;

use super::{SelectionError, Winners, ROLE_COUNT};

/// Returns `min(count, population)` distinct indices in `[0, population)`.
///
/// Uses rejection sampling: draw uniformly, keep unseen indices. The target
/// is capped at `population` so the loop always terminates.
pub fn distinct_indices<R: Rng + ?Sized>(
    rng: &mut R,
    population: usize,
    count: usize,
) -> BTreeSet<usize> {
    let target = count.min(population);
    let mut picked = BTreeSet::new();
    while picked.len() < target {
        picked.insert(rng.gen_range(0..population));
    }
    picked
}

/// Shuffles the candidates uniformly and takes the first `count`.
///
/// # Errors
///
/// - `InsufficientCandidates` if there are fewer than `count` candidates
pub fn draw_ranked<R: Rng + ?Sized>(
    rng: &mut R,
    candidates: &[String],
    count: usize,
) -> Result<Vec<String>, SelectionError> {
    if candidates.len() < count {
        return Err(SelectionError::InsufficientCandidates {
            required: count,
            actual: candidates.len(),
        });
    }

    let mut shuffled = candidates.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    Ok(shuffled)
}

/// Draws one winner per role; winner `i` takes `Role::ALL[i]`.
pub fn draw_winners<R: Rng + ?Sized>(
    rng: &mut R,
    candidates: &[String],
) -> Result<Winners, SelectionError> {
    let ranked = draw_ranked(rng, candidates, ROLE_COUNT)?;
    Winners::try_from(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    proptest! {
        #[test]
        fn distinct_indices_returns_capped_count_in_range(
            population in 1usize..60,
            count in 0usize..10,
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = distinct_indices(&mut rng, population, count);

            prop_assert_eq!(picked.len(), count.min(population));
            prop_assert!(picked.iter().all(|&i| i < population));
        }

        #[test]
        fn draw_winners_returns_three_distinct_slots(
            size in 3usize..25,
            seed in any::<u64>(),
        ) {
            let candidates: Vec<String> = (0..size).map(|i| format!("member-{}", i)).collect();
            let mut rng = StdRng::seed_from_u64(seed);
            let winners = draw_winners(&mut rng, &candidates).unwrap();

            let unique: BTreeSet<&String> = winners.names().iter().collect();
            prop_assert_eq!(unique.len(), 3);
            prop_assert!(winners.names().iter().all(|w| candidates.contains(w)));
        }
    }

    #[test]
    fn distinct_indices_with_count_above_population_returns_everything() {
        let mut rng = StdRng::seed_from_u64(7);
        let picked = distinct_indices(&mut rng, 3, 10);
        assert_eq!(picked.into_iter().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn distinct_indices_with_zero_count_is_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(distinct_indices(&mut rng, 5, 0).is_empty());
    }

    #[test]
    fn distinct_indices_with_empty_population_is_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(distinct_indices(&mut rng, 0, 3).is_empty());
    }

    #[test]
    fn draw_winners_rejects_short_rosters() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = draw_winners(&mut rng, &names(&["Alice", "Bob"]));
        assert_eq!(
            result,
            Err(SelectionError::InsufficientCandidates {
                required: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn draw_winners_with_exactly_three_uses_everyone() {
        let mut rng = StdRng::seed_from_u64(99);
        let candidates = names(&["Alice", "Bob", "Charlie"]);
        let winners = draw_winners(&mut rng, &candidates).unwrap();

        let mut drawn = winners.names().to_vec();
        drawn.sort();
        assert_eq!(drawn, candidates);
    }

    #[test]
    fn duplicate_names_fill_separate_slots() {
        let mut rng = StdRng::seed_from_u64(3);
        let candidates = names(&["Sam", "Sam", "Sam"]);
        let winners = draw_winners(&mut rng, &candidates).unwrap();
        assert_eq!(winners.names(), &["Sam", "Sam", "Sam"]);
    }

    #[test]
    fn every_candidate_wins_with_roughly_equal_frequency() {
        let mut rng = StdRng::seed_from_u64(2024);
        let candidates = names(&["Alice", "Bob", "Charlie", "Dana", "Eve", "Frank"]);
        let trials = 6000;
        let mut wins: HashMap<String, usize> = HashMap::new();

        for _ in 0..trials {
            for name in draw_winners(&mut rng, &candidates).unwrap().names() {
                *wins.entry(name.clone()).or_default() += 1;
            }
        }

        // Each candidate is expected in half of all draws (3 of 6 slots).
        for name in &candidates {
            let count = wins.get(name).copied().unwrap_or(0);
            assert!(
                (2700..=3300).contains(&count),
                "{} won {} times out of {}",
                name,
                count,
                trials
            );
        }
    }

    #[test]
    fn first_role_is_not_biased_towards_early_entries() {
        let mut rng = StdRng::seed_from_u64(77);
        let candidates = names(&["A", "B", "C", "D"]);
        let trials = 8000;
        let mut first: HashMap<String, usize> = HashMap::new();

        for _ in 0..trials {
            let winners = draw_winners(&mut rng, &candidates).unwrap();
            *first.entry(winners.names()[0].clone()).or_default() += 1;
        }

        for name in &candidates {
            let count = first.get(name).copied().unwrap_or(0);
            assert!((1700..=2300).contains(&count), "{} first {} times", name, count);
        }
    }
}
