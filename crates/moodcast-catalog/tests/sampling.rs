//! Statistical checks for the weighted sampler.
//!
//! Every test draws from a seeded ChaCha8 RNG so runs are reproducible. The
//! tolerances are several standard deviations wide; they hold for any seed.

use std::collections::HashMap;

use moodcast_catalog::StateCatalog;
use moodcast_core::config::default_states;
use moodcast_core::StateEntry;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn entry(key: &str, weight: u32) -> StateEntry {
    StateEntry::new(key, weight, key.to_uppercase())
}

fn count_draws(catalog: &StateCatalog, seed: u64, draws: usize) -> HashMap<String, usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut counts: HashMap<String, usize> = HashMap::new();
    for _ in 0..draws {
        *counts.entry(catalog.sample(&mut rng).key.clone()).or_default() += 1;
    }
    counts
}

#[test]
fn equal_weights_split_evenly() {
    let catalog = StateCatalog::new(&[entry("a", 1), entry("b", 1)]).unwrap();
    let counts = count_draws(&catalog, 42, 10_000);

    let a = counts.get("a").copied().unwrap_or(0);
    let b = counts.get("b").copied().unwrap_or(0);
    assert_eq!(a + b, 10_000);
    assert!((4_800..=5_200).contains(&a), "a drawn {a} times");
    assert!((4_800..=5_200).contains(&b), "b drawn {b} times");
}

#[test]
fn weighted_ratio_is_respected() {
    // 3:1 weights should land close to a 7500/2500 split over 10k draws.
    let catalog = StateCatalog::new(&[entry("common", 3), entry("rare", 1)]).unwrap();
    let counts = count_draws(&catalog, 7, 10_000);

    let common = counts.get("common").copied().unwrap_or(0);
    assert!(
        (7_200..=7_800).contains(&common),
        "common drawn {common} times"
    );
}

#[test]
fn every_default_state_is_reachable() {
    let states = default_states();
    let catalog = StateCatalog::new(&states).unwrap();
    let counts = count_draws(&catalog, 99, 50_000);

    for state in &states {
        let seen = counts.get(&state.key).copied().unwrap_or(0);
        assert!(seen > 0, "state {} was never drawn", state.key);
    }
}

#[test]
fn fixed_seed_reproduces_the_same_sequence() {
    let catalog = StateCatalog::new(&[entry("a", 2), entry("b", 5), entry("c", 1)]).unwrap();

    let run = |seed: u64| -> Vec<String> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        (0..100)
            .map(|_| catalog.sample(&mut rng).key.clone())
            .collect()
    };

    assert_eq!(run(13), run(13));
}
