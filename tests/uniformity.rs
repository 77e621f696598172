//! Sample based checks that every possible ring is equally likely.

use std::collections::HashMap;

use approx::assert_abs_diff_eq;
use assassin::core::generate_cycle;
use rand::{SeedableRng, rngs::StdRng};

fn factorial(n: usize) -> usize {
    (1..=n).product()
}

/// Run `trials` assignments over `n` players and count how often each
/// ring came up. Rings are keyed by the walk starting at player 0.
fn sample_rings(n: usize, trials: usize, seed: u64) -> HashMap<Vec<usize>, usize> {
    let players: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut counts = HashMap::new();
    for _ in 0..trials {
        let ring = generate_cycle(&players, &mut rng).unwrap();
        let walk: Vec<usize> = ring.walk(&0).copied().collect();
        *counts.entry(walk).or_insert(0) += 1;
    }
    counts
}

fn chi_square(counts: &HashMap<Vec<usize>, usize>, categories: usize, trials: usize) -> f64 {
    let expected = trials as f64 / categories as f64;
    let seen: f64 = counts
        .values()
        .map(|c| {
            let diff = *c as f64 - expected;
            diff * diff / expected
        })
        .sum();
    // Categories that never showed up still count.
    let missing = (categories - counts.len()) as f64 * expected;
    seen + missing
}

#[test_log::test]
fn test_three_players_two_rings() {
    let trials = 20_000;
    let counts = sample_rings(3, trials, 1);
    assert_eq!(2, counts.len());

    let forward = counts[&vec![0, 1, 2]] as f64 / trials as f64;
    assert_abs_diff_eq!(0.5, forward, epsilon = 0.02);
}

#[test_log::test]
fn test_four_players_chi_square() {
    let trials = 60_000;
    let categories = factorial(3);
    let counts = sample_rings(4, trials, 2);
    assert_eq!(categories, counts.len());

    // 5 degrees of freedom, p = 0.001
    let stat = chi_square(&counts, categories, trials);
    assert!(stat < 20.515, "chi square {stat} too large");
}

#[test_log::test]
fn test_five_players_chi_square() {
    let trials = 120_000;
    let categories = factorial(4);
    let counts = sample_rings(5, trials, 3);
    assert_eq!(categories, counts.len());

    // 23 degrees of freedom, p = 0.001
    let stat = chi_square(&counts, categories, trials);
    assert!(stat < 49.728, "chi square {stat} too large");

    for count in counts.values() {
        let share = *count as f64 / trials as f64;
        assert_abs_diff_eq!(1.0 / categories as f64, share, epsilon = 0.005);
    }
}

#[test_log::test]
fn test_everyone_targets_everyone_equally() {
    // Each player should be equally likely to draw any other player.
    let n = 6;
    let trials = 60_000;
    let players: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(4);
    let mut hits = vec![vec![0usize; n]; n];
    for _ in 0..trials {
        let ring = generate_cycle(&players, &mut rng).unwrap();
        for (player, target) in ring.iter() {
            hits[*player][*target] += 1;
        }
    }

    for (player, row) in hits.iter().enumerate() {
        assert_eq!(0, row[player]);
        for (target, count) in row.iter().enumerate() {
            if target == player {
                continue;
            }
            let share = *count as f64 / trials as f64;
            assert_abs_diff_eq!(1.0 / (n - 1) as f64, share, epsilon = 0.01);
        }
    }
}
