//! Benchmark command
//!
//! Plays independent games against randomly drawn secrets and measures
//! throughput.

use super::solve::play_game;
use crate::core::{Code, CombinationSpace, GameConfig};
use crate::error::SolverError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Draw `count` secrets uniformly from the combination space
///
/// The same `seed` always yields the same secrets; without one the draw is
/// seeded from the thread-local generator.
#[must_use]
pub fn random_secrets(game: &GameConfig, count: usize, seed: Option<u64>) -> Vec<Code> {
    let space = CombinationSpace::for_config(game);
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    (0..count)
        .filter_map(|_| space.codes().choose(&mut rng).copied())
        .collect()
}

/// Run benchmark on a set of secrets
///
/// # Errors
///
/// Returns the solver's error if it rejects a truthful response.
pub fn run_benchmark(game: &GameConfig, secrets: &[Code]) -> Result<BenchmarkResult, SolverError> {
    let start = Instant::now();
    let mut solved = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for secret in secrets {
        let result = play_game(game, *secret)?;
        let guesses = result.guesses.len();

        if result.success {
            solved += 1;
        }
        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_games = secrets.len();

    Ok(BenchmarkResult {
        total_games,
        solved,
        total_guesses,
        average_guesses: if total_games > 0 {
            total_guesses as f64 / total_games as f64
        } else {
            0.0
        },
        min_guesses: if total_games > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
