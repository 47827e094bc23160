//! Minimax worst-case calculation for peg responses
//!
//! Given a guess and set of candidates, computes the largest group of
//! candidates that would share one response, i.e. how many could remain in the
//! worst case.

use crate::core::{Code, Response};
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a guess
///
/// # Strategy
/// For each possible response this guess could receive:
/// - Count how many candidates would produce that response
/// - Return the maximum count (worst case)
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Code, GameConfig};
/// use mastermind_solver::solver::minimax::calculate_max_remaining;
///
/// let config = GameConfig::default();
/// let guess = Code::parse("0123", &config).unwrap();
/// let candidates = vec![
///     Code::parse("4567", &config).unwrap(),
///     Code::parse("0456", &config).unwrap(),
/// ];
///
/// assert_eq!(calculate_max_remaining(&guess, &candidates), 1);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Code, candidates: &[Code]) -> usize {
    if candidates.is_empty() {
        return 0;
    }

    let response_counts = group_by_response(guess, candidates);

    response_counts.values().max().copied().unwrap_or(0)
}

/// Minimum number of candidates `guess` is guaranteed to eliminate
///
/// `|candidates| - worst case`, whatever the secret turns out to be.
#[must_use]
pub fn elimination_score(guess: &Code, candidates: &[Code]) -> usize {
    candidates.len() - calculate_max_remaining(guess, candidates)
}

/// Group candidates by the response they give to the guess
#[must_use]
pub fn group_by_response(guess: &Code, candidates: &[Code]) -> FxHashMap<Response, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let response = Response::score(guess, candidate);
        *counts.entry(response).or_insert(0) += 1;
    }

    counts
}
