//! Minimax-based guess selection
//!
//! Scores every untried guess by the number of candidates it is guaranteed to
//! eliminate and keeps all guesses tied for the best score.

use super::calculator::calculate_max_remaining;
use crate::core::Code;
use rayon::prelude::*;

/// Outcome of a minimax scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimaxSelection {
    /// Every guess with the best elimination score, in untried order
    pub guesses: Vec<Code>,
    /// Largest number of candidates any of these guesses can leave
    pub worst_case: usize,
    /// Candidates each of these guesses is guaranteed to eliminate
    pub eliminated: usize,
}

/// Select the guesses that minimize the worst-case remaining candidates
///
/// Returns `None` if there is nothing left to guess. The scan runs in parallel
/// but collects in input order, so ties come back in the same order as
/// `untried` and the result is deterministic.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Code, GameConfig};
/// use mastermind_solver::solver::minimax::select_best_guesses;
///
/// let config = GameConfig::default();
/// let untried = vec![
///     Code::parse("7890", &config).unwrap(),
///     Code::parse("2345", &config).unwrap(),
/// ];
/// let candidates = vec![
///     Code::parse("2345", &config).unwrap(),
///     Code::parse("3456", &config).unwrap(),
/// ];
///
/// let selection = select_best_guesses(&untried, &candidates).unwrap();
/// // 7890 cannot tell the candidates apart; 2345 can
/// assert_eq!(selection.guesses, vec![untried[1]]);
/// assert_eq!(selection.worst_case, 1);
/// ```
#[must_use]
pub fn select_best_guesses(untried: &[Code], candidates: &[Code]) -> Option<MinimaxSelection> {
    let worst_cases: Vec<usize> = untried
        .par_iter()
        .map(|guess| calculate_max_remaining(guess, candidates))
        .collect();

    let worst_case = worst_cases.iter().copied().min()?;

    let guesses = untried
        .iter()
        .zip(&worst_cases)
        .filter(|&(_, &max)| max == worst_case)
        .map(|(guess, _)| *guess)
        .collect();

    Some(MinimaxSelection {
        guesses,
        worst_case,
        eliminated: candidates.len() - worst_case,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CombinationSpace, GameConfig, Response};
    use crate::solver::filter_candidates;

    fn code(text: &str) -> Code {
        Code::parse(text, &GameConfig::default()).unwrap()
    }

    #[test]
    fn selects_lowest_max_remaining() {
        let untried = [code("8901"), code("2345")];
        let candidates = [code("2345"), code("3456"), code("4567"), code("5670")];

        let selection = select_best_guesses(&untried, &candidates).unwrap();

        assert_eq!(selection.guesses, vec![code("2345")]);
        assert!(selection.worst_case < 4);
        assert_eq!(selection.eliminated, 4 - selection.worst_case);
    }

    #[test]
    fn returns_all_ties_in_input_order() {
        // Against a single candidate every guess leaves at most one
        let untried = [code("5678"), code("0123"), code("4567")];
        let candidates = [code("9876")];

        let selection = select_best_guesses(&untried, &candidates).unwrap();

        assert_eq!(selection.guesses, untried.to_vec());
        assert_eq!(selection.worst_case, 1);
        assert_eq!(selection.eliminated, 0);
    }

    #[test]
    fn returns_none_on_empty_untried() {
        assert!(select_best_guesses(&[], &[code("0123")]).is_none());
    }

    #[test]
    fn every_returned_guess_has_the_best_score() {
        let space = CombinationSpace::generate(10, 4).unwrap();
        let candidates = filter_candidates(space.codes(), &code("0123"), Response::new(0, 2));
        let untried = &space.codes()[1..];

        let selection = select_best_guesses(untried, &candidates).unwrap();

        for guess in untried {
            let max = calculate_max_remaining(guess, &candidates);
            assert!(max >= selection.worst_case);
            assert_eq!(selection.guesses.contains(guess), max == selection.worst_case);
        }
    }

    #[test]
    fn deterministic_across_runs() {
        let space = CombinationSpace::generate(6, 3).unwrap();
        let candidates = filter_candidates(space.codes(), &space.codes()[0], Response::new(0, 1));

        let first = select_best_guesses(space.codes(), &candidates);
        let second = select_best_guesses(space.codes(), &candidates);

        assert_eq!(first, second);
    }
}
