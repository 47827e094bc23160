//! Candidate elimination
//!
//! Knuth's elimination step: a candidate that would not have produced the
//! observed response, had it been the secret, cannot be the secret.

use crate::core::{Code, Response};

/// Keep the candidates consistent with `response` to `guess`
///
/// Order is preserved, so a filtered list stays in generation order.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{CombinationSpace, Response};
/// use mastermind_solver::solver::filter_candidates;
///
/// let space = CombinationSpace::generate(10, 4).unwrap();
/// let guess = space.codes()[0]; // 0123
///
/// let remaining = filter_candidates(space.codes(), &guess, Response::new(4, 0));
/// assert_eq!(remaining, vec![guess]);
/// ```
#[must_use]
pub fn filter_candidates(candidates: &[Code], guess: &Code, response: Response) -> Vec<Code> {
    candidates
        .iter()
        .filter(|candidate| Response::score(guess, candidate) == response)
        .copied()
        .collect()
}

/// Count the candidates consistent with `response` without allocating
#[must_use]
pub fn count_consistent(candidates: &[Code], guess: &Code, response: Response) -> usize {
    candidates
        .iter()
        .filter(|candidate| Response::score(guess, candidate) == response)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CombinationSpace, GameConfig};

    fn code(text: &str) -> Code {
        Code::parse(text, &GameConfig::default()).unwrap()
    }

    #[test]
    fn keeps_exactly_the_consistent_codes() {
        let space = CombinationSpace::generate(10, 4).unwrap();
        let guess = code("0123");
        let response = Response::new(1, 2);

        let remaining = filter_candidates(space.codes(), &guess, response);

        assert!(!remaining.is_empty());
        for candidate in space.codes() {
            let consistent = Response::score(&guess, candidate) == response;
            assert_eq!(remaining.contains(candidate), consistent);
        }
    }

    #[test]
    fn secret_survives_its_own_response() {
        let space = CombinationSpace::generate(10, 4).unwrap();
        let secret = code("3719");
        let guess = code("0123");
        let response = Response::score(&guess, &secret);

        let remaining = filter_candidates(space.codes(), &guess, response);
        assert!(remaining.contains(&secret));
    }

    #[test]
    fn preserves_generation_order() {
        let space = CombinationSpace::generate(10, 4).unwrap();
        let remaining = filter_candidates(space.codes(), &code("0123"), Response::new(0, 0));

        assert!(remaining.windows(2).all(|w| w[0] < w[1]));
        // Only digits 4-9 are left: 6 * 5 * 4 * 3 codes
        assert_eq!(remaining.len(), 360);
    }

    #[test]
    fn impossible_response_leaves_nothing() {
        let space = CombinationSpace::generate(10, 4).unwrap();
        let remaining = filter_candidates(space.codes(), &code("0123"), Response::new(3, 1));
        assert!(remaining.is_empty());
    }

    #[test]
    fn never_grows() {
        let space = CombinationSpace::generate(10, 4).unwrap();
        let first = filter_candidates(space.codes(), &code("0123"), Response::new(0, 2));
        let second = filter_candidates(&first, &code("4567"), Response::new(1, 0));

        assert!(first.len() <= space.len());
        assert!(second.len() <= first.len());
    }

    #[test]
    fn count_matches_filter() {
        let space = CombinationSpace::generate(10, 4).unwrap();
        let guess = code("0123");
        for response in [Response::new(0, 0), Response::new(2, 2), Response::new(0, 4)] {
            assert_eq!(
                count_consistent(space.codes(), &guess, response),
                filter_candidates(space.codes(), &guess, response).len()
            );
        }
    }
}
