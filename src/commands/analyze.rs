//! Guess analysis command
//!
//! Shows how a guess would partition the full combination space.

use crate::core::{Code, CombinationSpace, GameConfig, Response};
use crate::solver::minimax::{elimination_score, group_by_response};
use anyhow::{Context, Result};

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Code,
    pub groups: Vec<(Response, usize)>,
    pub worst_case: usize,
    pub eliminated: usize,
    pub total_candidates: usize,
}

/// Partition the full space by the response each secret would give to `guess`
///
/// Groups are sorted by response (fewest blacks, then fewest whites first).
///
/// # Errors
///
/// Returns an error if the guess is not a valid code for `game`.
pub fn analyze_guess(guess: &str, game: &GameConfig) -> Result<AnalysisResult> {
    let guess_code =
        Code::parse(guess, game).with_context(|| format!("Invalid guess '{guess}'"))?;
    let space = CombinationSpace::for_config(game);

    let mut groups: Vec<(Response, usize)> = group_by_response(&guess_code, space.codes())
        .into_iter()
        .collect();
    groups.sort_unstable();

    let eliminated = elimination_score(&guess_code, space.codes());

    Ok(AnalysisResult {
        guess: guess_code,
        worst_case: space.len() - eliminated,
        eliminated,
        total_candidates: space.len(),
        groups,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_valid_guess() {
        let result = analyze_guess("0123", &GameConfig::default()).unwrap();

        assert_eq!(result.guess.to_string(), "0123");
        assert_eq!(result.total_candidates, 5040);
        assert_eq!(result.worst_case, 1440);
        assert_eq!(result.eliminated, 3600);
        assert_eq!(result.groups.len(), 14);
        assert_eq!(result.groups[0], (Response::new(0, 0), 360));
    }

    #[test]
    fn analyze_invalid_guess() {
        assert!(analyze_guess("0023", &GameConfig::default()).is_err());
        assert!(analyze_guess("abc", &GameConfig::default()).is_err());
    }

    #[test]
    fn groups_cover_the_space() {
        let game = GameConfig::new(6, 4).unwrap();
        let result = analyze_guess("5432", &game).unwrap();

        let total: usize = result.groups.iter().map(|(_, n)| n).sum();
        assert_eq!(total, 360);
        assert_eq!(
            result.groups.iter().map(|(_, n)| *n).max(),
            Some(result.worst_case)
        );
    }
}
