//! Secret solving command
//!
//! Plays the solver against a known secret and returns the game transcript.

use crate::core::{Code, GameConfig, Response};
use crate::error::SolverError;
use crate::solver::{Solver, count_consistent};
use anyhow::{Context, Result};

/// Configuration for solving a secret
pub struct SolveConfig {
    pub secret: String,
    pub game: GameConfig,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String, game: GameConfig) -> Self {
        Self { secret, game }
    }
}

/// Result of solving a secret
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub secret: Code,
    pub code_len: usize,
}

/// A single guess in the game
pub struct GuessStep {
    pub guess: Code,
    pub response: Response,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a secret given as text
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not a valid code (wrong length, digit out of range, repeated digit)
/// - The solver rejects a response, which would indicate a scoring bug
pub fn solve_secret(config: &SolveConfig) -> Result<SolveResult> {
    let secret = Code::parse(&config.secret, &config.game)
        .with_context(|| format!("Invalid secret '{}'", config.secret))?;

    Ok(play_game(&config.game, secret)?)
}

/// Play one game against `secret`, answering every guess truthfully
///
/// Running out of guesses is reported as an unsuccessful result, not an error.
///
/// # Errors
///
/// Returns the solver's error if it rejects a truthful response, which only
/// happens if `secret` is not part of the combination space.
pub fn play_game(game: &GameConfig, secret: Code) -> Result<SolveResult, SolverError> {
    let len = game.code_len();
    let mut solver = Solver::new(*game);
    let mut guesses = Vec::new();
    let mut candidates_before = game.space_size();
    let mut guess = solver.first_guess()?;

    loop {
        let response = Response::score(&guess, &secret);
        let solved = response.is_perfect(len);
        let candidates_after = if solved {
            1
        } else {
            count_consistent(solver.candidates(), &guess, response)
        };

        guesses.push(GuessStep {
            guess,
            response,
            candidates_before,
            candidates_after,
        });

        if solved {
            return Ok(SolveResult {
                success: true,
                guesses,
                secret,
                code_len: len,
            });
        }

        match solver.guess_again(response) {
            Ok(next) => {
                guess = next;
                candidates_before = candidates_after;
            }
            Err(SolverError::Exhausted { .. }) => {
                return Ok(SolveResult {
                    success: false,
                    guesses,
                    secret,
                    code_len: len,
                });
            }
            Err(e) => return Err(e),
        }
    }
}
