//! Main Mastermind solver interface

use super::filter::filter_candidates;
use super::minimax::select_best_guesses;
use crate::core::{Code, CombinationSpace, GameConfig, Response};
use crate::error::SolverError;
use std::fmt;

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverState {
    /// No guess made yet
    Fresh,
    /// At least one guess made, code not cracked
    InProgress,
    /// The last guess received an all-black response
    Solved,
    /// The guess limit was reached without cracking the code
    Exhausted,
}

impl fmt::Display for SolverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fresh => "fresh",
            Self::InProgress => "in progress",
            Self::Solved => "solved",
            Self::Exhausted => "exhausted",
        };
        f.write_str(name)
    }
}

/// Main Mastermind solver
///
/// Owns the per-game state: the codes not yet guessed, the candidates still
/// consistent with every response, and the last guess. All of it is plain
/// owned data; the solver does no locking, so a host sharing it between
/// threads serializes calls itself.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Code, GameConfig, Response};
/// use mastermind_solver::solver::Solver;
///
/// let config = GameConfig::default();
/// let secret = Code::parse("3719", &config).unwrap();
/// let mut solver = Solver::new(config);
///
/// let mut guess = solver.first_guess().unwrap();
/// let mut turns = 1;
/// while guess != secret {
///     guess = solver.guess_again(Response::score(&guess, &secret)).unwrap();
///     turns += 1;
/// }
/// assert!(turns <= 7);
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    config: GameConfig,
    untried: Vec<Code>,
    candidates: Vec<Code>,
    last_guess: Option<Code>,
    /// Whether `last_guess` was still a candidate when it was played
    last_guess_live: bool,
    guesses_made: usize,
    state: SolverState,
}

impl Solver {
    /// Create a solver ready for a fresh game
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let mut solver = Self {
            config,
            untried: Vec::new(),
            candidates: Vec::new(),
            last_guess: None,
            last_guess_live: false,
            guesses_made: 0,
            state: SolverState::Fresh,
        };
        solver.reset();
        solver
    }

    /// Create a solver for `base` digits and codes of `len` positions
    ///
    /// # Errors
    /// Returns [`SolverError::Configuration`] for invalid dimensions.
    pub fn with_dimensions(base: u8, len: usize) -> Result<Self, SolverError> {
        GameConfig::new(base, len).map(Self::new)
    }

    /// Discard the game and start over with the full combination space
    pub fn reset(&mut self) {
        let codes = CombinationSpace::for_config(&self.config).into_codes();
        self.candidates.clone_from(&codes);
        self.untried = codes;
        self.last_guess = None;
        self.last_guess_live = false;
        self.guesses_made = 0;
        self.state = SolverState::Fresh;
    }

    /// Open the game
    ///
    /// Returns the first code in generation order without scoring anything:
    /// before any response every opening is equivalent.
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidState`] unless the solver is fresh.
    pub fn first_guess(&mut self) -> Result<Code, SolverError> {
        self.expect_state(SolverState::Fresh, "first_guess")?;

        let guess = *self.untried.first().ok_or(SolverError::Exhausted { guesses: 0 })?;
        Ok(self.commit(guess))
    }

    /// Take the response to the last guess and choose the next one
    ///
    /// An all-black response marks the game solved and hands back the guess it
    /// confirmed. Otherwise the candidates are narrowed to those consistent with
    /// the response, the minimax scan picks the best untried guesses, and the
    /// first of them that could itself be the secret is preferred.
    ///
    /// # Errors
    /// - [`SolverError::InvalidState`] unless a game is in progress
    /// - [`SolverError::InconsistentResponse`] if the response cannot occur, if
    ///   it is all black for a guess earlier responses ruled out, or if no
    ///   candidate is consistent with it; the solver state is unchanged
    /// - [`SolverError::Exhausted`] once the configured guess limit is used up
    pub fn guess_again(&mut self, response: Response) -> Result<Code, SolverError> {
        self.expect_state(SolverState::InProgress, "guess_again")?;
        let last_guess = self.last_guess.ok_or(SolverError::InvalidState {
            operation: "guess_again",
            state: self.state,
        })?;

        let len = self.config.code_len();
        // A perfect response is only possible if the guess could be the secret
        if !response.is_possible(len) || (response.is_perfect(len) && !self.last_guess_live) {
            return Err(SolverError::InconsistentResponse {
                guess: last_guess,
                response,
            });
        }

        if response.is_perfect(len) {
            self.state = SolverState::Solved;
            return Ok(last_guess);
        }

        let candidates = filter_candidates(&self.candidates, &last_guess, response);
        if candidates.is_empty() {
            return Err(SolverError::InconsistentResponse {
                guess: last_guess,
                response,
            });
        }

        if let Some(limit) = self.config.max_guesses()
            && self.guesses_made >= limit
        {
            self.candidates = candidates;
            self.state = SolverState::Exhausted;
            return Err(SolverError::Exhausted {
                guesses: self.guesses_made,
            });
        }

        self.candidates = candidates;

        let best = select_best_guesses(&self.untried, &self.candidates).ok_or(
            SolverError::Exhausted {
                guesses: self.guesses_made,
            },
        )?;
        let guess = self.pick_guess(&best.guesses);

        Ok(self.commit(guess))
    }

    /// Prefer a tied guess that could win outright, else the first tied guess
    fn pick_guess(&self, best: &[Code]) -> Code {
        best.iter()
            .copied()
            .find(|guess| self.is_candidate(guess))
            .unwrap_or(best[0])
    }

    /// Record `guess` as played
    fn commit(&mut self, guess: Code) -> Code {
        if let Ok(index) = self.untried.binary_search(&guess) {
            self.untried.remove(index);
        }
        self.last_guess_live = match self.candidates.binary_search(&guess) {
            Ok(index) => {
                self.candidates.remove(index);
                true
            }
            Err(_) => false,
        };
        self.last_guess = Some(guess);
        self.guesses_made += 1;
        self.state = SolverState::InProgress;
        guess
    }

    fn expect_state(&self, expected: SolverState, operation: &'static str) -> Result<(), SolverError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(SolverError::InvalidState {
                operation,
                state: self.state,
            })
        }
    }

    /// Current lifecycle state
    #[inline]
    #[must_use]
    pub const fn state(&self) -> SolverState {
        self.state
    }

    /// Game dimensions
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Codes still consistent with every response, in generation order
    ///
    /// Codes already guessed are not included.
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    /// Codes not yet guessed, in generation order
    #[inline]
    #[must_use]
    pub fn untried(&self) -> &[Code] {
        &self.untried
    }

    /// The most recent guess
    #[inline]
    #[must_use]
    pub const fn last_guess(&self) -> Option<Code> {
        self.last_guess
    }

    /// Number of guesses handed out this game
    #[inline]
    #[must_use]
    pub const fn guesses_made(&self) -> usize {
        self.guesses_made
    }

    /// Check whether `code` could still be the secret
    #[must_use]
    pub fn is_candidate(&self, code: &Code) -> bool {
        self.candidates.binary_search(code).is_ok()
    }
}
