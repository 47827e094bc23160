//! Solver error type
//!
//! None of these errors are transient: they signal a bad configuration, a host
//! calling operations out of order, or a response that contradicts every
//! remaining candidate. The only recovery path is [`Solver::reset`].
//!
//! [`Solver::reset`]: crate::solver::Solver::reset

use crate::core::{Code, Response};
use crate::solver::SolverState;
use thiserror::Error;

/// Errors surfaced by the solver core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Invalid alphabet size or code length
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Operation called in the wrong lifecycle state
    #[error("`{operation}` cannot be called while the solver is {state}")]
    InvalidState {
        operation: &'static str,
        state: SolverState,
    },

    /// No candidate secret is consistent with the response to the last guess
    #[error("no possible secret gives response {response} to guess {guess}")]
    InconsistentResponse { guess: Code, response: Response },

    /// Every guess row has been used without cracking the code
    #[error("all {guesses} guesses used without cracking the code")]
    Exhausted { guesses: usize },
}
