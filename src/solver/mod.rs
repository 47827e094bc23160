//! Mastermind solving algorithms
//!
//! Candidate elimination, Knuth's minimax guess selection, and the stateful
//! solver that ties them together across a game.

mod engine;
mod filter;
pub mod minimax;

pub use engine::{Solver, SolverState};
pub use filter::{count_consistent, filter_candidates};
pub use minimax::{MinimaxSelection, select_best_guesses};
