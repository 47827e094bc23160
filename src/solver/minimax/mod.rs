//! Knuth minimax guess selection
//!
//! Implements worst-case minimization: prefer the guess whose largest response
//! group among the remaining candidates is smallest.

mod calculator;
mod selector;

pub use calculator::{calculate_max_remaining, elimination_score, group_by_response};
pub use selector::{MinimaxSelection, select_best_guesses};
