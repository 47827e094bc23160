//! Mastermind Solver
//!
//! A codebreaker for Mastermind with distinct digits (bulls and cows), playing
//! Knuth's minimax strategy: every guess minimizes the worst-case number of
//! secrets that can remain.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mastermind_solver::core::{Code, GameConfig, Response};
//! use mastermind_solver::solver::Solver;
//!
//! let config = GameConfig::default();
//! let secret = Code::parse("3719", &config).unwrap();
//! let mut solver = Solver::new(config);
//!
//! let mut guess = solver.first_guess().unwrap();
//! loop {
//!     let response = Response::score(&guess, &secret);
//!     println!("{guess} -> {response}");
//!     if response.is_perfect(config.code_len()) {
//!         break;
//!     }
//!     guess = solver.guess_again(response).unwrap();
//! }
//! ```

// Core domain types
pub mod core;

// Solver errors
pub mod error;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
