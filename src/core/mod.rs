//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types: codes, peg responses,
//! game dimensions and the combination space. Everything here is pure and
//! deterministic.

mod code;
mod config;
mod response;
mod space;

pub use code::{Code, CodeError};
pub use config::{GameConfig, MAX_BASE, MAX_LEN};
pub use response::{BLACK_PEG, NO_PEG, Response, WHITE_PEG};
pub use space::CombinationSpace;
