//! Game dimensions
//!
//! The alphabet size and code length are fixed for the lifetime of a game. The
//! shipped board is 10 digits, 4 positions and 10 guess rows.

use crate::error::SolverError;

/// Largest supported alphabet (digits render as `0-9a-z`)
pub const MAX_BASE: u8 = 36;

/// Largest supported code length
pub const MAX_LEN: usize = 8;

/// Validated game dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    base: u8,
    len: usize,
    max_guesses: Option<usize>,
}

impl GameConfig {
    /// Digits per code position in the shipped game
    pub const DEFAULT_BASE: u8 = 10;
    /// Code length in the shipped game
    pub const DEFAULT_LEN: usize = 4;
    /// Guess rows on the shipped board
    pub const DEFAULT_MAX_GUESSES: usize = 10;

    /// Create a configuration with no limit on the number of guesses
    ///
    /// # Errors
    /// Returns [`SolverError::Configuration`] if either dimension is zero, if
    /// `len > base` (no code of distinct digits exists), or if a dimension
    /// exceeds [`MAX_BASE`] / [`MAX_LEN`].
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::GameConfig;
    ///
    /// let config = GameConfig::new(6, 4).unwrap();
    /// assert_eq!(config.base(), 6);
    ///
    /// assert!(GameConfig::new(3, 4).is_err());
    /// ```
    pub fn new(base: u8, len: usize) -> Result<Self, SolverError> {
        if base == 0 || len == 0 {
            return Err(SolverError::Configuration(format!(
                "base and code length must be positive (base {base}, length {len})"
            )));
        }
        if base > MAX_BASE {
            return Err(SolverError::Configuration(format!(
                "base {base} exceeds the maximum of {MAX_BASE}"
            )));
        }
        if len > MAX_LEN {
            return Err(SolverError::Configuration(format!(
                "code length {len} exceeds the maximum of {MAX_LEN}"
            )));
        }
        if len > usize::from(base) {
            return Err(SolverError::Configuration(format!(
                "code length {len} exceeds base {base}: no code of distinct digits exists"
            )));
        }

        Ok(Self {
            base,
            len,
            max_guesses: None,
        })
    }

    /// Limit the number of guesses per game (`0` means unlimited)
    #[must_use]
    pub const fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = if max_guesses == 0 {
            None
        } else {
            Some(max_guesses)
        };
        self
    }

    /// Alphabet size
    #[inline]
    #[must_use]
    pub const fn base(&self) -> u8 {
        self.base
    }

    /// Code length
    #[inline]
    #[must_use]
    pub const fn code_len(&self) -> usize {
        self.len
    }

    /// Guess limit, if any
    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> Option<usize> {
        self.max_guesses
    }

    /// Number of codes with distinct digits: `base! / (base - len)!`
    #[must_use]
    pub fn space_size(&self) -> usize {
        let base = usize::from(self.base);
        (base - self.len + 1..=base).product()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            base: Self::DEFAULT_BASE,
            len: Self::DEFAULT_LEN,
            max_guesses: Some(Self::DEFAULT_MAX_GUESSES),
        }
    }
}
