//! Mastermind code representation
//!
//! A Code is a fixed-length sequence of pairwise-distinct digits. It is used for
//! both secrets and guesses.

use super::config::{GameConfig, MAX_LEN};
use std::fmt;

/// An ordered sequence of distinct digits
///
/// Stored inline so codes are `Copy`; slots past `len` are always zero, which
/// keeps the derived equality and ordering element-wise. Ordering is
/// lexicographic by digit, the same order in which the combination space is
/// generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code {
    digits: [u8; MAX_LEN],
    len: u8,
}

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength { expected: usize, got: usize },
    InvalidDigit(char),
    DigitOutOfRange { digit: u8, base: u8 },
    RepeatedDigit(u8),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, got } => {
                write!(f, "Code must be exactly {expected} digits, got {got}")
            }
            Self::InvalidDigit(ch) => write!(f, "'{ch}' is not a digit"),
            Self::DigitOutOfRange { digit, base } => {
                write!(f, "Digit {digit} is out of range for base {base}")
            }
            Self::RepeatedDigit(digit) => {
                write!(f, "Digit {} appears more than once", digit_char(*digit))
            }
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Build a code from digits, validating it against the game dimensions
    ///
    /// # Errors
    /// Returns `CodeError` if the length does not match, a digit is outside
    /// `[0, base)`, or a digit repeats.
    pub fn from_digits(digits: &[u8], config: &GameConfig) -> Result<Self, CodeError> {
        if digits.len() != config.code_len() {
            return Err(CodeError::InvalidLength {
                expected: config.code_len(),
                got: digits.len(),
            });
        }

        let mut seen = 0u64;
        for &digit in digits {
            if digit >= config.base() {
                return Err(CodeError::DigitOutOfRange {
                    digit,
                    base: config.base(),
                });
            }
            if seen & (1 << digit) != 0 {
                return Err(CodeError::RepeatedDigit(digit));
            }
            seen |= 1 << digit;
        }

        Ok(Self::from_slice_unchecked(digits))
    }

    /// Parse a code such as `"3719"`
    ///
    /// Whitespace, commas and dashes between digits are ignored, so `"3 7 1 9"`
    /// and `"3-7-1-9"` are accepted too. Digits above 9 are written `a-z`.
    ///
    /// # Errors
    /// Returns `CodeError` if the text contains a non-digit or if the digits do
    /// not form a valid code for `config`.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, GameConfig};
    ///
    /// let config = GameConfig::default();
    /// let code = Code::parse("3719", &config).unwrap();
    /// assert_eq!(code.digits(), &[3, 7, 1, 9]);
    ///
    /// assert!(Code::parse("3713", &config).is_err()); // repeated digit
    /// assert!(Code::parse("371", &config).is_err()); // too short
    /// ```
    pub fn parse(text: &str, config: &GameConfig) -> Result<Self, CodeError> {
        let digits = text
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',' && *c != '-')
            .map(|c| {
                c.to_digit(36)
                    .map(|d| d as u8)
                    .ok_or(CodeError::InvalidDigit(c))
            })
            .collect::<Result<Vec<u8>, _>>()?;

        Self::from_digits(&digits, config)
    }

    /// Build a code without validation
    ///
    /// Callers guarantee `digits.len() <= MAX_LEN`.
    pub(crate) fn from_slice_unchecked(digits: &[u8]) -> Self {
        let mut inline = [0u8; MAX_LEN];
        inline[..digits.len()].copy_from_slice(digits);
        Self {
            digits: inline,
            len: digits.len() as u8,
        }
    }

    /// The digits of this code
    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits[..usize::from(self.len)]
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Always false for codes built from a valid configuration
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Digit at a position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn digit_at(&self, position: usize) -> u8 {
        self.digits()[position]
    }

    /// Check whether a digit appears anywhere in the code
    #[inline]
    #[must_use]
    pub fn contains(&self, digit: u8) -> bool {
        self.digits().contains(&digit)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &digit in self.digits() {
            write!(f, "{}", digit_char(digit))?;
        }
        Ok(())
    }
}

fn digit_char(digit: u8) -> char {
    char::from_digit(u32::from(digit), 36).unwrap_or('?')
}
