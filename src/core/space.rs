//! The combination space
//!
//! Every code of distinct digits for a given alphabet size and code length, in
//! lexicographic order. That order is the canonical iteration order used for
//! the first guess and for every tie-break, so games are reproducible.

use super::{Code, GameConfig, config::MAX_LEN};
use crate::error::SolverError;

/// All valid codes for a configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationSpace {
    config: GameConfig,
    codes: Vec<Code>,
}

impl CombinationSpace {
    /// Generate the space for `base` digits and codes of `len` positions
    ///
    /// # Errors
    /// Returns [`SolverError::Configuration`] if the dimensions are invalid,
    /// in particular if `len > base`.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::CombinationSpace;
    ///
    /// let space = CombinationSpace::generate(10, 4).unwrap();
    /// assert_eq!(space.len(), 5040);
    /// assert_eq!(space.codes()[0].to_string(), "0123");
    ///
    /// assert!(CombinationSpace::generate(3, 4).is_err());
    /// ```
    pub fn generate(base: u8, len: usize) -> Result<Self, SolverError> {
        GameConfig::new(base, len).map(|config| Self::for_config(&config))
    }

    /// Generate the space for an already validated configuration
    #[must_use]
    pub fn for_config(config: &GameConfig) -> Self {
        let mut codes = Vec::with_capacity(config.space_size());
        let mut digits = [0u8; MAX_LEN];
        extend_combinations(
            config.base(),
            config.code_len(),
            0,
            &mut digits,
            &mut codes,
        );
        Self {
            config: *config,
            codes,
        }
    }

    /// The configuration this space was generated for
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// All codes, in generation order
    #[inline]
    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    /// Number of codes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Always false for a valid configuration
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate over codes in generation order
    pub fn iter(&self) -> std::slice::Iter<'_, Code> {
        self.codes.iter()
    }

    /// Check whether a code belongs to the space
    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.codes.binary_search(code).is_ok()
    }

    /// Take ownership of the codes
    #[must_use]
    pub fn into_codes(self) -> Vec<Code> {
        self.codes
    }
}

impl<'a> IntoIterator for &'a CombinationSpace {
    type Item = &'a Code;
    type IntoIter = std::slice::Iter<'a, Code>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Depth-first construction: pick each unused digit for `depth`, ascending
fn extend_combinations(
    base: u8,
    len: usize,
    depth: usize,
    digits: &mut [u8; MAX_LEN],
    out: &mut Vec<Code>,
) {
    if depth == len {
        out.push(Code::from_slice_unchecked(&digits[..len]));
        return;
    }

    for digit in 0..base {
        if digits[..depth].contains(&digit) {
            continue;
        }
        digits[depth] = digit;
        extend_combinations(base, len, depth + 1, digits, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_space_has_5040_codes() {
        let space = CombinationSpace::generate(10, 4).unwrap();
        assert_eq!(space.len(), 5040);
        assert!(!space.is_empty());
    }

    #[test]
    fn every_code_has_distinct_in_range_digits() {
        let space = CombinationSpace::generate(10, 4).unwrap();
        for code in &space {
            assert_eq!(code.len(), 4);
            let digits = code.digits();
            for (i, &a) in digits.iter().enumerate() {
                assert!(a < 10);
                for &b in &digits[i + 1..] {
                    assert_ne!(a, b, "{code} repeats a digit");
                }
            }
        }
    }

    #[test]
    fn generation_order_is_lexicographic() {
        let space = CombinationSpace::generate(10, 4).unwrap();
        assert!(space.codes().windows(2).all(|w| w[0] < w[1]));
        assert_eq!(space.codes()[0].digits(), &[0, 1, 2, 3]);
        assert_eq!(space.codes()[1].digits(), &[0, 1, 2, 4]);
        assert_eq!(space.codes()[5039].digits(), &[9, 8, 7, 6]);
    }

    #[test]
    fn small_space_is_complete() {
        let space = CombinationSpace::generate(3, 2).unwrap();
        let rendered: Vec<String> = space.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["01", "02", "10", "12", "20", "21"]);
    }

    #[test]
    fn size_matches_config() {
        for (base, len) in [(6, 4), (8, 3), (5, 5), (7, 1)] {
            let space = CombinationSpace::generate(base, len).unwrap();
            assert_eq!(space.len(), space.config().space_size());
        }
    }

    #[test]
    fn length_above_base_is_configuration_error() {
        assert!(matches!(
            CombinationSpace::generate(3, 4),
            Err(SolverError::Configuration(_))
        ));
    }

    #[test]
    fn contains_only_generated_codes() {
        let space = CombinationSpace::generate(10, 4).unwrap();
        let config = space.config();
        assert!(space.contains(&Code::parse("3719", config).unwrap()));
        assert!(!space.contains(&Code::from_slice_unchecked(&[1, 1, 2, 3])));
    }

    #[test]
    fn regeneration_is_identical() {
        let a = CombinationSpace::generate(10, 4).unwrap();
        let b = CombinationSpace::generate(10, 4).unwrap();
        assert_eq!(a, b);
    }
}
