//! Peg response calculation and representation
//!
//! A response counts black pegs (right digit, right position) and white pegs
//! (right digit, wrong position). Two responses are equal iff both counts
//! match; the positional peg layout shown on a board is derived from the counts
//! for display only.

use super::Code;
use std::fmt;

/// Host encoding of an empty peg slot
pub const NO_PEG: u8 = 0;
/// Host encoding of a white peg
pub const WHITE_PEG: u8 = 1;
/// Host encoding of a black peg
pub const BLACK_PEG: u8 = 2;

/// Feedback for a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Response {
    black: u8,
    white: u8,
}

impl Response {
    /// Create a response from peg counts
    #[inline]
    #[must_use]
    pub const fn new(black: u8, white: u8) -> Self {
        Self { black, white }
    }

    /// All black pegs for a code of `len` positions
    #[inline]
    #[must_use]
    pub const fn perfect(len: usize) -> Self {
        Self::new(len as u8, 0)
    }

    /// Black pegs: right digit in the right position
    #[inline]
    #[must_use]
    pub const fn black(self) -> u8 {
        self.black
    }

    /// White pegs: right digit in the wrong position
    #[inline]
    #[must_use]
    pub const fn white(self) -> u8 {
        self.white
    }

    /// Check whether this response cracks a code of `len` positions
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, len: usize) -> bool {
        self.black as usize == len
    }

    /// Check whether some pair of codes of `len` positions can produce this response
    ///
    /// Besides the count bound, `len - 1` blacks with one white is impossible:
    /// the single remaining digit would have to sit in its own position.
    #[must_use]
    pub const fn is_possible(self, len: usize) -> bool {
        let total = self.black as usize + self.white as usize;
        total <= len && !(self.black as usize + 1 == len && self.white == 1)
    }

    /// Score `guess` against `candidate`
    ///
    /// # Algorithm
    /// 1. First pass: count exact matches (blacks) and consume those positions
    ///    in both codes
    /// 2. Second pass: for each unconsumed guess position, find the first
    ///    unconsumed candidate position holding the same digit; count a white
    ///    and consume that candidate position
    ///
    /// A candidate digit is consumed at most once, so repeated digits are never
    /// double-counted even though generated codes never repeat a digit.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, GameConfig, Response};
    ///
    /// let config = GameConfig::default();
    /// let secret = Code::parse("1234", &config).unwrap();
    /// let guess = Code::parse("4321", &config).unwrap();
    ///
    /// assert_eq!(Response::score(&guess, &secret), Response::new(0, 4));
    /// ```
    #[must_use]
    pub fn score(guess: &Code, candidate: &Code) -> Self {
        let guess = guess.digits();
        let candidate = candidate.digits();
        debug_assert_eq!(guess.len(), candidate.len(), "codes must have equal length");

        let len = guess.len().min(candidate.len());
        let mut guess_used = [false; super::config::MAX_LEN];
        let mut candidate_used = [false; super::config::MAX_LEN];
        let mut black = 0u8;
        let mut white = 0u8;

        // First pass: blacks
        // Allow: Index needed to mark both codes' positions
        #[allow(clippy::needless_range_loop)]
        for i in 0..len {
            if guess[i] == candidate[i] {
                black += 1;
                guess_used[i] = true;
                candidate_used[i] = true;
            }
        }

        // Second pass: whites from whatever is left
        #[allow(clippy::needless_range_loop)]
        for i in 0..len {
            if guess_used[i] {
                continue;
            }
            for j in 0..len {
                if j != i && !candidate_used[j] && guess[i] == candidate[j] {
                    white += 1;
                    candidate_used[j] = true;
                    break;
                }
            }
        }

        Self { black, white }
    }

    /// Convert a host peg array (any slot order) to counts
    ///
    /// Returns `None` if a slot holds an unknown encoding or there are more
    /// pegs of one color than a count can hold.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Response, BLACK_PEG, NO_PEG, WHITE_PEG};
    ///
    /// let a = Response::from_pegs(&[BLACK_PEG, WHITE_PEG, NO_PEG, NO_PEG]).unwrap();
    /// let b = Response::from_pegs(&[NO_PEG, WHITE_PEG, NO_PEG, BLACK_PEG]).unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(a, Response::new(1, 1));
    /// ```
    #[must_use]
    pub fn from_pegs(pegs: &[u8]) -> Option<Self> {
        let mut response = Self::default();
        for &peg in pegs {
            match peg {
                BLACK_PEG => response.black = response.black.checked_add(1)?,
                WHITE_PEG => response.white = response.white.checked_add(1)?,
                NO_PEG => {}
                _ => return None,
            }
        }
        Some(response)
    }

    /// Canonical positional layout: blacks, then whites, then empty slots
    #[must_use]
    pub fn to_pegs(self, len: usize) -> Vec<u8> {
        let mut pegs = vec![NO_PEG; len.max(self.black as usize + self.white as usize)];
        let black = self.black as usize;
        let white = self.white as usize;
        pegs[..black].fill(BLACK_PEG);
        pegs[black..black + white].fill(WHITE_PEG);
        pegs
    }

    /// Parse a response typed by a person
    ///
    /// Accepts:
    /// - counts: `"1 2"`, `"1,2"`, `"1/2"` or `"12"` (black first)
    /// - a peg string: `B`/`b` for black, `W`/`w` for white, `-`/`.`/`_` for
    ///   empty, e.g. `"BWW-"`
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Response;
    ///
    /// assert_eq!(Response::parse("1 2"), Some(Response::new(1, 2)));
    /// assert_eq!(Response::parse("bww-"), Some(Response::new(1, 2)));
    /// assert_eq!(Response::parse("nope"), None);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        if s.chars().all(|c| matches!(c, 'B' | 'b' | 'W' | 'w' | '-' | '.' | '_')) {
            let pegs: Vec<u8> = s
                .chars()
                .map(|c| match c {
                    'B' | 'b' => BLACK_PEG,
                    'W' | 'w' => WHITE_PEG,
                    _ => NO_PEG,
                })
                .collect();
            return Self::from_pegs(&pegs);
        }

        let counts: Vec<u8> = s
            .split(|c: char| c.is_whitespace() || c == ',' || c == '/')
            .filter(|part| !part.is_empty())
            .map(str::parse)
            .collect::<Result<_, _>>()
            .ok()?;

        match counts.as_slice() {
            [black, white] => Some(Self::new(*black, *white)),
            [both] if s.len() == 2 => Some(Self::new(both / 10, both % 10)),
            _ => None,
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}B{}W", self.black, self.white)
    }
}

impl std::str::FromStr for Response {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid response: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    fn code(text: &str) -> Code {
        Code::parse(text, &GameConfig::default()).unwrap()
    }

    #[test]
    fn score_exact_match() {
        assert_eq!(
            Response::score(&code("1234"), &code("1234")),
            Response::new(4, 0)
        );
        assert!(Response::score(&code("1234"), &code("1234")).is_perfect(4));
    }

    #[test]
    fn score_all_misplaced() {
        assert_eq!(
            Response::score(&code("4321"), &code("1234")),
            Response::new(0, 4)
        );
    }

    #[test]
    fn score_single_black() {
        assert_eq!(
            Response::score(&code("1567"), &code("1234")),
            Response::new(1, 0)
        );
    }

    #[test]
    fn score_nothing_in_common() {
        assert_eq!(
            Response::score(&code("5678"), &code("1234")),
            Response::new(0, 0)
        );
    }

    #[test]
    fn score_mixed() {
        // 1 in place; 3 and 2 present elsewhere
        assert_eq!(
            Response::score(&code("1320"), &code("1234")),
            Response::new(1, 2)
        );
    }

    #[test]
    fn score_repeated_digits_consumed_once() {
        // Repeats never come out of the combination space, but the scoring
        // rule must still not double-count a secret digit.
        let guess = Code::from_slice_unchecked(&[1, 1, 2, 2]);
        let secret = Code::from_slice_unchecked(&[2, 1, 3, 4]);

        // Position 1 is black; the guess's other 1 finds nothing left; only
        // one of the guess's 2s can claim the secret's single 2.
        assert_eq!(Response::score(&guess, &secret), Response::new(1, 1));
    }

    #[test]
    fn score_repeated_digit_exact_match_not_reused() {
        let guess = Code::from_slice_unchecked(&[3, 3, 0, 1]);
        let secret = Code::from_slice_unchecked(&[3, 2, 4, 5]);
        assert_eq!(Response::score(&guess, &secret), Response::new(1, 0));
    }

    #[test]
    fn perfect_and_possible() {
        assert_eq!(Response::perfect(4), Response::new(4, 0));
        assert!(Response::new(2, 2).is_possible(4));
        assert!(Response::new(0, 4).is_possible(4));
        assert!(!Response::new(3, 1).is_possible(4));
        assert!(!Response::new(3, 2).is_possible(4));
        assert!(!Response::new(5, 0).is_possible(4));
    }

    #[test]
    fn pegs_round_trip_is_order_independent() {
        let response = Response::new(2, 1);
        assert_eq!(
            response.to_pegs(4),
            vec![BLACK_PEG, BLACK_PEG, WHITE_PEG, NO_PEG]
        );
        assert_eq!(
            Response::from_pegs(&[WHITE_PEG, NO_PEG, BLACK_PEG, BLACK_PEG]),
            Some(response)
        );
    }

    #[test]
    fn from_pegs_rejects_overlong_rows() {
        assert_eq!(
            Response::from_pegs(&[BLACK_PEG; 255]),
            Some(Response::new(255, 0))
        );
        assert_eq!(Response::from_pegs(&[BLACK_PEG; 256]), None);
        assert_eq!(Response::from_pegs(&[WHITE_PEG; 300]), None);
        assert_eq!(Response::parse(&"w".repeat(300)), None);
    }

    #[test]
    fn from_pegs_rejects_unknown_encoding() {
        assert_eq!(Response::from_pegs(&[BLACK_PEG, 7]), None);
    }

    #[test]
    fn parse_counts_and_pegs() {
        assert_eq!(Response::parse("2 1"), Some(Response::new(2, 1)));
        assert_eq!(Response::parse("2,1"), Some(Response::new(2, 1)));
        assert_eq!(Response::parse("2/1"), Some(Response::new(2, 1)));
        assert_eq!(Response::parse("21"), Some(Response::new(2, 1)));
        assert_eq!(Response::parse("BBW-"), Some(Response::new(2, 1)));
        assert_eq!(Response::parse("...."), Some(Response::new(0, 0)));
    }

    #[test]
    fn parse_invalid() {
        assert_eq!(Response::parse(""), None);
        assert_eq!(Response::parse("x y"), None);
        assert_eq!(Response::parse("1 2 3"), None);
        assert_eq!(Response::parse("123"), None);
        assert!("BXW".parse::<Response>().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Response::new(1, 2).to_string(), "1B2W");
    }
}
