//! Jotto feedback calculation and representation
//!
//! Feedback for a guess is two counts:
//! - letters matched: size of the multiset intersection of the two words
//! - positions matched: number of indices holding the same letter
//!
//! `positions <= letters <= word length` always holds.

use super::Word;
use std::fmt;

/// Two-part feedback for a Jotto guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    letters: u8,
    positions: u8,
}

impl Feedback {
    /// Create feedback from raw counts
    ///
    /// # Panics
    /// Panics in debug mode if `positions > letters`
    #[inline]
    #[must_use]
    pub const fn new(letters: u8, positions: u8) -> Self {
        debug_assert!(positions <= letters, "positions cannot exceed letters");
        Self { letters, positions }
    }

    /// Letters shared between solution and guess, counting multiplicity
    #[inline]
    #[must_use]
    pub const fn letters(self) -> u8 {
        self.letters
    }

    /// Letters in the exact same position
    #[inline]
    #[must_use]
    pub const fn positions(self) -> u8 {
        self.positions
    }

    /// Letters plus positions, the value minimax strategies compare
    #[inline]
    #[must_use]
    pub const fn combined(self) -> u8 {
        self.letters + self.positions
    }

    /// True when every position matched
    #[inline]
    #[must_use]
    pub const fn is_solved(self, word_length: usize) -> bool {
        self.positions as usize == word_length
    }

    /// Score `guess` against `solution`
    ///
    /// Both words are already lowercase (see [`Word::new`]), which makes
    /// scoring case-insensitive with respect to the original input. The
    /// words must have the same length; that is checked by callers such as
    /// [`crate::game::Session::submit_guess`].
    ///
    /// # Examples
    /// ```
    /// use jotto_solver::core::{Feedback, Word};
    ///
    /// let solution = Word::new("ocean").unwrap();
    /// let guess = Word::new("canoe").unwrap();
    ///
    /// let feedback = Feedback::calculate(&solution, &guess);
    /// assert_eq!(feedback, Feedback::new(5, 0));
    /// ```
    #[must_use]
    pub fn calculate(solution: &Word, guess: &Word) -> Self {
        debug_assert_eq!(solution.len(), guess.len(), "words must share a length");

        let positions = solution
            .chars()
            .iter()
            .zip(guess.chars())
            .filter(|(s, g)| s == g)
            .count();

        let letters: u8 = solution
            .letter_counts()
            .iter()
            .zip(guess.letter_counts())
            .map(|(&s, &g)| s.min(g))
            .sum();

        Self::new(letters, positions as u8)
    }
}

/// Score `guess` against `solution`; alias for [`Feedback::calculate`]
#[inline]
#[must_use]
pub fn score(solution: &Word, guess: &Word) -> Feedback {
    Feedback::calculate(solution, guess)
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.letters, self.positions)
    }
}
