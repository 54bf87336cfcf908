//! Jotto word representation
//!
//! A Word stores a lowercase word along with per-letter counts for scoring.

use std::fmt;
use thiserror::Error;

/// Longest word accepted by [`Word::new`]
///
/// Keeps the combined feedback score (letters + positions) inside a `u8`.
pub const MAX_WORD_LENGTH: usize = 32;

/// A lowercase word with letter-count tracking
///
/// Stores the word as text and keeps a 26-bucket histogram used by the
/// multiset intersection in [`crate::core::Feedback::calculate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    counts: [u8; 26],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must be at most {max} letters, got {0}", max = MAX_WORD_LENGTH)]
    TooLong(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is normalized to lowercase, so `"OCEAN"` and `"ocean"` are the
    /// same word.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty or longer than [`MAX_WORD_LENGTH`]
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use jotto_solver::core::Word;
    ///
    /// let word = Word::new("Ocean").unwrap();
    /// assert_eq!(word.text(), "ocean");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("oc3an").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        if text.len() > MAX_WORD_LENGTH {
            return Err(WordError::TooLong(text.len()));
        }

        let mut counts = [0u8; 26];
        for ch in text.bytes() {
            counts[usize::from(ch - b'a')] += 1;
        }

        Ok(Self { text, counts })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: empty words are rejected by [`Word::new`]
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.chars()[position]
    }

    /// How many times `letter` occurs (0 for anything outside `a..=z`)
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> u8 {
        if letter.is_ascii_lowercase() {
            self.counts[usize::from(letter - b'a')]
        } else {
            0
        }
    }

    /// Per-letter histogram, index 0 is `a`
    #[inline]
    #[must_use]
    pub const fn letter_counts(&self) -> &[u8; 26] {
        &self.counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
