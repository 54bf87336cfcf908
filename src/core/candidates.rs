//! Candidate set and constraint filtering
//!
//! A candidate set is a list of indices into a shared, read-only word pool.
//! Each strategy owns its own set for the duration of a game; the pool itself
//! is never mutated, so any number of sets can borrow it at once.

use super::{Feedback, Word};
use thiserror::Error;

/// Narrowing left no word consistent with the observed feedback
///
/// Truthful feedback can never cause this, so it signals a bookkeeping or
/// scoring bug and is always treated as fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no candidates remain after guessing {guess} with feedback {feedback}")]
pub struct Contradiction {
    pub guess: String,
    pub feedback: Feedback,
}

/// Words still possibly equal to the hidden solution
#[derive(Debug, Clone)]
pub struct CandidateSet<'a> {
    pool: &'a [Word],
    live: Vec<usize>,
}

impl<'a> CandidateSet<'a> {
    /// Start with every word of `pool` live, in pool order
    #[must_use]
    pub fn new(pool: &'a [Word]) -> Self {
        Self {
            pool,
            live: (0..pool.len()).collect(),
        }
    }

    /// The read-only word pool the indices refer to
    #[inline]
    #[must_use]
    pub const fn pool(&self) -> &'a [Word] {
        self.pool
    }

    /// Pool indices of the live words, in their current order
    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.live
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// The word at pool index `index`
    ///
    /// # Panics
    /// Panics if `index` is outside the pool
    #[inline]
    #[must_use]
    pub fn word(&self, index: usize) -> &'a Word {
        &self.pool[index]
    }

    /// First live word in current order
    #[must_use]
    pub fn first(&self) -> Option<usize> {
        self.live.first().copied()
    }

    /// Iterate over live words in current order
    pub fn words(&self) -> impl Iterator<Item = &'a Word> + '_ {
        let pool = self.pool;
        self.live.iter().map(move |&i| &pool[i])
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words().any(|w| w == word)
    }

    /// Drop `guess` and every word that would not have produced `feedback`
    ///
    /// A word `w` survives only if `score(w, guess) == feedback`: had `w`
    /// been the solution, the guess would have scored exactly that. The
    /// result is built as a fresh list, so no entry is skipped while
    /// filtering. Returns how many words were removed.
    ///
    /// # Errors
    /// Returns [`Contradiction`] if nothing survives. The set is left
    /// untouched in that case.
    pub fn narrow(&mut self, guess: &Word, feedback: Feedback) -> Result<usize, Contradiction> {
        let before = self.live.len();
        let pool = self.pool;

        let survivors: Vec<usize> = self
            .live
            .iter()
            .copied()
            .filter(|&i| {
                let word = &pool[i];
                word != guess && Feedback::calculate(word, guess) == feedback
            })
            .collect();

        if survivors.is_empty() {
            return Err(Contradiction {
                guess: guess.text().to_string(),
                feedback,
            });
        }

        self.live = survivors;
        Ok(before - self.live.len())
    }
}
