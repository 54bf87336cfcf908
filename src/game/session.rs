//! Turn-by-turn Jotto game against a hidden solution
//!
//! A session accepts guesses and answers each with the round number and the
//! feedback. It ends only when the exact solution is submitted; it never
//! stops a caller that keeps guessing.

use crate::core::{Feedback, Word};
use thiserror::Error;

/// Where a session is in its protocol
///
/// Scoring happens inside [`Session::submit_guess`], so between calls a
/// session is always either waiting for a guess or finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingGuess,
    Terminated,
}

/// Answer to one submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// 1-based round this guess was played in
    pub round: usize,
    pub feedback: Feedback,
}

/// Error type for rejected guesses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("guess has {actual} letters but the solution has {expected}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("the game is already over after {rounds} rounds")]
    Terminated { rounds: usize },
}

/// One game of Jotto
#[derive(Debug, Clone)]
pub struct Session {
    solution: Word,
    round: usize,
    state: SessionState,
}

impl Session {
    /// Start a game with round counter 0, waiting for the first guess
    #[must_use]
    pub const fn new(solution: Word) -> Self {
        Self {
            solution,
            round: 0,
            state: SessionState::AwaitingGuess,
        }
    }

    /// Play one round
    ///
    /// Increments the round counter, scores `guess` against the hidden
    /// solution and terminates the session when every position matches.
    ///
    /// # Errors
    /// - [`SessionError::LengthMismatch`] if `guess` is not the solution's
    ///   length; no round is consumed.
    /// - [`SessionError::Terminated`] if the solution was already found.
    ///
    /// # Examples
    /// ```
    /// use jotto_solver::core::{Feedback, Word};
    /// use jotto_solver::game::Session;
    ///
    /// let mut session = Session::new(Word::new("ocean").unwrap());
    ///
    /// let turn = session.submit_guess(&Word::new("canoe").unwrap()).unwrap();
    /// assert_eq!((turn.round, turn.feedback), (1, Feedback::new(5, 0)));
    /// assert!(!session.is_terminated());
    ///
    /// let turn = session.submit_guess(&Word::new("ocean").unwrap()).unwrap();
    /// assert_eq!((turn.round, turn.feedback), (2, Feedback::new(5, 5)));
    /// assert!(session.is_terminated());
    /// ```
    pub fn submit_guess(&mut self, guess: &Word) -> Result<Turn, SessionError> {
        if self.state == SessionState::Terminated {
            return Err(SessionError::Terminated { rounds: self.round });
        }

        if guess.len() != self.solution.len() {
            return Err(SessionError::LengthMismatch {
                expected: self.solution.len(),
                actual: guess.len(),
            });
        }

        self.round += 1;
        let feedback = Feedback::calculate(&self.solution, guess);

        if feedback.is_solved(self.solution.len()) {
            self.state = SessionState::Terminated;
        }

        Ok(Turn {
            round: self.round,
            feedback,
        })
    }

    /// Rounds played so far
    #[inline]
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.state == SessionState::Terminated
    }

    /// Length every guess must have
    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.solution.len()
    }

    /// The hidden solution, for reporting once play is over
    ///
    /// Strategies never call this; they only see [`Turn`]s.
    #[must_use]
    pub const fn reveal(&self) -> &Word {
        &self.solution
    }
}
