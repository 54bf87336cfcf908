//! Core domain types for Jotto
//!
//! Words, the feedback scorer and the candidate set. Everything here is pure
//! apart from candidate narrowing, which mutates only the set it is called on.

mod candidates;
mod feedback;
mod word;

pub use candidates::{CandidateSet, Contradiction};
pub use feedback::{Feedback, score};
pub use word::{MAX_WORD_LENGTH, Word, WordError};
