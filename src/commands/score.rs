//! Score command
//!
//! Scores a single guess against a solution.

use crate::core::{Feedback, Word};
use anyhow::{Context, Result, ensure};

/// Score `guess` against `solution` from raw user input
///
/// # Errors
///
/// Returns an error if either word is invalid or the lengths differ.
pub fn score_words(solution: &str, guess: &str) -> Result<Feedback> {
    let solution = Word::new(solution).with_context(|| format!("Invalid solution '{solution}'"))?;
    let guess = Word::new(guess).with_context(|| format!("Invalid guess '{guess}'"))?;

    ensure!(
        solution.len() == guess.len(),
        "'{solution}' has {} letters but '{guess}' has {}",
        solution.len(),
        guess.len()
    );

    Ok(Feedback::calculate(&solution, &guess))
}
