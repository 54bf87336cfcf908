//! Minimax guess selection for Jotto
//!
//! Implements worst-case maximization over combined feedback scores, exactly
//! via a precomputed [`ScoreMatrix`] or approximately over a random sample.

mod calculator;
mod matrix;
mod selector;

pub use calculator::{calculate_worst_case, combined_score};
pub use matrix::ScoreMatrix;
pub use selector::{select_best_guess, select_sampled_guess};
