//! Terminal output formatting
//!
//! Display functions for command results.

pub mod display;
pub mod formatters;

pub use display::{print_score, print_solve_result, print_tournament_result};
