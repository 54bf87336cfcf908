//! Command implementations

pub mod compete;
pub mod score;
pub mod solve;

pub use compete::{StrategyStanding, TournamentConfig, TournamentResult, run_tournament};
pub use score::score_words;
pub use solve::{SolveConfig, SolveResult, solve_word};
