//! Jotto solving algorithms
//!
//! This module contains the guess-selection strategies and the loop that
//! drives them through a game.

mod engine;
pub mod minimax;
pub mod strategy;

pub use engine::{GuessStep, PlayOutcome, SolveError, play};
pub use strategy::{
    DEFAULT_SAMPLE_SIZE, FirstStrategy, MinimaxStrategy, RandomStrategy, SampledMinimaxStrategy,
    Strategy, StrategyFactory, StrategyKind, StrategyType,
};
