//! Word solving command
//!
//! Solves a specific target word with one strategy and returns the solution path.

use crate::core::Word;
use crate::game::Session;
use crate::solver::{GuessStep, Strategy, StrategyFactory, StrategyKind, play};
use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::num::NonZeroUsize;

/// Configuration for solving a word
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub target: String,
    pub strategy: StrategyKind,
    pub seed: u64,
    pub max_rounds: Option<NonZeroUsize>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String, strategy: StrategyKind) -> Self {
        Self {
            target,
            strategy,
            seed: 0,
            max_rounds: None,
        }
    }
}

/// Result of solving a word
#[derive(Debug)]
pub struct SolveResult {
    pub success: bool,
    pub strategy: &'static str,
    pub target: String,
    pub pool_size: usize,
    pub guesses: Vec<GuessStep>,
}

/// Solve a specific word with the configured strategy
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid or not in `legal_words`
/// - The strategy hits a hard failure (see [`crate::solver::SolveError`])
pub fn solve_word(config: &SolveConfig, legal_words: &[Word]) -> Result<SolveResult> {
    let target = Word::new(config.target.as_str())
        .with_context(|| format!("Invalid target word '{}'", config.target))?;

    if !legal_words.contains(&target) {
        bail!(
            "'{target}' is not in the word list ({} words of length {})",
            legal_words.len(),
            target.len()
        );
    }

    let factory = StrategyFactory::new(legal_words);
    let strategy = factory.create(config.strategy);
    let mut session = Session::new(target);
    let mut rng = StdRng::seed_from_u64(config.seed);

    let outcome = play(&strategy, &mut session, legal_words, &mut rng, config.max_rounds)
        .with_context(|| format!("{} failed on '{}'", strategy.name(), config.target))?;

    Ok(SolveResult {
        success: outcome.solved,
        strategy: strategy.name(),
        target: session.reveal().text().to_string(),
        pool_size: legal_words.len(),
        guesses: outcome.history,
    })
}
