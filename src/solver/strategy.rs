//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::minimax::{self, ScoreMatrix};
use crate::core::{CandidateSet, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

/// Default number of words sampled per round by [`SampledMinimaxStrategy`]
pub const DEFAULT_SAMPLE_SIZE: usize = 20;

/// A policy for picking the next guess from the live candidates
pub trait Strategy {
    /// Name shown on leaderboards
    fn name(&self) -> &'static str;

    /// Select the next guess
    ///
    /// Returns a pool index taken from `candidates.indices()`, or `None` if
    /// the strategy cannot pick one (empty set, mismatched tables).
    fn select_guess<R: Rng + ?Sized>(
        &self,
        candidates: &CandidateSet<'_>,
        rng: &mut R,
    ) -> Option<usize>;
}

/// Always guesses the first live candidate
///
/// Deterministic for a fixed pool order; the weak baseline.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstStrategy;

impl Strategy for FirstStrategy {
    fn name(&self) -> &'static str {
        "guess_first"
    }

    fn select_guess<R: Rng + ?Sized>(
        &self,
        candidates: &CandidateSet<'_>,
        _rng: &mut R,
    ) -> Option<usize> {
        candidates.first()
    }
}

/// Guesses a live candidate uniformly at random
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "guess_random"
    }

    fn select_guess<R: Rng + ?Sized>(
        &self,
        candidates: &CandidateSet<'_>,
        rng: &mut R,
    ) -> Option<usize> {
        candidates.indices().choose(rng).copied()
    }
}

/// Minimax over a random subsample of the live candidates
///
/// Each round draws up to `sample_size` distinct candidates and picks the one
/// whose lowest combined score against the rest of the sample is highest.
#[derive(Debug, Clone, Copy)]
pub struct SampledMinimaxStrategy {
    pub sample_size: usize,
}

impl SampledMinimaxStrategy {
    #[must_use]
    pub const fn new(sample_size: usize) -> Self {
        Self { sample_size }
    }
}

impl Default for SampledMinimaxStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_SIZE)
    }
}

impl Strategy for SampledMinimaxStrategy {
    fn name(&self) -> &'static str {
        "guess_sampled_minimax"
    }

    fn select_guess<R: Rng + ?Sized>(
        &self,
        candidates: &CandidateSet<'_>,
        rng: &mut R,
    ) -> Option<usize> {
        let live = candidates.indices();
        let amount = self.sample_size.max(1).min(live.len());

        let sample: Vec<(usize, &Word)> = rand::seq::index::sample(rng, live.len(), amount)
            .into_iter()
            .map(|pos| (live[pos], candidates.word(live[pos])))
            .collect();

        minimax::select_sampled_guess(&sample).map(|(index, _)| index)
    }
}

/// Exact minimax over the whole pool using a shared score matrix
///
/// The matrix covers the full pool and is only read here; each round it is
/// restricted to the live indices.
#[derive(Debug, Clone)]
pub struct MinimaxStrategy {
    matrix: Arc<ScoreMatrix>,
}

impl MinimaxStrategy {
    #[must_use]
    pub const fn new(matrix: Arc<ScoreMatrix>) -> Self {
        Self { matrix }
    }

    /// Build a private matrix for `pool`
    #[must_use]
    pub fn for_pool(pool: &[Word]) -> Self {
        Self::new(Arc::new(ScoreMatrix::build(pool)))
    }
}

impl Strategy for MinimaxStrategy {
    fn name(&self) -> &'static str {
        "guess_minimax"
    }

    fn select_guess<R: Rng + ?Sized>(
        &self,
        candidates: &CandidateSet<'_>,
        _rng: &mut R,
    ) -> Option<usize> {
        if self.matrix.size() != candidates.pool().len() {
            log::error!(
                "score matrix covers {} words but the pool has {}",
                self.matrix.size(),
                candidates.pool().len()
            );
            return None;
        }

        minimax::select_best_guess(&self.matrix, candidates.indices()).map(|(index, _)| index)
    }
}

/// Names of the available strategies, as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    First,
    Random,
    SampledMinimax,
    Minimax,
}

impl StrategyKind {
    /// Every strategy, in leaderboard tie-break order
    pub const ALL: [Self; 4] = [Self::First, Self::Random, Self::SampledMinimax, Self::Minimax];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Random => "random",
            Self::SampledMinimax => "sampled-minimax",
            Self::Minimax => "minimax",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    /// Supported names: "first", "random", "sampled-minimax", "minimax"
    /// (the `guess_` prefixed leaderboard names are accepted too)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().trim_start_matches("guess_") {
            "first" => Ok(Self::First),
            "random" => Ok(Self::Random),
            "sampled-minimax" | "sampled_minimax" | "sampled" => Ok(Self::SampledMinimax),
            "minimax" => Ok(Self::Minimax),
            other => Err(format!(
                "Unknown strategy '{other}' (expected first, random, sampled-minimax or minimax)"
            )),
        }
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    First(FirstStrategy),
    Random(RandomStrategy),
    SampledMinimax(SampledMinimaxStrategy),
    Minimax(MinimaxStrategy),
}

impl Strategy for StrategyType {
    fn name(&self) -> &'static str {
        match self {
            Self::First(s) => s.name(),
            Self::Random(s) => s.name(),
            Self::SampledMinimax(s) => s.name(),
            Self::Minimax(s) => s.name(),
        }
    }

    fn select_guess<R: Rng + ?Sized>(
        &self,
        candidates: &CandidateSet<'_>,
        rng: &mut R,
    ) -> Option<usize> {
        match self {
            Self::First(s) => s.select_guess(candidates, rng),
            Self::Random(s) => s.select_guess(candidates, rng),
            Self::SampledMinimax(s) => s.select_guess(candidates, rng),
            Self::Minimax(s) => s.select_guess(candidates, rng),
        }
    }
}

/// Builds strategies for one word pool
///
/// The minimax score matrix is built on first request and shared by every
/// strategy the factory hands out afterwards. The factory is `Sync`, so one
/// instance can serve parallel games. The matrix is never mutated after
/// [`ScoreMatrix::build`]; each game narrows its own `CandidateSet`.
pub struct StrategyFactory<'a> {
    pool: &'a [Word],
    sample_size: usize,
    matrix: OnceLock<Arc<ScoreMatrix>>,
}

impl<'a> StrategyFactory<'a> {
    #[must_use]
    pub const fn new(pool: &'a [Word]) -> Self {
        Self {
            pool,
            sample_size: DEFAULT_SAMPLE_SIZE,
            matrix: OnceLock::new(),
        }
    }

    #[must_use]
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// The pool every created strategy plays over
    #[must_use]
    pub const fn pool(&self) -> &'a [Word] {
        self.pool
    }

    /// Shared matrix for the pool, built on first use
    #[must_use]
    pub fn matrix(&self) -> Arc<ScoreMatrix> {
        Arc::clone(self.matrix.get_or_init(|| Arc::new(ScoreMatrix::build(self.pool))))
    }

    #[must_use]
    pub fn create(&self, kind: StrategyKind) -> StrategyType {
        match kind {
            StrategyKind::First => StrategyType::First(FirstStrategy),
            StrategyKind::Random => StrategyType::Random(RandomStrategy),
            StrategyKind::SampledMinimax => {
                StrategyType::SampledMinimax(SampledMinimaxStrategy::new(self.sample_size))
            }
            StrategyKind::Minimax => StrategyType::Minimax(MinimaxStrategy::new(self.matrix())),
        }
    }
}
