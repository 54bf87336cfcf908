//! Jotto Solver
//!
//! Simulates the word-deduction game Jotto and pits guessing strategies
//! against each other: first-remaining, uniform random, sampled minimax and
//! full minimax over a precomputed score matrix.
//!
//! # Quick Start
//!
//! ```rust
//! use jotto_solver::core::{Feedback, Word};
//! use jotto_solver::game::Session;
//! use jotto_solver::solver::{StrategyFactory, StrategyKind, play};
//! use jotto_solver::wordlists::{WORDS, words_of_length};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! // Score a guess
//! let solution = Word::new("ocean").unwrap();
//! let guess = Word::new("canoe").unwrap();
//! assert_eq!(Feedback::calculate(&solution, &guess), Feedback::new(5, 0));
//!
//! // Let a strategy play a whole game
//! let legal = words_of_length(WORDS, 5);
//! let factory = StrategyFactory::new(&legal);
//! let strategy = factory.create(StrategyKind::SampledMinimax);
//! let mut session = Session::new(solution);
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let outcome = play(&strategy, &mut session, &legal, &mut rng, None).unwrap();
//! assert_eq!(outcome.final_guess.text(), "ocean");
//! ```

// Core domain types
pub mod core;

// Game session protocol
pub mod game;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
