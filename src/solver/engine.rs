//! Shared game loop driving any strategy against a session

use super::strategy::Strategy;
use crate::core::{CandidateSet, Contradiction, Feedback, Word};
use crate::game::{Session, SessionError};
use log::{debug, warn};
use rand::Rng;
use std::num::NonZeroUsize;
use thiserror::Error;

/// Hard failures while playing a game
///
/// None of these can happen with truthful feedback and a well-behaved
/// strategy; they always indicate a bug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error(transparent)]
    Contradiction(#[from] Contradiction),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("{strategy} produced no guess with {remaining} candidates left")]
    NoGuess {
        strategy: &'static str,
        remaining: usize,
    },
    #[error("the word list is empty")]
    EmptyWordList,
}

/// A single round as seen by the strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStep {
    pub round: usize,
    pub guess: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    /// Candidates left after narrowing; 1 on the solving round
    pub candidates_after: usize,
}

/// Result of one strategy playing one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    pub rounds: usize,
    pub final_guess: Word,
    /// False only when a round cap stopped play first
    pub solved: bool,
    pub history: Vec<GuessStep>,
}

/// Play `session` to completion with `strategy`
///
/// The strategy works on its own [`CandidateSet`] over `legal_words`: each
/// round it picks a guess, the session scores it, and the set is narrowed by
/// the feedback. Play stops when the session terminates or, if `max_rounds`
/// is set, when that many rounds have been played without success.
///
/// # Errors
/// - [`SolveError::NoGuess`] if the strategy declines to guess
/// - [`SolveError::Contradiction`] if narrowing empties the candidate set
/// - [`SolveError::Session`] if the session rejects a guess
///
/// # Examples
/// ```
/// use jotto_solver::core::Word;
/// use jotto_solver::game::Session;
/// use jotto_solver::solver::{FirstStrategy, play};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let words: Vec<Word> = ["crane", "slate", "ocean"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let mut session = Session::new(Word::new("ocean").unwrap());
/// let mut rng = StdRng::seed_from_u64(0);
///
/// let outcome = play(&FirstStrategy, &mut session, &words, &mut rng, None).unwrap();
/// assert!(outcome.solved);
/// assert_eq!(outcome.final_guess.text(), "ocean");
/// ```
pub fn play<S, R>(
    strategy: &S,
    session: &mut Session,
    legal_words: &[Word],
    rng: &mut R,
    max_rounds: Option<NonZeroUsize>,
) -> Result<PlayOutcome, SolveError>
where
    S: Strategy + ?Sized,
    R: Rng + ?Sized,
{
    let mut candidates = CandidateSet::new(legal_words);
    let mut history = Vec::new();

    loop {
        let candidates_before = candidates.len();
        let index = strategy
            .select_guess(&candidates, rng)
            .ok_or_else(|| SolveError::NoGuess {
                strategy: strategy.name(),
                remaining: candidates_before,
            })?;
        let guess = candidates.word(index);

        let turn = session.submit_guess(guess)?;
        debug!(
            "{}: round {} guessed {guess} -> {} ({candidates_before} candidates)",
            strategy.name(),
            turn.round,
            turn.feedback
        );

        if session.is_terminated() {
            history.push(GuessStep {
                round: turn.round,
                guess: guess.clone(),
                feedback: turn.feedback,
                candidates_before,
                candidates_after: 1,
            });
            return Ok(PlayOutcome {
                rounds: turn.round,
                final_guess: guess.clone(),
                solved: true,
                history,
            });
        }

        candidates.narrow(guess, turn.feedback)?;
        history.push(GuessStep {
            round: turn.round,
            guess: guess.clone(),
            feedback: turn.feedback,
            candidates_before,
            candidates_after: candidates.len(),
        });

        if max_rounds.is_some_and(|cap| turn.round >= cap.get()) {
            warn!(
                "{} did not converge within {} rounds",
                strategy.name(),
                turn.round
            );
            return Ok(PlayOutcome {
                rounds: turn.round,
                final_guess: guess.clone(),
                solved: false,
                history,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::strategy::{
        FirstStrategy, MinimaxStrategy, RandomStrategy, SampledMinimaxStrategy, StrategyFactory,
        StrategyKind,
    };
    use crate::wordlists::{WORDS, words_of_length};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const SMALL: &[&str] = &[
        "ocean", "canoe", "apple", "angle", "crane", "slate", "irate", "crate", "grate", "trace",
    ];

    fn pool(words: &[&str]) -> Vec<Word> {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn first_guess_correct_takes_one_round() {
        let words = pool(SMALL);
        let mut session = Session::new(w("ocean"));
        let mut rng = StdRng::seed_from_u64(0);

        let outcome = play(&FirstStrategy, &mut session, &words, &mut rng, None).unwrap();

        assert_eq!(outcome.rounds, 1);
        assert!(outcome.solved);
        assert_eq!(outcome.history[0].feedback, Feedback::new(5, 5));
    }

    #[test]
    fn every_strategy_solves_every_word() {
        let words = pool(SMALL);
        let factory = StrategyFactory::new(&words);
        let mut rng = StdRng::seed_from_u64(11);

        for kind in StrategyKind::ALL {
            let strategy = factory.create(kind);
            for solution in &words {
                let mut session = Session::new(solution.clone());
                let outcome = play(&strategy, &mut session, &words, &mut rng, None).unwrap();

                assert!(outcome.solved, "{kind} failed on {solution}");
                assert_eq!(&outcome.final_guess, solution);
                assert_eq!(outcome.rounds, session.round());
                assert!(outcome.rounds <= words.len());
            }
        }
    }

    #[test]
    fn candidate_counts_shrink_monotonically() {
        let words = pool(SMALL);
        let mut session = Session::new(w("trace"));
        let mut rng = StdRng::seed_from_u64(5);

        let outcome = play(&RandomStrategy, &mut session, &words, &mut rng, None).unwrap();

        for step in &outcome.history {
            assert!(step.candidates_after < step.candidates_before || step.candidates_after == 1);
        }
        for pair in outcome.history.windows(2) {
            assert_eq!(pair[0].candidates_after, pair[1].candidates_before);
        }
    }

    #[test]
    fn guess_first_is_deterministic() {
        let words = words_of_length(WORDS, 5);
        let mut rng = StdRng::seed_from_u64(0);

        let run = |rng: &mut StdRng| {
            let mut session = Session::new(w("zebra"));
            play(&FirstStrategy, &mut session, &words, rng, None).unwrap()
        };

        let first = run(&mut rng);
        let second = run(&mut rng);
        assert_eq!(first, second);
    }

    #[test]
    fn round_cap_reports_non_convergence() {
        let words = pool(SMALL);
        let mut session = Session::new(w("trace"));
        let mut rng = StdRng::seed_from_u64(0);
        let cap = NonZeroUsize::new(1);

        let outcome = play(&FirstStrategy, &mut session, &words, &mut rng, cap).unwrap();

        assert!(!outcome.solved);
        assert_eq!(outcome.rounds, 1);
        assert_eq!(outcome.final_guess.text(), "ocean");
        assert!(!session.is_terminated());
    }

    #[test]
    fn solution_outside_pool_is_contradiction() {
        let words = pool(&["crane", "crate", "grate"]);
        let mut session = Session::new(w("zzzzz"));
        let mut rng = StdRng::seed_from_u64(0);

        let err = play(&FirstStrategy, &mut session, &words, &mut rng, None).unwrap_err();
        assert!(matches!(err, SolveError::Contradiction(_)));
    }

    #[test]
    fn empty_pool_is_no_guess() {
        let words: Vec<Word> = Vec::new();
        let mut session = Session::new(w("ocean"));
        let mut rng = StdRng::seed_from_u64(0);

        let err = play(&RandomStrategy, &mut session, &words, &mut rng, None).unwrap_err();
        assert_eq!(
            err,
            SolveError::NoGuess {
                strategy: "guess_random",
                remaining: 0
            }
        );
    }

    #[test]
    fn length_mismatch_surfaces_session_error() {
        let words = pool(&["cranes", "crates"]);
        let mut session = Session::new(w("ocean"));
        let mut rng = StdRng::seed_from_u64(0);

        let err = play(
            &SampledMinimaxStrategy::default(),
            &mut session,
            &words,
            &mut rng,
            None,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SolveError::Session(SessionError::LengthMismatch { .. })
        ));
        assert_eq!(session.round(), 0);
    }

    #[test]
    fn minimax_averages_no_worse_than_random() {
        // Minimax needs 2.0 rounds on average here, random about 2.3
        let words = pool(&[
            "elect", "shore", "piece", "steel", "joint", "dealt", "dance", "table", "cause",
            "grief",
        ]);
        let minimax = MinimaxStrategy::for_pool(&words);
        let mut rng = StdRng::seed_from_u64(2024);
        let trials = 400;

        let mut minimax_rounds = 0;
        let mut random_rounds = 0;
        for trial in 0..trials {
            let solution = &words[trial % words.len()];

            let mut session = Session::new(solution.clone());
            minimax_rounds += play(&minimax, &mut session, &words, &mut rng, None)
                .unwrap()
                .rounds;

            let mut session = Session::new(solution.clone());
            random_rounds += play(&RandomStrategy, &mut session, &words, &mut rng, None)
                .unwrap()
                .rounds;
        }

        assert!(
            minimax_rounds <= random_rounds,
            "minimax {minimax_rounds} vs random {random_rounds}"
        );
    }
}
