//! Compete command
//!
//! Plays many random games, lets every strategy in the roster solve each one
//! independently and awards the game to whoever needed the fewest rounds.

use crate::core::Word;
use crate::game::Session;
use crate::solver::{SolveError, Strategy, StrategyFactory, StrategyKind, StrategyType, play};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

/// Configuration for a tournament
#[derive(Debug, Clone)]
pub struct TournamentConfig {
    pub games: usize,
    pub seed: u64,
    pub max_rounds: Option<NonZeroUsize>,
    pub show_progress: bool,
}

impl TournamentConfig {
    #[must_use]
    pub const fn new(games: usize, seed: u64) -> Self {
        Self {
            games,
            seed,
            max_rounds: None,
            show_progress: false,
        }
    }
}

/// Tally for one strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyStanding {
    pub kind: StrategyKind,
    pub name: &'static str,
    pub wins: usize,
    pub solved: usize,
    pub total_rounds: usize,
}

impl StrategyStanding {
    /// Mean rounds over solved games
    #[must_use]
    pub fn average_rounds(&self) -> f64 {
        if self.solved == 0 {
            0.0
        } else {
            self.total_rounds as f64 / self.solved as f64
        }
    }
}

/// Result of a tournament
#[derive(Debug)]
pub struct TournamentResult {
    pub games: usize,
    /// One entry per roster strategy, in roster order
    pub standings: Vec<StrategyStanding>,
    pub duration: Duration,
}

impl TournamentResult {
    /// Standings sorted by wins, most first; equal wins keep roster order
    #[must_use]
    pub fn leaderboard(&self) -> Vec<&StrategyStanding> {
        let mut board: Vec<&StrategyStanding> = self.standings.iter().collect();
        board.sort_by(|a, b| b.wins.cmp(&a.wins));
        board
    }
}

/// Rounds a strategy needed in one game, `None` if it did not solve it
type GameRecord = Vec<Option<usize>>;

/// Index of the winning strategy for one game
///
/// Fewest rounds wins; unsolved counts as `usize::MAX`; ties go to the
/// earliest strategy in the roster.
#[must_use]
pub fn game_winner(record: &[Option<usize>]) -> Option<usize> {
    record
        .iter()
        .enumerate()
        .min_by_key(|&(_, rounds)| rounds.unwrap_or(usize::MAX))
        .map(|(index, _)| index)
}

/// Per-game random source, independent of how games are scheduled
fn game_rng(seed: u64, game: usize) -> StdRng {
    StdRng::seed_from_u64(seed ^ (game as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Run a tournament over `legal_words`
///
/// Games run in parallel. Each game draws its solution and all strategy
/// randomness from its own seeded generator, so a given seed always gives the
/// same standings. The word list and minimax matrix are shared read-only;
/// every strategy narrows its own candidate set.
///
/// # Errors
///
/// Returns the first [`SolveError`] any strategy hits.
pub fn run_tournament(
    roster: &[StrategyKind],
    legal_words: &[Word],
    config: &TournamentConfig,
) -> Result<TournamentResult, SolveError> {
    let start = Instant::now();
    let factory = StrategyFactory::new(legal_words);
    let strategies: Vec<StrategyType> = roster.iter().map(|&kind| factory.create(kind)).collect();

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.games as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} games ({percent}%) | {elapsed}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let records: Vec<GameRecord> = (0..config.games)
        .into_par_iter()
        .map(|game| {
            let record = play_game(&strategies, legal_words, config, game);
            pb.inc(1);
            record
        })
        .collect::<Result<_, _>>()?;

    pb.finish_and_clear();

    let mut standings: Vec<StrategyStanding> = roster
        .iter()
        .zip(&strategies)
        .map(|(&kind, strategy)| StrategyStanding {
            kind,
            name: strategy.name(),
            wins: 0,
            solved: 0,
            total_rounds: 0,
        })
        .collect();

    for record in &records {
        for (standing, rounds) in standings.iter_mut().zip(record) {
            if let Some(rounds) = rounds {
                standing.solved += 1;
                standing.total_rounds += rounds;
            }
        }
        if let Some(winner) = game_winner(record) {
            standings[winner].wins += 1;
        }
    }

    let duration = start.elapsed();
    info!(
        "played {} games with {} strategies in {:.2?}",
        config.games,
        roster.len(),
        duration
    );

    Ok(TournamentResult {
        games: config.games,
        standings,
        duration,
    })
}

fn play_game(
    strategies: &[StrategyType],
    legal_words: &[Word],
    config: &TournamentConfig,
    game: usize,
) -> Result<GameRecord, SolveError> {
    let mut rng = game_rng(config.seed, game);
    let solution = legal_words
        .choose(&mut rng)
        .ok_or(SolveError::EmptyWordList)?;

    strategies
        .iter()
        .map(|strategy| -> Result<Option<usize>, SolveError> {
            let mut session = Session::new(solution.clone());
            let outcome = play(strategy, &mut session, legal_words, &mut rng, config.max_rounds)?;
            Ok((outcome.solved && outcome.final_guess == *solution).then_some(outcome.rounds))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{WORDS, words_of_length};

    fn legal() -> Vec<Word> {
        words_of_length(WORDS, 5)
    }

    #[test]
    fn winner_is_fewest_rounds() {
        assert_eq!(game_winner(&[Some(4), Some(2), Some(3)]), Some(1));
    }

    #[test]
    fn winner_ties_go_to_earliest() {
        assert_eq!(game_winner(&[Some(3), Some(2), Some(2)]), Some(1));
        assert_eq!(game_winner(&[None, None]), Some(0));
        assert_eq!(game_winner(&[]), None);
    }

    #[test]
    fn unsolved_loses_to_any_solve() {
        assert_eq!(game_winner(&[None, Some(40)]), Some(1));
    }

    #[test]
    fn tournament_awards_one_win_per_game() {
        let words = legal();
        let roster = [StrategyKind::First, StrategyKind::Random, StrategyKind::SampledMinimax];
        let config = TournamentConfig::new(12, 7);

        let result = run_tournament(&roster, &words, &config).unwrap();

        assert_eq!(result.games, 12);
        assert_eq!(result.standings.len(), 3);
        assert_eq!(result.standings.iter().map(|s| s.wins).sum::<usize>(), 12);
        for standing in &result.standings {
            assert_eq!(standing.solved, 12);
            assert!(standing.average_rounds() >= 1.0);
        }
    }

    #[test]
    fn tournament_is_reproducible_for_a_seed() {
        let words = legal();
        let roster = [StrategyKind::Random, StrategyKind::SampledMinimax];
        let config = TournamentConfig::new(8, 99);

        let a = run_tournament(&roster, &words, &config).unwrap();
        let b = run_tournament(&roster, &words, &config).unwrap();

        assert_eq!(a.standings, b.standings);
    }

    #[test]
    fn single_strategy_wins_everything() {
        let words = legal();
        let config = TournamentConfig::new(5, 1);

        let result = run_tournament(&[StrategyKind::Minimax], &words, &config).unwrap();

        assert_eq!(result.standings[0].wins, 5);
        assert_eq!(result.standings[0].name, "guess_minimax");
    }

    #[test]
    fn identical_strategies_favor_the_first_listed() {
        let words = legal();
        let config = TournamentConfig::new(6, 3);

        let result =
            run_tournament(&[StrategyKind::First, StrategyKind::First], &words, &config).unwrap();

        assert_eq!(result.standings[0].wins, 6);
        assert_eq!(result.standings[1].wins, 0);
    }

    #[test]
    fn round_cap_counts_as_unsolved() {
        let words = legal();
        let mut config = TournamentConfig::new(6, 5);
        config.max_rounds = NonZeroUsize::new(1);

        let result = run_tournament(&[StrategyKind::First], &words, &config).unwrap();

        // Still one win per game even if nobody solved it
        assert_eq!(result.standings[0].wins, 6);
        assert!(result.standings[0].solved <= 6);
    }

    #[test]
    fn leaderboard_sorts_by_wins() {
        let result = TournamentResult {
            games: 5,
            standings: vec![
                StrategyStanding {
                    kind: StrategyKind::First,
                    name: "guess_first",
                    wins: 1,
                    solved: 5,
                    total_rounds: 30,
                },
                StrategyStanding {
                    kind: StrategyKind::Random,
                    name: "guess_random",
                    wins: 2,
                    solved: 5,
                    total_rounds: 25,
                },
                StrategyStanding {
                    kind: StrategyKind::Minimax,
                    name: "guess_minimax",
                    wins: 2,
                    solved: 5,
                    total_rounds: 20,
                },
            ],
            duration: Duration::ZERO,
        };

        let names: Vec<&str> = result.leaderboard().iter().map(|s| s.name).collect();
        assert_eq!(names, ["guess_random", "guess_minimax", "guess_first"]);
    }

    #[test]
    fn empty_word_list_is_an_error() {
        let config = TournamentConfig::new(1, 0);
        let err = run_tournament(&[StrategyKind::First], &[], &config).unwrap_err();
        assert_eq!(err, SolveError::EmptyWordList);
    }
}
