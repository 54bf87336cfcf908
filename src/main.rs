//! Jotto Solver - CLI
//!
//! Runs strategy tournaments, traces single games and scores guesses.

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use jotto_solver::{
    commands::{SolveConfig, TournamentConfig, run_tournament, score_words, solve_word},
    core::Word,
    output::{print_score, print_solve_result, print_tournament_result},
    solver::StrategyKind,
    wordlists::{WORDS, load_from_file, words_of_length},
};
use log::info;
use std::num::NonZeroUsize;

#[derive(Parser)]
#[command(
    name = "jotto",
    about = "Jotto solver: constraint propagation and minimax guessing strategies",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a whitespace-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Word length to play with (`solve` uses the target word's length instead)
    #[arg(short, long, global = true, default_value_t = 5)]
    length: usize,

    /// Seed for every random choice (solutions and strategies)
    #[arg(long, global = true, default_value_t = 0)]
    seed: u64,

    /// Give up after this many rounds and count the game as unsolved
    #[arg(long, global = true)]
    max_rounds: Option<NonZeroUsize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pit strategies against each other on random solutions (default)
    Compete {
        /// Number of games to play
        #[arg(short = 'n', long, default_value_t = 30)]
        games: usize,

        /// Comma-separated roster: first, random, sampled-minimax, minimax
        #[arg(
            short,
            long,
            value_delimiter = ',',
            default_value = "first,random,sampled-minimax"
        )]
        strategies: Vec<StrategyKind>,
    },

    /// Solve a specific target word with one strategy
    Solve {
        /// The target word to solve
        word: String,

        /// Strategy: first, random, sampled-minimax, minimax
        #[arg(short, long, default_value = "minimax")]
        strategy: StrategyKind,

        /// Show candidate counts for each round
        #[arg(short, long)]
        verbose: bool,
    },

    /// Score a guess against a solution
    Score {
        solution: String,
        guess: String,
    },
}

/// Load the legal word set based on the -w and -l flags
fn load_words(wordlist: &str, length: usize) -> Result<Vec<Word>> {
    let words = match wordlist {
        "embedded" => words_of_length(WORDS, length),
        path => {
            let raw = load_from_file(path)
                .with_context(|| format!("Failed to read word list '{path}'"))?;
            words_of_length(&raw, length)
        }
    };

    ensure!(
        !words.is_empty(),
        "No valid {length}-letter words in word list '{wordlist}'"
    );
    info!("loaded {} words of length {length}", words.len());
    Ok(words)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Compete {
        games: 30,
        strategies: vec![
            StrategyKind::First,
            StrategyKind::Random,
            StrategyKind::SampledMinimax,
        ],
    });

    match command {
        Commands::Compete { games, strategies } => {
            ensure!(!strategies.is_empty(), "At least one strategy is required");
            let words = load_words(&cli.wordlist, cli.length)?;

            println!(
                "Running {games} games between {} strategies over {} words...",
                strategies.len(),
                words.len()
            );

            let config = TournamentConfig {
                games,
                seed: cli.seed,
                max_rounds: cli.max_rounds,
                show_progress: true,
            };
            let result = run_tournament(&strategies, &words, &config)?;
            print_tournament_result(&result);
        }
        Commands::Solve {
            word,
            strategy,
            verbose,
        } => {
            let words = load_words(&cli.wordlist, word.len())?;
            let config = SolveConfig {
                target: word,
                strategy,
                seed: cli.seed,
                max_rounds: cli.max_rounds,
            };
            let result = solve_word(&config, &words)?;
            print_solve_result(&result, verbose);
        }
        Commands::Score { solution, guess } => {
            let feedback = score_words(&solution, &guess)?;
            print_score(&solution, &guess, feedback);
        }
    }

    Ok(())
}
