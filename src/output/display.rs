//! Display functions for command results

use super::formatters::{create_progress_bar, describe_feedback, pluralize_wins};
use crate::commands::{SolveResult, TournamentResult};
use crate::core::Feedback;
use colored::Colorize;

/// Print the tournament leaderboard, most wins first
pub fn print_tournament_result(result: &TournamentResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "TOURNAMENT RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n🎲 {} games in {:.2}s\n",
        result.games,
        result.duration.as_secs_f64()
    );

    for (rank, standing) in result.leaderboard().into_iter().enumerate() {
        let bar = create_progress_bar(standing.wins as f64, result.games as f64, 30);
        let line = format!("{} {}", standing.name, pluralize_wins(standing.wins));
        let line = if rank == 0 {
            line.bright_yellow().bold()
        } else {
            line.normal()
        };

        println!("   {line}");
        println!(
            "   {} avg {:.2} rounds, solved {}/{}",
            bar.green(),
            standing.average_rounds(),
            standing.solved,
            result.games
        );
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} with {}",
        result.target.to_uppercase().bright_yellow().bold(),
        result.strategy
    );
    println!("{}", "─".repeat(60).cyan());

    for step in &result.guesses {
        println!(
            "\nRound {}: {} {}",
            step.round,
            step.guess.text().to_uppercase(),
            describe_feedback(step.feedback).bright_black()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    let rounds = result.guesses.len();
    if result.success {
        println!(
            "{}",
            format!(
                "✅ Solved in {rounds} {} ({} words in play)",
                if rounds == 1 { "round" } else { "rounds" },
                result.pool_size
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Did not converge in {rounds} rounds").red().bold()
        );
    }
}

/// Print the feedback for a single guess
pub fn print_score(solution: &str, guess: &str, feedback: Feedback) {
    println!(
        "{} vs {}: {} ({})",
        guess.to_lowercase().bright_white().bold(),
        solution.to_lowercase().bright_white(),
        feedback.to_string().bright_yellow().bold(),
        describe_feedback(feedback)
    );
}
