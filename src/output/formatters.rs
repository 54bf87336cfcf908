//! Formatting utilities for terminal output

use crate::core::Feedback;

/// Describe feedback in words, e.g. "3 letters, 1 in place"
#[must_use]
pub fn describe_feedback(feedback: Feedback) -> String {
    let letters = feedback.letters();
    let positions = feedback.positions();
    format!(
        "{letters} {}, {positions} in place",
        if letters == 1 { "letter" } else { "letters" }
    )
}

/// "won 1 time" / "won 3 times"
#[must_use]
pub fn pluralize_wins(wins: usize) -> String {
    format!("won {wins} time{}", if wins == 1 { "" } else { "s" })
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
