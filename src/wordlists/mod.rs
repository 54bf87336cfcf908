//! Word lists for Jotto
//!
//! Provides the embedded word list compiled into the binary plus loaders for
//! custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{load_from_file, words_of_length};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_lowercase_letters() {
        for &word in WORDS {
            assert!(
                !word.is_empty() && word.bytes().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' is not lowercase alphabetic"
            );
        }
    }

    #[test]
    fn embedded_words_have_no_repeats() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn embedded_list_has_five_letter_words() {
        let legal = words_of_length(WORDS, 5);
        assert!(legal.len() >= 500);
        for word in ["ocean", "canoe", "apple", "angle"] {
            assert!(legal.iter().any(|w| w.text() == word), "missing {word}");
        }
    }

    #[test]
    fn lengths_partition_the_list() {
        let total: usize = (1..=crate::core::MAX_WORD_LENGTH)
            .map(|n| words_of_length(WORDS, n).len())
            .sum();
        assert_eq!(total, WORDS.len());
    }
}
