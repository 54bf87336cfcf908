//! Minimax-based guess selection
//!
//! Picks the guess whose worst-case combined score against the other
//! candidates is highest. Ties go to the earliest candidate in iteration order.

use super::calculator::calculate_worst_case;
use super::matrix::ScoreMatrix;
use crate::core::Word;
use rayon::prelude::*;
use std::cmp::Reverse;

/// Select the best guess among `live` pool indices using a prebuilt matrix
///
/// Returns the chosen pool index and its worst-case score, or `None` if
/// `live` is empty.
///
/// # Examples
/// ```
/// use jotto_solver::core::Word;
/// use jotto_solver::solver::minimax::{ScoreMatrix, select_best_guess};
///
/// let pool: Vec<Word> = ["apple", "maple", "ample"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let matrix = ScoreMatrix::build(&pool);
///
/// let (best, worst) = select_best_guess(&matrix, &[0, 1, 2]).unwrap();
/// assert_eq!(pool[best].text(), "ample");
/// assert_eq!(worst, 8);
/// ```
#[must_use]
pub fn select_best_guess(matrix: &ScoreMatrix, live: &[usize]) -> Option<(usize, u8)> {
    live.par_iter()
        .enumerate()
        .filter_map(|(order, &row)| matrix.worst_case(row, live).map(|worst| (order, row, worst)))
        .max_by_key(|&(order, _, worst)| (worst, Reverse(order)))
        .map(|(_, row, worst)| (row, worst))
}

/// Select the best guess among a sample of words, scoring pairs on the fly
///
/// `sample` holds `(pool index, word)` pairs; the returned index is taken
/// from it. `None` if the sample is empty.
#[must_use]
pub fn select_sampled_guess(sample: &[(usize, &Word)]) -> Option<(usize, u8)> {
    let words: Vec<&Word> = sample.iter().map(|&(_, word)| word).collect();

    sample
        .iter()
        .enumerate()
        .filter_map(|(order, &(index, word))| {
            calculate_worst_case(word, &words).map(|worst| (order, index, worst))
        })
        .max_by_key(|&(order, _, worst)| (worst, Reverse(order)))
        .map(|(_, index, worst)| (index, worst))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(words: &[&str]) -> Vec<Word> {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn selects_highest_worst_case() {
        // "pluck" shares little with the rest, so nobody wants to guess it,
        // and every other row has "pluck" as its worst column
        let words = pool(&["crane", "crate", "pluck", "grate"]);
        let matrix = ScoreMatrix::build(&words);
        let live: Vec<usize> = (0..words.len()).collect();

        let (best, worst) = select_best_guess(&matrix, &live).unwrap();
        let expected = live
            .iter()
            .map(|&i| matrix.worst_case(i, &live).unwrap())
            .max()
            .unwrap();

        assert_eq!(worst, expected);
        assert_ne!(words[best].text(), "pluck");
    }

    #[test]
    fn ties_go_to_first_in_order() {
        // Disjoint letters: every off-diagonal score is 0
        let words = pool(&["abcde", "fghij", "klmno"]);
        let matrix = ScoreMatrix::build(&words);

        assert_eq!(select_best_guess(&matrix, &[0, 1, 2]), Some((0, 0)));
        assert_eq!(select_best_guess(&matrix, &[2, 1, 0]), Some((2, 0)));
    }

    #[test]
    fn single_live_word_is_selected() {
        let words = pool(&["ocean", "canoe"]);
        let matrix = ScoreMatrix::build(&words);

        assert_eq!(select_best_guess(&matrix, &[1]), Some((1, 10)));
    }

    #[test]
    fn restricting_live_changes_the_answer() {
        let words = pool(&["apple", "maple", "ample", "zzzzz"]);
        let matrix = ScoreMatrix::build(&words);

        // With "zzzzz" live every worst case is 0, first wins
        assert_eq!(select_best_guess(&matrix, &[0, 1, 2, 3]), Some((0, 0)));
        // Without it "ample" is closest to both others
        assert_eq!(select_best_guess(&matrix, &[0, 1, 2]), Some((2, 8)));
    }

    #[test]
    fn returns_none_when_nothing_live() {
        let words = pool(&["ocean"]);
        let matrix = ScoreMatrix::build(&words);
        assert_eq!(select_best_guess(&matrix, &[]), None);
    }

    #[test]
    fn sampled_agrees_with_matrix_on_same_words() {
        let words = pool(&["apple", "angle", "ample", "ocean", "canoe"]);
        let matrix = ScoreMatrix::build(&words);
        let live: Vec<usize> = (0..words.len()).collect();
        let sample: Vec<(usize, &Word)> = live.iter().map(|&i| (i, &words[i])).collect();

        assert_eq!(select_sampled_guess(&sample), select_best_guess(&matrix, &live));
    }

    #[test]
    fn sampled_returns_pool_index_not_sample_position() {
        let words = pool(&["apple", "maple", "ample"]);
        let sample = vec![(7, &words[0]), (3, &words[1]), (9, &words[2])];

        assert_eq!(select_sampled_guess(&sample), Some((9, 8)));
        assert_eq!(select_sampled_guess(&[]), None);
    }
}
