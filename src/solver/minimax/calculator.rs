//! Worst-case score calculation for Jotto guesses
//!
//! Minimax here maximizes the *lowest* combined score (letters + positions) a
//! guess can draw against any remaining candidate: a guess whose worst case is
//! still high is guaranteed to produce informative feedback.

use crate::core::{Feedback, Word};

/// Letters-matched plus positions-matched for one pair of words
#[inline]
#[must_use]
pub fn combined_score(solution: &Word, guess: &Word) -> u8 {
    Feedback::calculate(solution, guess).combined()
}

/// Lowest combined score `guess` draws against any of `candidates`
///
/// Returns `None` if there are no candidates.
///
/// # Examples
/// ```
/// use jotto_solver::core::Word;
/// use jotto_solver::solver::minimax::calculate_worst_case;
///
/// let guess = Word::new("apple").unwrap();
/// let candidates = vec![
///     Word::new("angle").unwrap(),
///     Word::new("ocean").unwrap(),
/// ];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// assert_eq!(calculate_worst_case(&guess, &candidate_refs), Some(2));
/// ```
#[must_use]
pub fn calculate_worst_case(guess: &Word, candidates: &[&Word]) -> Option<u8> {
    candidates
        .iter()
        .map(|&candidate| combined_score(candidate, guess))
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worst_case_empty_candidates() {
        let guess = Word::new("ocean").unwrap();
        assert_eq!(calculate_worst_case(&guess, &[]), None);
    }

    #[test]
    fn worst_case_against_itself_is_maximal() {
        let guess = Word::new("ocean").unwrap();
        assert_eq!(calculate_worst_case(&guess, &[&guess]), Some(10));
    }

    #[test]
    fn worst_case_picks_least_similar_candidate() {
        let guess = Word::new("crane").unwrap();
        let candidates = [
            Word::new("crate").unwrap(), // 4 + 4
            Word::new("canoe").unwrap(), // c a n e + c
            Word::new("pluck").unwrap(), // c only
        ];
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        assert_eq!(calculate_worst_case(&guess, &candidate_refs), Some(1));
    }

    #[test]
    fn combined_score_is_symmetric() {
        let a = Word::new("speed").unwrap();
        let b = Word::new("erase").unwrap();
        assert_eq!(combined_score(&a, &b), combined_score(&b, &a));
        assert_eq!(combined_score(&a, &b), 3);
    }
}
