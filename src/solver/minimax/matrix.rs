//! Pairwise score matrix for full minimax
//!
//! Holds the combined feedback score for every pair of words in a pool. It is
//! built once, then queried each round by restricting rows and columns to the
//! still-live pool indices.

use super::calculator::combined_score;
use crate::core::Word;
use log::info;
use rayon::prelude::*;
use std::time::Instant;

/// Dense, symmetric `n x n` table of combined scores
#[derive(Debug, Clone)]
pub struct ScoreMatrix {
    size: usize,
    cells: Vec<u8>,
}

impl ScoreMatrix {
    /// Score every pair of words in `pool`
    ///
    /// This is the quadratic step; rows are filled in parallel.
    ///
    /// # Examples
    /// ```
    /// use jotto_solver::core::Word;
    /// use jotto_solver::solver::minimax::ScoreMatrix;
    ///
    /// let pool = vec![Word::new("ocean").unwrap(), Word::new("canoe").unwrap()];
    /// let matrix = ScoreMatrix::build(&pool);
    ///
    /// assert_eq!(matrix.get(0, 0), 10);
    /// assert_eq!(matrix.get(0, 1), 5);
    /// ```
    #[must_use]
    pub fn build(pool: &[Word]) -> Self {
        let start = Instant::now();
        let size = pool.len();
        let mut cells = vec![0u8; size * size];

        if size > 0 {
            cells
                .par_chunks_mut(size)
                .enumerate()
                .for_each(|(row, scores)| {
                    let guess = &pool[row];
                    for (cell, other) in scores.iter_mut().zip(pool) {
                        *cell = combined_score(other, guess);
                    }
                });
        }

        info!(
            "built {size}x{size} score matrix in {:.2?}",
            start.elapsed()
        );

        Self { size, cells }
    }

    /// Number of words (rows) covered
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Combined score between pool indices `row` and `col`
    ///
    /// # Panics
    /// Panics if either index is `>= self.size()`
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        assert!(row < self.size && col < self.size, "index outside matrix");
        self.cells[row * self.size + col]
    }

    /// Lowest score in `row` across the `live` columns
    ///
    /// `None` if `live` is empty.
    #[must_use]
    pub fn worst_case(&self, row: usize, live: &[usize]) -> Option<u8> {
        let cells = &self.cells[row * self.size..(row + 1) * self.size];
        live.iter().map(|&col| cells[col]).min()
    }
}
