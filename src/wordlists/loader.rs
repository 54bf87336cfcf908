//! Word list loading utilities
//!
//! Reads whitespace-delimited word files and narrows raw word lists down to a
//! legal word set of one length.

use crate::core::Word;
use log::debug;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load raw words from a file
///
/// Any whitespace separates words; nothing is validated here.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use jotto_solver::wordlists::loader::{load_from_file, words_of_length};
///
/// let raw = load_from_file("ospd.txt").unwrap();
/// let legal = words_of_length(&raw, 5);
/// println!("Loaded {} five-letter words", legal.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.split_whitespace().map(str::to_string).collect())
}

/// Build the legal word set: valid words of exactly `length` letters
///
/// Words are lowercased, invalid entries are skipped and repeats are dropped;
/// the first occurrence keeps its position so the result order follows the
/// input order.
///
/// # Examples
/// ```
/// use jotto_solver::wordlists::loader::words_of_length;
///
/// let words = words_of_length(["Ocean", "oceans", "canoe", "ocean", "c4noe"], 5);
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["ocean", "canoe"]);
/// ```
#[must_use]
pub fn words_of_length<I, S>(words: I, length: usize) -> Vec<Word>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut skipped = 0usize;

    let legal: Vec<Word> = words
        .into_iter()
        .filter_map(|raw| {
            let raw = raw.as_ref();
            if raw.len() != length {
                return None;
            }
            match Word::new(raw) {
                Ok(word) if seen.insert(word.text().to_string()) => Some(word),
                Ok(_) => None,
                Err(_) => {
                    skipped += 1;
                    None
                }
            }
        })
        .collect();

    debug!(
        "kept {} words of length {length}, skipped {skipped} invalid",
        legal.len()
    );
    legal
}
