//! Word list loading utilities
//!
//! Parses newline-delimited word lists from files, strings, or the embedded
//! constant.

use super::{WORDS, WordList, WordListError};
use crate::core::Word;
use log::debug;
use std::fs;
use std::path::Path;

/// Parse a newline-delimited word list
///
/// Accepts `\n` and `\r\n` line endings and skips blank lines. Every other
/// line must be a valid word.
///
/// # Errors
///
/// Returns `WordListError::InvalidEntry` for the first malformed line, or
/// `WordListError::Empty` if the content holds no words.
///
/// # Examples
/// ```
/// use sixle::wordlists::loader::parse_words;
///
/// let list = parse_words("garden\r\ndanger\r\n").unwrap();
/// assert_eq!(list.len(), 2);
/// ```
pub fn parse_words(content: &str) -> Result<WordList, WordListError> {
    let words = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, text)| !text.is_empty())
        .map(|(line, text)| {
            Word::new(text).map_err(|source| WordListError::InvalidEntry {
                line,
                text: text.to_string(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    WordList::new(words)
}

/// Load a word list from a file
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read, otherwise the
/// errors of [`parse_words`].
///
/// # Examples
/// ```no_run
/// use sixle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let list = parse_words(&content)?;
    debug!("loaded {} words from {}", list.len(), path.display());
    Ok(list)
}

/// Convert a string slice of words into a word list
///
/// # Errors
///
/// Returns the first invalid entry (1-based index), or `Empty` for no words.
pub fn words_from_slice(slice: &[&str]) -> Result<WordList, WordListError> {
    let words = slice
        .iter()
        .enumerate()
        .map(|(i, &text)| {
            Word::new(text).map_err(|source| WordListError::InvalidEntry {
                line: i + 1,
                text: text.to_string(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    WordList::new(words)
}

/// The word list compiled into the binary
///
/// # Errors
///
/// Only fails if the embedded data is malformed.
pub fn embedded() -> Result<WordList, WordListError> {
    words_from_slice(WORDS)
}
