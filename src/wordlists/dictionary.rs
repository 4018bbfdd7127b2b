//! Loaded word list and the lookup interface the game depends on

use crate::core::{WORD_LENGTH, Word, WordError};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;

/// Word lookup service used by the game session
///
/// The session only needs membership tests and uniform target draws; any
/// source that can answer both can back a game.
pub trait Dictionary {
    /// Check whether a guess is an accepted word
    fn is_valid_word(&self, word: &Word) -> bool;

    /// Draw a target word uniformly at random
    fn pick_random_word<R: Rng>(&self, rng: &mut R) -> Word;
}

/// Errors raised while loading a word list
#[derive(Debug)]
pub enum WordListError {
    /// The word list could not be read
    Io(io::Error),
    /// The word list contained no words
    Empty,
    /// A line was not a valid word
    InvalidEntry {
        line: usize,
        text: String,
        source: WordError,
    },
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read word list: {e}"),
            Self::Empty => write!(f, "Word list is empty"),
            Self::InvalidEntry { line, text, source } => {
                write!(f, "Invalid word '{text}' on line {line}: {source}")
            }
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Empty => None,
            Self::InvalidEntry { source, .. } => Some(source),
        }
    }
}

impl From<io::Error> for WordListError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// A non-empty, duplicate-free list of words
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<[u8; WORD_LENGTH]>,
}

impl WordList {
    /// Build a word list, dropping duplicates while keeping first-seen order
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if no words are given.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, WordListError> {
        let mut index = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|word| index.insert(*word.letters()))
            .collect();

        if words.is_empty() {
            return Err(WordListError::Empty);
        }

        Ok(Self { words, index })
    }

    /// Number of words in the list
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: a `WordList` cannot be constructed empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-insensitive membership test on raw text
    ///
    /// Returns false for anything that is not a valid word.
    #[cfg(test)]
    pub(crate) fn contains_text(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.is_valid_word(&word))
    }

    /// All words in load order
    #[cfg(test)]
    pub(crate) fn words(&self) -> &[Word] {
        &self.words
    }
}

impl Dictionary for WordList {
    fn is_valid_word(&self, word: &Word) -> bool {
        self.index.contains(word.letters())
    }

    fn pick_random_word<R: Rng>(&self, rng: &mut R) -> Word {
        // Non-empty by construction
        self.words[rng.random_range(0..self.words.len())].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn list(words: &[&str]) -> WordList {
        WordList::new(words.iter().map(|w| Word::new(w).unwrap())).unwrap()
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(matches!(
            WordList::new(std::iter::empty()),
            Err(WordListError::Empty)
        ));
    }

    #[test]
    fn duplicates_are_dropped() {
        let words = list(&["garden", "GARDEN", "danger"]);
        assert_eq!(words.len(), 2);
        assert_eq!(words.words()[0].text(), "GARDEN");
        assert_eq!(words.words()[1].text(), "DANGER");
    }

    #[test]
    fn membership_is_case_insensitive() {
        let words = list(&["garden", "danger"]);
        assert!(words.contains_text("garden"));
        assert!(words.contains_text("GaRdEn"));
        assert!(!words.contains_text("ranged"));
        assert!(!words.contains_text("gard"));
        assert!(words.is_valid_word(&Word::new("DANGER").unwrap()));
    }

    #[test]
    fn random_pick_is_a_member() {
        let words = list(&["garden", "danger", "ranged"]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let word = words.pick_random_word(&mut rng);
            assert!(words.is_valid_word(&word));
        }
    }

    #[test]
    fn random_pick_reaches_every_word() {
        let words = list(&["garden", "danger", "ranged"]);
        let mut rng = StdRng::seed_from_u64(42);
        let seen: FxHashSet<String> = (0..200)
            .map(|_| words.pick_random_word(&mut rng).text().to_string())
            .collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn single_word_list_always_picks_it() {
        let words = list(&["garden"]);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(words.pick_random_word(&mut rng).text(), "GARDEN");
        assert!(!words.is_empty());
    }
}
