//! Word lists for the game
//!
//! Provides the embedded six-letter word list, a file loader, and the
//! [`Dictionary`] seam the game session uses for validation and target draws.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, WordList, WordListError};
pub use embedded::{WORDS, WORDS_COUNT};
