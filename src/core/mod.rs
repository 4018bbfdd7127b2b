//! Core domain types for the game
//!
//! Words, letter statuses, keyboard state and the guess evaluator. Everything
//! here is pure and independent of word lists, timing and rendering.

mod evaluator;
mod keyboard;
mod status;
mod word;

pub use evaluator::{GuessResult, evaluate};
pub use keyboard::{KEYBOARD_ROWS, KeyboardState};
pub use status::LetterStatus;
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 6;

/// Number of guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;
