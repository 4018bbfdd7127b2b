//! Sixle
//!
//! A six-letter word guessing game: six attempts, per-letter feedback and a
//! keyboard that remembers what each letter has revealed.
//!
//! # Quick Start
//!
//! ```rust
//! use sixle::core::{KeyboardState, LetterStatus, Word, evaluate};
//!
//! let target = Word::new("garden").unwrap();
//! let guess = Word::new("danger").unwrap();
//!
//! let (result, keyboard) = evaluate(&target, &guess, &KeyboardState::INITIAL);
//! assert_eq!(result.status_at(1), LetterStatus::Correct);
//! assert_eq!(keyboard.status(b'D'), Some(LetterStatus::Present));
//! ```

// Core domain types
pub mod core;

// Game rules and session driver
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;
