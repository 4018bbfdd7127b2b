//! Formatting utilities for terminal output

use crate::core::{GuessResult, KeyboardState, LetterStatus, Word};
use colored::{ColoredString, Colorize};

/// Emoji square for a letter status
#[must_use]
pub const fn status_to_emoji(status: LetterStatus) -> char {
    match status {
        LetterStatus::Correct => '🟩',
        LetterStatus::Present => '🟨',
        LetterStatus::Missing => '⬛',
        LetterStatus::Unguessed => '⬜',
    }
}

/// Format a guess result as an emoji row
#[must_use]
pub fn result_to_emoji(result: &GuessResult) -> String {
    result
        .statuses()
        .iter()
        .map(|&status| status_to_emoji(status))
        .collect()
}

/// Format a guess result as status codes, e.g. `YG-YGY`
#[must_use]
pub fn result_to_codes(result: &GuessResult) -> String {
    result.statuses().iter().map(|s| s.code()).collect()
}

/// A letter tile colored by its status
#[must_use]
pub fn colored_tile(letter: char, status: LetterStatus) -> ColoredString {
    let tile = format!(" {letter} ");
    match status {
        LetterStatus::Correct => tile.black().on_green().bold(),
        LetterStatus::Present => tile.black().on_yellow().bold(),
        LetterStatus::Missing => tile.white().on_bright_black(),
        LetterStatus::Unguessed => tile.normal(),
    }
}

/// A scored guess as a row of colored tiles
#[must_use]
pub fn colored_row(word: &Word, result: &GuessResult) -> String {
    word.text()
        .chars()
        .zip(result.statuses())
        .map(|(letter, &status)| colored_tile(letter, status).to_string())
        .collect()
}

/// The keyboard as three colored lines in QWERTY order
#[must_use]
pub fn colored_keyboard(keyboard: &KeyboardState) -> Vec<String> {
    keyboard
        .rows()
        .into_iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .into_iter()
                .map(|(letter, status)| colored_tile(char::from(letter), status).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent))
        })
        .collect()
}
