//! Render-ready view of a game

use super::{GameState, Phase};
use crate::core::{LetterStatus, MAX_ATTEMPTS, WORD_LENGTH};

/// Display state of one grid cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellState {
    #[default]
    Empty,
    /// Typed into the current attempt, not yet submitted
    Pending,
    /// Part of a submitted attempt
    Scored(LetterStatus),
}

/// One cell of the guess grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<char>,
    pub state: CellState,
}

/// Everything a presentation layer needs to draw a frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub grid: [[Cell; WORD_LENGTH]; MAX_ATTEMPTS],
    /// Keyboard rows in QWERTY order
    pub keyboard: Vec<Vec<(char, LetterStatus)>>,
    pub phase: Phase,
    /// Number of submitted attempts
    pub attempt: usize,
    pub invalid_word: bool,
    pub message: Option<String>,
}

impl Snapshot {
    /// Build a snapshot of `state`
    #[must_use]
    pub fn capture(state: &GameState, invalid_word: bool) -> Self {
        let mut grid = [[Cell::default(); WORD_LENGTH]; MAX_ATTEMPTS];

        for (row, attempt) in grid.iter_mut().zip(state.attempts()) {
            for (i, cell) in row.iter_mut().enumerate() {
                *cell = Cell {
                    letter: Some(char::from(attempt.word.letter_at(i))),
                    state: CellState::Scored(attempt.result.status_at(i)),
                };
            }
        }

        if state.phase() == Phase::InProgress
            && let Some(row) = grid.get_mut(state.attempt_index())
        {
            for (cell, letter) in row.iter_mut().zip(state.buffer().chars()) {
                *cell = Cell {
                    letter: Some(letter),
                    state: CellState::Pending,
                };
            }
        }

        let keyboard = state
            .keyboard()
            .rows()
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|(letter, status)| (char::from(letter), status))
                    .collect()
            })
            .collect();

        Self {
            grid,
            keyboard,
            phase: state.phase(),
            attempt: state.attempt_index(),
            invalid_word,
            message: state.outcome_message(),
        }
    }

    /// Grid row as a plain string, blanks as spaces
    #[cfg(test)]
    pub(crate) fn row_text(&self, row: usize) -> String {
        self.grid
            .get(row)
            .map(|cells| cells.iter().map(|c| c.letter.unwrap_or(' ')).collect())
            .unwrap_or_default()
    }
}
