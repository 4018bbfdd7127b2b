//! Keyboard state: best-known status of every letter across a game

use super::LetterStatus;

/// On-screen keyboard layout, top row first
pub const KEYBOARD_ROWS: [&[u8]; 3] = [b"QWERTYUIOP", b"ASDFGHJKL", b"ZXCVBNM"];

/// Best-known status per letter A-Z
///
/// A plain `Copy` value: every game starts from [`KeyboardState::INITIAL`]
/// and evaluation produces a new state rather than mutating a shared one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardState([LetterStatus; 26]);

impl KeyboardState {
    /// All letters unguessed
    pub const INITIAL: Self = Self([LetterStatus::Unguessed; 26]);

    /// Status of an uppercase ASCII letter
    ///
    /// Returns `None` for anything outside `A..=Z`.
    #[must_use]
    pub fn status(&self, letter: u8) -> Option<LetterStatus> {
        Self::index(letter).map(|i| self.0[i])
    }

    /// Record a status for a letter, keeping the better of old and new
    ///
    /// Non-letters are ignored.
    pub fn upgrade(&mut self, letter: u8, status: LetterStatus) {
        if let Some(i) = Self::index(letter) {
            self.0[i] = self.0[i].merge(status);
        }
    }

    /// Iterate over `(letter, status)` in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (u8, LetterStatus)> + '_ {
        (b'A'..=b'Z').zip(self.0.iter().copied())
    }

    /// Keyboard rows in QWERTY order with their statuses
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<(u8, LetterStatus)>> {
        KEYBOARD_ROWS
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&letter| (letter, self.status(letter).unwrap_or_default()))
                    .collect()
            })
            .collect()
    }

    fn index(letter: u8) -> Option<usize> {
        letter
            .is_ascii_uppercase()
            .then(|| usize::from(letter - b'A'))
    }
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::INITIAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_is_all_unguessed() {
        let keyboard = KeyboardState::default();
        assert_eq!(keyboard.iter().count(), 26);
        assert!(keyboard.iter().all(|(_, s)| s == LetterStatus::Unguessed));
    }

    #[test]
    fn upgrade_is_monotonic() {
        let mut keyboard = KeyboardState::INITIAL;
        keyboard.upgrade(b'E', LetterStatus::Correct);
        keyboard.upgrade(b'E', LetterStatus::Present);
        keyboard.upgrade(b'E', LetterStatus::Missing);
        assert_eq!(keyboard.status(b'E'), Some(LetterStatus::Correct));

        keyboard.upgrade(b'Q', LetterStatus::Missing);
        keyboard.upgrade(b'Q', LetterStatus::Present);
        assert_eq!(keyboard.status(b'Q'), Some(LetterStatus::Present));
    }

    #[test]
    fn initial_constant_is_not_shared() {
        let mut first = KeyboardState::INITIAL;
        first.upgrade(b'A', LetterStatus::Correct);
        assert_eq!(
            KeyboardState::INITIAL.status(b'A'),
            Some(LetterStatus::Unguessed)
        );
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut keyboard = KeyboardState::INITIAL;
        keyboard.upgrade(b'1', LetterStatus::Correct);
        keyboard.upgrade(b'a', LetterStatus::Correct);
        assert_eq!(keyboard, KeyboardState::INITIAL);
        assert_eq!(keyboard.status(b'a'), None);
    }

    #[test]
    fn rows_follow_qwerty_layout() {
        let rows = KeyboardState::INITIAL.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].len(), 10);
        assert_eq!(rows[1].len(), 9);
        assert_eq!(rows[2].len(), 7);
        assert_eq!(rows[0][0].0, b'Q');
        assert_eq!(rows[2][6].0, b'M');
    }
}
