//! Per-letter feedback status

use std::fmt;

/// Feedback classification for a guessed letter or a keyboard key
///
/// Variants are declared in rank order, so the derived `Ord` gives
/// `Correct > Present > Missing > Unguessed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    /// Not yet part of any submitted guess
    #[default]
    Unguessed,
    /// Not in the target word
    Missing,
    /// In the target word, but not placed correctly
    Present,
    /// In the target word at this position
    Correct,
}

impl LetterStatus {
    /// Merge two statuses, keeping the better-ranked one
    ///
    /// # Examples
    /// ```
    /// use sixle::core::LetterStatus;
    ///
    /// assert_eq!(LetterStatus::Correct.merge(LetterStatus::Missing), LetterStatus::Correct);
    /// assert_eq!(LetterStatus::Unguessed.merge(LetterStatus::Present), LetterStatus::Present);
    /// ```
    #[inline]
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        self.max(other)
    }

    /// Single-character code used in plain text output
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Unguessed => '.',
            Self::Missing => '-',
            Self::Present => 'Y',
            Self::Correct => 'G',
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unguessed => "unguessed",
            Self::Missing => "missing",
            Self::Present => "present",
            Self::Correct => "correct",
        };
        f.pad(name)
    }
}
