//! Guess evaluation
//!
//! Scores a guess against the target letter group by letter group:
//!
//! - a letter absent from the target is Missing everywhere it was guessed
//! - a letter whose target positions are all covered by the guess is Correct
//!   on those positions and Missing on any extra repeats
//! - otherwise every guessed occurrence of the letter is Present
//!
//! This differs from canonical Wordle on duplicate letters (there is no
//! per-occurrence matching), and the third rule marks a correctly placed
//! letter Present when the guess misses another of its target positions.

use super::{KeyboardState, LetterStatus, WORD_LENGTH, Word};

/// Feedback for a single guess, one status per position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessResult([LetterStatus; WORD_LENGTH]);

impl GuessResult {
    /// Per-position statuses
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Status at a specific position
    ///
    /// # Panics
    /// Panics if `position >= WORD_LENGTH`
    #[inline]
    #[must_use]
    pub const fn status_at(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    /// True when every position is Correct
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Number of positions with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }
}

/// Evaluate `guess` against `target`, folding the outcome into `keyboard`
///
/// Total over valid words: the `Word` type already guarantees both inputs
/// are `WORD_LENGTH` uppercase letters.
///
/// # Examples
/// ```
/// use sixle::core::{KeyboardState, LetterStatus, Word, evaluate};
///
/// let target = Word::new("garden").unwrap();
/// let guess = Word::new("danger").unwrap();
/// let (result, keyboard) = evaluate(&target, &guess, &KeyboardState::INITIAL);
///
/// assert_eq!(result.status_at(1), LetterStatus::Correct); // A
/// assert_eq!(result.status_at(0), LetterStatus::Present); // D
/// assert!(!result.is_win());
/// assert_eq!(keyboard.status(b'E'), Some(LetterStatus::Correct));
/// ```
#[must_use]
pub fn evaluate(
    target: &Word,
    guess: &Word,
    keyboard: &KeyboardState,
) -> (GuessResult, KeyboardState) {
    let mut statuses = [LetterStatus::Unguessed; WORD_LENGTH];
    let mut keyboard = *keyboard;

    for (letter, guessed_at) in guess.letter_groups() {
        let target_at = target.positions_of(letter);

        if target_at.is_empty() {
            for &p in guessed_at {
                statuses[p] = LetterStatus::Missing;
            }
            keyboard.upgrade(letter, LetterStatus::Missing);
        } else if target_at.iter().all(|p| guessed_at.contains(p)) {
            for &p in guessed_at {
                let status = if target_at.contains(&p) {
                    LetterStatus::Correct
                } else {
                    LetterStatus::Missing
                };
                statuses[p] = status;
                keyboard.upgrade(letter, status);
            }
        } else {
            for &p in guessed_at {
                statuses[p] = LetterStatus::Present;
            }
            keyboard.upgrade(letter, LetterStatus::Present);
        }
    }

    (GuessResult(statuses), keyboard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{Correct as C, Missing as M, Present as P};

    fn eval(target: &str, guess: &str) -> (GuessResult, KeyboardState) {
        let target = Word::new(target).unwrap();
        let guess = Word::new(guess).unwrap();
        evaluate(&target, &guess, &KeyboardState::INITIAL)
    }

    #[test]
    fn exact_guess_is_all_correct() {
        for word in ["garden", "banana", "zzzzzz", "bottle"] {
            let (result, keyboard) = eval(word, word);
            assert!(result.is_win());
            assert_eq!(result.count(C), WORD_LENGTH);
            for &letter in Word::new(word).unwrap().letters() {
                assert_eq!(keyboard.status(letter), Some(C));
            }
        }
    }

    #[test]
    fn disjoint_guess_is_all_missing() {
        let (result, keyboard) = eval("garden", "bitchy");
        assert_eq!(result.statuses(), &[M; WORD_LENGTH]);
        assert!(!result.is_win());
        for &letter in b"BITCHY" {
            assert_eq!(keyboard.status(letter), Some(M));
        }
        assert_eq!(keyboard.status(b'G'), Some(LetterStatus::Unguessed));
    }

    #[test]
    fn anagram_with_no_fixed_points_is_all_present() {
        // Every letter occurs once in each word and never at the same index,
        // so no target position is covered.
        let (result, keyboard) = eval("garden", "nedrag");
        assert_eq!(result.statuses(), &[P, P, P, P, P, P]);
        for &letter in b"GARDEN" {
            assert_eq!(keyboard.status(letter), Some(P));
        }
    }

    #[test]
    fn partial_anagram() {
        let (result, _) = eval("garden", "danger");
        assert_eq!(result.statuses(), &[P, C, P, P, C, P]);
    }

    #[test]
    fn repeated_letter_covering_target_marks_extras_missing() {
        let (result, keyboard) = eval("garden", "gggggg");
        assert_eq!(result.statuses(), &[C, M, M, M, M, M]);
        assert_eq!(keyboard.status(b'G'), Some(C));
    }

    #[test]
    fn repeated_letters_covering_all_target_occurrences() {
        let (result, keyboard) = eval("banana", "baaaaa");
        assert_eq!(result.statuses(), &[C, C, M, C, M, C]);
        assert_eq!(keyboard.status(b'A'), Some(C));

        let (result, _) = eval("banana", "nnnnnn");
        assert_eq!(result.statuses(), &[M, M, C, M, C, M]);
    }

    #[test]
    fn uncovered_target_occurrence_marks_every_guess_position_present() {
        // A sits at index 1 in both words, but BANANA has two more A's the
        // guess never hits, so it is Present rather than Correct.
        let (result, keyboard) = eval("banana", "banner");
        assert_eq!(result.statuses(), &[C, P, P, P, M, M]);
        assert_eq!(keyboard.status(b'B'), Some(C));
        assert_eq!(keyboard.status(b'A'), Some(P));
        assert_eq!(keyboard.status(b'N'), Some(P));
        assert_eq!(keyboard.status(b'E'), Some(M));
        assert_eq!(keyboard.status(b'R'), Some(M));
    }

    #[test]
    fn interleaved_duplicates() {
        let (result, _) = eval("banana", "ananas");
        assert_eq!(result.statuses(), &[P, P, P, P, P, M]);
    }

    #[test]
    fn keyboard_correct_is_never_downgraded() {
        let target = Word::new("garden").unwrap();
        let (_, keyboard) = evaluate(
            &target,
            &Word::new("gables").unwrap(),
            &KeyboardState::INITIAL,
        );
        assert_eq!(keyboard.status(b'G'), Some(C));

        // G guessed away from its target position now reads Present
        let (result, keyboard) = evaluate(&target, &Word::new("egging").unwrap(), &keyboard);
        assert_eq!(result.status_at(1), P);
        assert_eq!(keyboard.status(b'G'), Some(C));

        // ...and a fully covered G with extra repeats reads Missing on the extras
        let (result, keyboard) = evaluate(&target, &Word::new("gggggg").unwrap(), &keyboard);
        assert_eq!(result.status_at(5), M);
        assert_eq!(keyboard.status(b'G'), Some(C));
    }

    #[test]
    fn keyboard_input_is_not_mutated() {
        let before = KeyboardState::INITIAL;
        let target = Word::new("garden").unwrap();
        let (_, after) = evaluate(&target, &Word::new("danger").unwrap(), &before);
        assert_eq!(before, KeyboardState::INITIAL);
        assert_ne!(after, before);
    }
}
