//! One-shot evaluation command
//!
//! Scores a single guess against a given target without running a game.

use crate::core::{GuessResult, KeyboardState, Word, evaluate};

/// Result of checking a guess against a target
pub struct CheckReport {
    pub target: Word,
    pub guess: Word,
    pub result: GuessResult,
    pub keyboard: KeyboardState,
}

/// Evaluate `guess` against `target`
///
/// Neither word has to be in a word list; both must be valid six-letter words.
///
/// # Errors
///
/// Returns an error if either word is not exactly six ASCII letters.
pub fn check_guess(target: &str, guess: &str) -> Result<CheckReport, String> {
    let target = Word::new(target).map_err(|e| format!("Invalid target word: {e}"))?;
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    let (result, keyboard) = evaluate(&target, &guess, &KeyboardState::INITIAL);

    Ok(CheckReport {
        target,
        guess,
        result,
        keyboard,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;

    #[test]
    fn check_exact_match() {
        let report = check_guess("garden", "GARDEN").unwrap();
        assert!(report.result.is_win());
        assert_eq!(report.guess.text(), "GARDEN");
    }

    #[test]
    fn check_reports_keyboard() {
        let report = check_guess("garden", "danger").unwrap();
        assert_eq!(report.keyboard.status(b'A'), Some(LetterStatus::Correct));
        assert_eq!(report.keyboard.status(b'N'), Some(LetterStatus::Present));
        assert_eq!(report.keyboard.status(b'Z'), Some(LetterStatus::Unguessed));
    }

    #[test]
    fn check_rejects_bad_input() {
        let err = check_guess("garden", "crane").err().unwrap();
        assert!(err.starts_with("Invalid guess"));

        let err = check_guess("gard3n", "garden").err().unwrap();
        assert!(err.starts_with("Invalid target word"));
    }
}
