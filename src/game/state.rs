//! Game state and the reducer that advances it
//!
//! `GameState::apply` takes the current state and one input and returns the
//! next state together with a [`Signal`] describing what happened. All game
//! rules live here; timing and I/O stay outside.

use crate::core::{GuessResult, KeyboardState, MAX_ATTEMPTS, WORD_LENGTH, Word, evaluate};
use crate::wordlists::Dictionary;
use rand::Rng;

/// Player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Begin the first game
    Start,
    /// Type a letter into the current attempt
    Letter(char),
    /// Remove the last typed letter
    Backspace,
    /// Submit the current attempt
    Submit,
    /// Abandon the current game and draw a new target
    Reset,
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Lifecycle phase of a game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    NotStarted,
    InProgress,
    Finished(Outcome),
}

/// What an input did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Not accepted in the current phase or buffer state; nothing changed
    Ignored,
    /// First target drawn
    Started,
    /// A letter was added or removed
    BufferChanged,
    /// The attempt is not in the word list; nothing changed
    InvalidWord,
    /// Attempt scored, game continues
    Scored(GuessResult),
    /// Attempt scored and matched the target
    Won(GuessResult),
    /// Attempt scored and no attempts remain
    Lost(GuessResult),
    /// New target drawn, per-game state cleared
    Restarted,
}

/// A submitted guess together with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub word: Word,
    pub result: GuessResult,
}

/// Complete state of one game
#[derive(Debug, Clone, Default)]
pub struct GameState {
    phase: Phase,
    target: Option<Word>,
    attempts: Vec<Attempt>,
    buffer: String,
    keyboard: KeyboardState,
}

impl GameState {
    /// A fresh in-progress game for `target`
    #[must_use]
    pub fn with_target(target: Word) -> Self {
        Self {
            phase: Phase::InProgress,
            target: Some(target),
            attempts: Vec::with_capacity(MAX_ATTEMPTS),
            buffer: String::with_capacity(WORD_LENGTH),
            keyboard: KeyboardState::INITIAL,
        }
    }

    /// Apply one input and return the next state
    #[must_use]
    pub fn apply<D: Dictionary, R: Rng>(
        mut self,
        input: Input,
        dictionary: &D,
        rng: &mut R,
    ) -> (Self, Signal) {
        let signal = match (self.phase, input) {
            (Phase::NotStarted, Input::Start) => {
                self = Self::with_target(dictionary.pick_random_word(rng));
                Signal::Started
            }
            (Phase::InProgress | Phase::Finished(_), Input::Reset) => {
                self = Self::with_target(dictionary.pick_random_word(rng));
                Signal::Restarted
            }
            (Phase::InProgress, Input::Letter(c)) => self.push_letter(c),
            (Phase::InProgress, Input::Backspace) => self.pop_letter(),
            (Phase::InProgress, Input::Submit) => self.submit(dictionary),
            _ => Signal::Ignored,
        };
        (self, signal)
    }

    fn push_letter(&mut self, c: char) -> Signal {
        if !c.is_ascii_alphabetic() || self.buffer.len() >= WORD_LENGTH {
            return Signal::Ignored;
        }
        self.buffer.push(c.to_ascii_uppercase());
        Signal::BufferChanged
    }

    fn pop_letter(&mut self) -> Signal {
        match self.buffer.pop() {
            Some(_) => Signal::BufferChanged,
            None => Signal::Ignored,
        }
    }

    fn submit<D: Dictionary>(&mut self, dictionary: &D) -> Signal {
        if self.buffer.len() != WORD_LENGTH {
            return Signal::Ignored;
        }
        let (Some(target), Ok(guess)) = (self.target.as_ref(), Word::new(&self.buffer)) else {
            return Signal::Ignored;
        };
        if !dictionary.is_valid_word(&guess) {
            return Signal::InvalidWord;
        }

        let (result, keyboard) = evaluate(target, &guess, &self.keyboard);
        self.keyboard = keyboard;
        self.attempts.push(Attempt {
            word: guess,
            result,
        });
        self.buffer.clear();

        if result.is_win() {
            self.phase = Phase::Finished(Outcome::Won);
            Signal::Won(result)
        } else if self.attempts.len() >= MAX_ATTEMPTS {
            self.phase = Phase::Finished(Outcome::Lost);
            Signal::Lost(result)
        } else {
            Signal::Scored(result)
        }
    }

    /// Current lifecycle phase
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Submitted attempts, oldest first
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Index of the attempt being typed (equals the number submitted)
    #[must_use]
    pub fn attempt_index(&self) -> usize {
        self.attempts.len()
    }

    /// Letters typed into the current attempt
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Best-known status of every letter this game
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// The target word, once it may be shown
    ///
    /// Hidden while the game is still being played.
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        match self.phase {
            Phase::Finished(_) => self.target.as_ref(),
            _ => None,
        }
    }

    /// Closing message for a finished game
    #[must_use]
    pub fn outcome_message(&self) -> Option<String> {
        match self.phase {
            Phase::Finished(Outcome::Won) => Some("Congratulations, you guessed the word!".into()),
            Phase::Finished(Outcome::Lost) => self
                .target
                .as_ref()
                .map(|target| format!("Oh no! The word is {target}")),
            _ => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn target(&self) -> Option<&Word> {
        self.target.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;
    use crate::game::testing::ScriptedDictionary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    struct Harness {
        state: GameState,
        dictionary: ScriptedDictionary,
        rng: StdRng,
    }

    impl Harness {
        fn new(targets: &[&str]) -> Self {
            Self {
                state: GameState::default(),
                dictionary: ScriptedDictionary::new(
                    &[
                        "garden", "danger", "ranged", "bottle", "little", "castle", "silver",
                    ],
                    targets,
                ),
                rng: StdRng::seed_from_u64(1),
            }
        }

        fn send(&mut self, input: Input) -> Signal {
            let state = std::mem::take(&mut self.state);
            let (state, signal) = state.apply(input, &self.dictionary, &mut self.rng);
            self.state = state;
            signal
        }

        fn type_word(&mut self, word: &str) {
            for c in word.chars() {
                self.send(Input::Letter(c));
            }
        }

        fn guess(&mut self, word: &str) -> Signal {
            self.type_word(word);
            self.send(Input::Submit)
        }
    }

    #[test]
    fn input_before_start_is_ignored() {
        let mut h = Harness::new(&["garden"]);
        assert_eq!(h.send(Input::Letter('g')), Signal::Ignored);
        assert_eq!(h.send(Input::Submit), Signal::Ignored);
        assert_eq!(h.send(Input::Reset), Signal::Ignored);
        assert_eq!(h.state.phase(), Phase::NotStarted);
        assert_eq!(h.state.buffer(), "");
    }

    #[test]
    fn start_draws_target() {
        let mut h = Harness::new(&["garden"]);
        assert_eq!(h.send(Input::Start), Signal::Started);
        assert_eq!(h.state.phase(), Phase::InProgress);
        assert_eq!(h.state.target().map(Word::text), Some("GARDEN"));
        assert_eq!(h.send(Input::Start), Signal::Ignored);
    }

    #[test]
    fn buffer_accepts_letters_up_to_word_length() {
        let mut h = Harness::new(&["garden"]);
        h.send(Input::Start);
        h.type_word("bottles");
        assert_eq!(h.state.buffer(), "BOTTLE");
        assert_eq!(h.send(Input::Letter('x')), Signal::Ignored);
        assert_eq!(h.send(Input::Letter('1')), Signal::Ignored);
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut h = Harness::new(&["garden"]);
        h.send(Input::Start);
        assert_eq!(h.send(Input::Letter('3')), Signal::Ignored);
        assert_eq!(h.send(Input::Letter(' ')), Signal::Ignored);
        assert_eq!(h.send(Input::Letter('é')), Signal::Ignored);
        assert_eq!(h.state.buffer(), "");
    }

    #[test]
    fn backspace_on_empty_buffer_is_noop() {
        let mut h = Harness::new(&["garden"]);
        h.send(Input::Start);
        let before = h.state.clone();
        assert_eq!(h.send(Input::Backspace), Signal::Ignored);
        assert_eq!(h.state.buffer(), before.buffer());
        assert_eq!(h.state.attempt_index(), before.attempt_index());

        h.type_word("ga");
        assert_eq!(h.send(Input::Backspace), Signal::BufferChanged);
        assert_eq!(h.state.buffer(), "G");
    }

    #[test]
    fn short_submit_is_ignored() {
        let mut h = Harness::new(&["garden"]);
        h.send(Input::Start);
        h.type_word("gard");
        assert_eq!(h.send(Input::Submit), Signal::Ignored);
        assert_eq!(h.state.attempt_index(), 0);
        assert_eq!(h.state.buffer(), "GARD");
    }

    #[test]
    fn invalid_word_keeps_state() {
        let mut h = Harness::new(&["garden"]);
        h.send(Input::Start);
        assert_eq!(h.guess("zzzzzz"), Signal::InvalidWord);
        assert_eq!(h.state.buffer(), "ZZZZZZ");
        assert_eq!(h.state.attempt_index(), 0);
        assert_eq!(h.state.keyboard(), &KeyboardState::INITIAL);

        // The retained buffer can be edited and resubmitted
        for _ in 0..6 {
            h.send(Input::Backspace);
        }
        assert!(matches!(h.guess("danger"), Signal::Scored(_)));
        assert_eq!(h.state.attempt_index(), 1);
    }

    #[test]
    fn scored_guess_advances_and_merges_keyboard() {
        let mut h = Harness::new(&["garden"]);
        h.send(Input::Start);
        let Signal::Scored(result) = h.guess("danger") else {
            panic!("expected a scored guess");
        };
        assert_eq!(result.status_at(1), LetterStatus::Correct);
        assert_eq!(h.state.attempt_index(), 1);
        assert_eq!(h.state.buffer(), "");
        assert_eq!(h.state.attempts()[0].word.text(), "DANGER");
        assert_eq!(h.state.keyboard().status(b'A'), Some(LetterStatus::Correct));
        assert_eq!(h.state.keyboard().status(b'D'), Some(LetterStatus::Present));
        assert_eq!(h.state.outcome_message(), None);
        assert_eq!(h.state.revealed_target(), None);
    }

    #[test]
    fn lowercase_input_is_canonicalized() {
        let mut h = Harness::new(&["garden"]);
        h.send(Input::Start);
        assert!(matches!(h.guess("GaRdEn"), Signal::Won(_)));
    }

    #[test]
    fn winning_guess_finishes_game() {
        let mut h = Harness::new(&["garden"]);
        h.send(Input::Start);
        h.guess("danger");
        let Signal::Won(result) = h.guess("garden") else {
            panic!("expected a win");
        };
        assert!(result.is_win());
        assert_eq!(h.state.phase(), Phase::Finished(Outcome::Won));
        assert_eq!(h.state.attempt_index(), 2);
        assert_eq!(
            h.state.outcome_message().as_deref(),
            Some("Congratulations, you guessed the word!")
        );
    }

    #[test]
    fn six_misses_lose_and_reveal_target() {
        let mut h = Harness::new(&["garden"]);
        h.send(Input::Start);
        for word in ["danger", "ranged", "bottle", "little", "castle"] {
            assert!(matches!(h.guess(word), Signal::Scored(_)));
        }
        assert!(matches!(h.guess("silver"), Signal::Lost(_)));
        assert_eq!(h.state.phase(), Phase::Finished(Outcome::Lost));
        assert_eq!(h.state.attempt_index(), MAX_ATTEMPTS);
        assert_eq!(h.state.revealed_target().map(Word::text), Some("GARDEN"));
        assert_eq!(
            h.state.outcome_message().as_deref(),
            Some("Oh no! The word is GARDEN")
        );
    }

    #[test]
    fn finished_game_accepts_only_reset() {
        let mut h = Harness::new(&["garden", "bottle"]);
        h.send(Input::Start);
        h.guess("garden");
        assert_eq!(h.send(Input::Letter('a')), Signal::Ignored);
        assert_eq!(h.send(Input::Backspace), Signal::Ignored);
        assert_eq!(h.send(Input::Submit), Signal::Ignored);
        assert_eq!(h.state.attempt_index(), 1);
        assert!(h.state.attempt_index() <= MAX_ATTEMPTS);

        assert_eq!(h.send(Input::Reset), Signal::Restarted);
        assert_eq!(h.state.phase(), Phase::InProgress);
    }

    #[test]
    fn reset_clears_everything_and_draws_new_target() {
        let mut h = Harness::new(&["garden", "bottle"]);
        h.send(Input::Start);
        h.guess("danger");
        h.type_word("lit");

        assert_eq!(h.send(Input::Reset), Signal::Restarted);
        assert_eq!(h.state.phase(), Phase::InProgress);
        assert_eq!(h.state.attempt_index(), 0);
        assert_eq!(h.state.buffer(), "");
        assert_eq!(h.state.keyboard(), &KeyboardState::INITIAL);
        assert_eq!(h.state.target().map(Word::text), Some("BOTTLE"));

        // The old target is just another guess against the new one
        let Signal::Scored(result) = h.guess("garden") else {
            panic!("old target must not win against the new one");
        };
        assert!(!result.is_win());
    }
}
