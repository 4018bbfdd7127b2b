//! A running game bound to its word list, random source and notice timer

use super::{GameState, Input, NoticeTimer, Signal, Snapshot};
use crate::wordlists::Dictionary;
use log::{debug, info};
use rand::Rng;
use std::time::Instant;

/// Sequential driver for one player's games
///
/// A session can only be built from a loaded dictionary, so target draws and
/// validation are always available once input starts flowing.
pub struct Session<D: Dictionary, R: Rng> {
    state: GameState,
    dictionary: D,
    rng: R,
    notice: NoticeTimer,
}

impl<D: Dictionary, R: Rng> Session<D, R> {
    /// Create a session waiting for [`Input::Start`]
    pub fn new(dictionary: D, rng: R) -> Self {
        Self {
            state: GameState::default(),
            dictionary,
            rng,
            notice: NoticeTimer::default(),
        }
    }

    /// Replace the notice timer (mainly to shorten the delay)
    #[must_use]
    pub fn with_notice(mut self, notice: NoticeTimer) -> Self {
        self.notice = notice;
        self
    }

    /// Feed one input through the reducer
    pub fn handle(&mut self, input: Input, now: Instant) -> Signal {
        let state = std::mem::take(&mut self.state);
        let (state, signal) = state.apply(input, &self.dictionary, &mut self.rng);
        self.state = state;

        match signal {
            Signal::InvalidWord => {
                debug!("rejected '{}': not in word list", self.state.buffer());
                self.notice.arm(now);
            }
            Signal::Started | Signal::Restarted => {
                info!("new game started");
                self.notice.cancel();
            }
            Signal::Won(_) | Signal::Lost(_) => {
                info!(
                    "game finished after {} attempts: {:?}",
                    self.state.attempt_index(),
                    self.state.phase()
                );
            }
            Signal::Scored(_) => {
                debug!("attempt {} scored", self.state.attempt_index());
            }
            Signal::BufferChanged | Signal::Ignored => {}
        }

        signal
    }

    /// Advance time; returns true if the notice just cleared
    pub fn tick(&mut self, now: Instant) -> bool {
        self.notice.expire(now)
    }

    /// Next instant at which [`Session::tick`] has work to do
    #[must_use]
    pub const fn next_deadline(&self) -> Option<Instant> {
        self.notice.deadline()
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Whether the invalid-word notice is showing at `now`
    #[must_use]
    pub fn invalid_word_shown(&self, now: Instant) -> bool {
        self.notice.is_active(now)
    }

    /// Render-ready view at `now`
    #[must_use]
    pub fn snapshot(&self, now: Instant) -> Snapshot {
        Snapshot::capture(&self.state, self.invalid_word_shown(now))
    }
}
