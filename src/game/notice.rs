//! Self-clearing notice flag
//!
//! The invalid-word notice is shown for a fixed delay after the last invalid
//! submission. Instead of scheduling a callback, the notice stores a deadline
//! that the event loop checks on every tick; arming it again replaces the
//! deadline rather than stacking another timer.

use std::time::{Duration, Instant};

/// How long the invalid-word notice stays visible
pub const INVALID_WORD_NOTICE: Duration = Duration::from_secs(3);

/// Longest delay a notice accepts; longer delays are clamped to this
pub const MAX_NOTICE_DELAY: Duration = Duration::from_secs(3600);

/// A notice that turns itself off once its deadline passes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl NoticeTimer {
    /// Create an unarmed timer, clamping `delay` to [`MAX_NOTICE_DELAY`]
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        let delay = if delay.as_secs() >= MAX_NOTICE_DELAY.as_secs() {
            MAX_NOTICE_DELAY
        } else {
            delay
        };
        Self {
            delay,
            deadline: None,
        }
    }

    /// Show the notice until `now + delay`, superseding any earlier deadline
    ///
    /// A deadline past the clock's range leaves the notice hidden.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = now.checked_add(self.delay);
    }

    /// Hide the notice immediately
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether the notice is visible at `now`
    #[must_use]
    pub fn is_active(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now < deadline)
    }

    /// Clear the notice if its deadline has passed
    ///
    /// Returns true when this call cleared it.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Pending deadline, if any
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

impl Default for NoticeTimer {
    fn default() -> Self {
        Self::new(INVALID_WORD_NOTICE)
    }
}
