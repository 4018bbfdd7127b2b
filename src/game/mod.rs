//! Game session: input buffering, submission gating and termination
//!
//! [`GameState`] is the pure reducer; [`Session`] wraps it with the word
//! list, the random source and the invalid-word notice, and produces
//! [`Snapshot`]s for the presentation layer.

mod notice;
mod session;
mod snapshot;
mod state;

pub use notice::{INVALID_WORD_NOTICE, MAX_NOTICE_DELAY, NoticeTimer};
pub use session::Session;
pub use snapshot::{Cell, CellState, Snapshot};
pub use state::{Attempt, GameState, Input, Outcome, Phase, Signal};
