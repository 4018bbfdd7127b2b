//! Command implementations

pub mod check;
pub mod simple;

pub use check::{CheckReport, check_guess};
pub use simple::{play_lines, run_simple};
