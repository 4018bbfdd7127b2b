//! Interactive TUI interface
//!
//! Full-screen game built on ratatui and crossterm.

pub mod app;
pub mod rendering;

pub use app::{Action, App, Statistics, action_for_key, run_tui};
