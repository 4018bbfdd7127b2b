//! Simple line-oriented game
//!
//! Text-based game without the TUI: one guess per line.

use crate::core::WORD_LENGTH;
use crate::game::{Input, Session, Signal};
use crate::output::formatters::{colored_keyboard, colored_row};
use crate::wordlists::Dictionary;
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// Run the line-oriented game on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<D: Dictionary, R: Rng>(session: &mut Session<D, R>) -> Result<(), String> {
    let stdin = io::stdin();
    play_lines(session, stdin.lock(), io::stdout()).map_err(|e| e.to_string())
}

/// Drive a session from line input
///
/// # Errors
///
/// Returns any I/O error from `reader` or `writer`.
pub fn play_lines<D, R, I, O>(session: &mut Session<D, R>, mut reader: I, mut writer: O) -> io::Result<()>
where
    D: Dictionary,
    R: Rng,
    I: BufRead,
    O: Write,
{
    writeln!(writer, "\n╔══════════════════════════════════════╗")?;
    writeln!(writer, "║         Six-Letter Word Game         ║")?;
    writeln!(writer, "╚══════════════════════════════════════╝\n")?;
    writeln!(writer, "Guess the hidden {WORD_LENGTH}-letter word in six tries.")?;
    writeln!(writer, "Commands: ':new' for a new word, ':quit' to exit\n")?;

    session.handle(Input::Start, Instant::now());

    loop {
        let Some(line) = prompt(&mut reader, &mut writer, &format!(
            "Guess {}",
            session.state().attempt_index() + 1
        ))?
        else {
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            ":quit" | ":q" | ":exit" => {
                writeln!(writer, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            ":new" | ":n" => {
                session.handle(Input::Reset, Instant::now());
                writeln!(writer, "\n🔄 New game started!\n")?;
                continue;
            }
            _ => {}
        }

        if line.len() != WORD_LENGTH || !line.chars().all(|c| c.is_ascii_alphabetic()) {
            writeln!(writer, "❌ Enter exactly {WORD_LENGTH} letters.\n")?;
            continue;
        }

        match submit_word(session, &line) {
            Signal::InvalidWord => {
                writeln!(writer, "❌ {} is not in the word list.\n", line.to_uppercase())?;
            }
            Signal::Scored(_) => {
                print_board(session, &mut writer)?;
            }
            Signal::Won(_) | Signal::Lost(_) => {
                print_board(session, &mut writer)?;
                if let Some(message) = session.state().outcome_message() {
                    writeln!(writer, "{message}\n")?;
                }

                let again = prompt(&mut reader, &mut writer, "Play again? (yes/no)")?;
                if matches!(again.as_deref().map(str::to_lowercase).as_deref(), Some("yes" | "y")) {
                    session.handle(Input::Reset, Instant::now());
                    writeln!(writer, "\n🔄 New game started!\n")?;
                } else {
                    writeln!(writer, "\n👋 Thanks for playing!\n")?;
                    return Ok(());
                }
            }
            Signal::Ignored | Signal::BufferChanged | Signal::Started | Signal::Restarted => {}
        }
    }
}

/// Replace the session's buffer with `word` and submit it
fn submit_word<D: Dictionary, R: Rng>(session: &mut Session<D, R>, word: &str) -> Signal {
    let now = Instant::now();
    while !session.state().buffer().is_empty() {
        session.handle(Input::Backspace, now);
    }
    for c in word.chars() {
        session.handle(Input::Letter(c), now);
    }
    session.handle(Input::Submit, now)
}

fn print_board<D: Dictionary, R: Rng, O: Write>(
    session: &Session<D, R>,
    writer: &mut O,
) -> io::Result<()> {
    let state = session.state();
    writeln!(writer)?;
    for attempt in state.attempts() {
        writeln!(writer, "  {}", colored_row(&attempt.word, &attempt.result))?;
    }
    writeln!(writer)?;
    for line in colored_keyboard(state.keyboard()) {
        writeln!(writer, "  {line}")?;
    }
    writeln!(writer)
}

/// Read one trimmed line; `None` at end of input
fn prompt<I: BufRead, O: Write>(
    reader: &mut I,
    writer: &mut O,
    label: &str,
) -> io::Result<Option<String>> {
    write!(writer, "{label}: ")?;
    writer.flush()?;

    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
