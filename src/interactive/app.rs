//! TUI application state and logic

use crate::core::MAX_ATTEMPTS;
use crate::game::{Input, Phase, Session, Signal, Snapshot};
use crate::wordlists::WordList;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, info};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Longest wait for input before redrawing
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Application state
pub struct App {
    pub session: Session<WordList, StdRng>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// What a key press asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Game(Input),
    Quit,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of attempts; index 0 is unused
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    fn record_win(&mut self, attempts: usize) {
        self.total_games += 1;
        self.games_won += 1;
        if let Some(slot) = self.guess_distribution.get_mut(attempts) {
            *slot += 1;
        }
    }

    fn record_loss(&mut self) {
        self.total_games += 1;
    }

    /// Percentage of finished games that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    #[must_use]
    pub fn new(session: Session<WordList, StdRng>) -> Self {
        Self {
            session,
            messages: vec![Message {
                text: "Press Enter to start a new game.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Apply an action at `now`
    pub fn dispatch(&mut self, action: Action, now: Instant) {
        let input = match action {
            Action::Quit => {
                self.should_quit = true;
                return;
            }
            Action::Game(input) => input,
        };

        match self.session.handle(input, now) {
            Signal::Started | Signal::Restarted => {
                self.messages.clear();
                self.add_message(
                    "New game started! Type a six-letter word and press Enter.",
                    MessageStyle::Info,
                );
            }
            Signal::Won(_) => {
                let attempts = self.session.state().attempt_index();
                self.stats.record_win(attempts);
                self.finish_message(MessageStyle::Success);
            }
            Signal::Lost(_) => {
                self.stats.record_loss();
                self.finish_message(MessageStyle::Error);
            }
            Signal::InvalidWord => {
                let word = self.session.state().buffer().to_string();
                self.add_message(&format!("{word} is not in the word list"), MessageStyle::Error);
            }
            Signal::Scored(_) | Signal::BufferChanged | Signal::Ignored => {}
        }
    }

    fn finish_message(&mut self, style: MessageStyle) {
        if let Some(text) = self.session.state().outcome_message() {
            self.add_message(&text, style);
        }
        self.add_message("Press Ctrl-N for a new game or Esc to quit.", MessageStyle::Info);
    }

    /// Advance timers; returns true if anything visible changed
    pub fn tick(&mut self, now: Instant) -> bool {
        self.session.tick(now)
    }

    /// How long the event loop may block waiting for input
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.session
            .next_deadline()
            .map_or(IDLE_POLL, |deadline| {
                deadline.saturating_duration_since(now).min(IDLE_POLL)
            })
    }

    #[must_use]
    pub fn snapshot(&self, now: Instant) -> Snapshot {
        self.session.snapshot(now)
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Map a key press to an app action
#[must_use]
pub fn action_for_key(key: KeyEvent, phase: Phase) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char('n') if ctrl => Some(Action::Game(Input::Reset)),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Enter if phase == Phase::NotStarted => Some(Action::Game(Input::Start)),
        KeyCode::Enter => Some(Action::Game(Input::Submit)),
        KeyCode::Backspace => Some(Action::Game(Input::Backspace)),
        KeyCode::Char(c) if !ctrl && c.is_ascii_alphabetic() => {
            Some(Action::Game(Input::Letter(c)))
        }
        _ => None,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    info!("terminal ready");

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);
        let snapshot = app.snapshot(now);
        terminal.draw(|f| super::rendering::ui(f, &app, &snapshot))?;

        if event::poll(app.poll_timeout(now))?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let phase = app.session.state().phase();
            if let Some(action) = action_for_key(key, phase) {
                debug!("key {:?} -> {action:?}", key.code);
                app.dispatch(action, Instant::now());
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
