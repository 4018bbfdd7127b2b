//! Sixle - CLI
//!
//! Six-letter word guessing game with TUI and plain-text modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sixle::{
    commands::{check_guess, run_simple},
    game::{NoticeTimer, Session},
    logging::{self, LogSink},
    output::print_check_report,
    wordlists::{WordList, loader},
};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "sixle",
    about = "Guess the hidden six-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for target selection (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Write log records to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Seconds the "not in word list" notice stays visible (at most 3600)
    #[arg(
        long,
        global = true,
        default_value = "3",
        value_parser = clap::value_parser!(u64).range(0..=3600)
    )]
    notice_secs: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Plain-text game, one guess per line
    Simple,

    /// Score a single guess against a target
    Check {
        /// The hidden word
        target: String,

        /// The guess to score
        guess: String,
    },
}

/// Load the word list selected by the -w flag
fn load_wordlist(wordlist: &str) -> Result<WordList> {
    let list = match wordlist {
        "embedded" => loader::embedded().context("embedded word list is invalid")?,
        path => loader::load_from_file(path)
            .with_context(|| format!("failed to load word list from {path}"))?,
    };
    info!("loaded {} words from {wordlist}", list.len());
    Ok(list)
}

fn build_session(cli: &Cli) -> Result<Session<WordList, StdRng>> {
    let words = load_wordlist(&cli.wordlist)?;
    let rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let notice = NoticeTimer::new(Duration::from_secs(cli.notice_secs));
    Ok(Session::new(words, rng).with_notice(notice))
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    let interactive = matches!(command, Commands::Play);
    logging::init(LogSink::select(cli.log_file.as_deref(), interactive))
        .context("failed to open log file")?;

    match command {
        Commands::Play => run_play_command(&cli),
        Commands::Simple => run_simple_command(&cli),
        Commands::Check { target, guess } => run_check_command(&target, &guess),
    }
}

fn run_play_command(cli: &Cli) -> Result<()> {
    use sixle::interactive::{App, run_tui};

    let app = App::new(build_session(cli)?);
    run_tui(app)
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let mut session = build_session(cli)?;
    run_simple(&mut session).map_err(|e| anyhow::anyhow!(e))
}

fn run_check_command(target: &str, guess: &str) -> Result<()> {
    let report = check_guess(target, guess).map_err(|e| anyhow::anyhow!(e))?;
    print_check_report(&report);
    Ok(())
}
