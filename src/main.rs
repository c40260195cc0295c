//! Wordle - CLI
//!
//! Terminal Wordle with a TUI (default) and a simple line mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use wordle_tui::{
    commands::{check_guess, run_simple},
    dictionary::{Dictionary, loader::load_from_file},
    game::GuessEngine,
    logging::init_logger,
    output::print_check_result,
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(
        short = 'w',
        long,
        global = true,
        env = "WORDLE_WORDLIST",
        default_value = "embedded"
    )]
    wordlist: String,

    /// Seed for the secret word picker (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file (required to see logs in TUI mode)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (one guess per line, no TUI)
    Simple,

    /// Score a guess against a chosen secret word
    Check {
        /// The guessed word
        guess: String,

        /// The secret word to score against
        secret: String,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    match wordlist {
        "embedded" => Dictionary::embedded().context("Embedded word list is invalid"),
        path => load_from_file(path).with_context(|| format!("Cannot load word list '{path}'")),
    }
}

/// Seeded RNG when requested, OS entropy otherwise
fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    init_logger(
        cli.verbose,
        cli.log_file.as_deref(),
        matches!(command, Commands::Play),
    )?;

    let dictionary = load_dictionary(&cli.wordlist)?;
    log::info!("dictionary ready: {} words", dictionary.len());

    match command {
        Commands::Play => run_play_command(&dictionary, cli.seed),
        Commands::Simple => run_simple_command(&dictionary, cli.seed),
        Commands::Check { guess, secret } => run_check_command(&guess, &secret, &dictionary),
    }
}

fn run_play_command(dictionary: &Dictionary, seed: Option<u64>) -> Result<()> {
    use wordle_tui::interactive::{App, run_tui};

    let engine = GuessEngine::new(dictionary, make_rng(seed));
    let stats = run_tui(App::new(engine))?;
    log::info!(
        "session over: {} played, {} won",
        stats.games_played,
        stats.games_won
    );
    Ok(())
}

fn run_simple_command(dictionary: &Dictionary, seed: Option<u64>) -> Result<()> {
    let mut engine = GuessEngine::new(dictionary, make_rng(seed));
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    run_simple(&mut engine, &mut input, &mut out)?;
    Ok(())
}

fn run_check_command(guess: &str, secret: &str, dictionary: &Dictionary) -> Result<()> {
    let result = check_guess(guess, secret, dictionary)?;
    print_check_result(&result);
    Ok(())
}
