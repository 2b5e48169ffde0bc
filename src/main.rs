//! Hangman - CLI
//!
//! Guess the secret word one letter at a time.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{ReplayConfig, play_from_file, replay_guesses},
    core::{DEFAULT_MAX_TRIES, GameConfig},
    output::print_replay_result,
    wordlists::DEFAULT_WORDLIST,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Terminal hangman: guess the hidden word one letter at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_WORDLIST)]
    wordlist: String,

    /// Wrong guesses allowed before the round is lost
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_MAX_TRIES,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    max_tries: u32,

    /// Seed for word selection (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play,

    /// Replay a fixed sequence of guesses against a given word
    Replay {
        /// The secret word
        word: String,

        /// Letters to guess, in order (e.g. "azct")
        letters: String,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("HANGMAN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = GameConfig::new(cli.max_tries);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli.wordlist, config, cli.seed),
        Commands::Replay { word, letters } => run_replay_command(word, letters, config),
    }
}

fn run_play_command(wordlist: &str, config: GameConfig, seed: Option<u64>) -> Result<()> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    play_from_file(wordlist, &mut input, &mut out, config, &mut rng)?;
    Ok(())
}

fn run_replay_command(word: String, letters: String, config: GameConfig) -> Result<()> {
    let mut replay = ReplayConfig::new(word, letters);
    replay.max_tries = config.max_tries;

    let result = replay_guesses(&replay).context("Invalid word")?;
    print_replay_result(&mut io::stdout().lock(), &result)?;
    Ok(())
}
