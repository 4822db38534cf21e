//! Command-line driver for the Solitaire cipher.
//!
//! Loads a deck (from a file, a seed, or fresh entropy), then encrypts or
//! decrypts a message given as an argument or read from stdin.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use solitaire_cipher::{Deck, Solitaire};

#[derive(Parser)]
#[command(author, version, about = "Solitaire keystream cipher", long_about = None)]
struct Cli {
    /// Deck file: 28 whitespace-separated card values, top card first.
    #[arg(short, long, global = true, conflicts_with = "seed")]
    deck: Option<PathBuf>,

    /// Seed for a reproducible shuffled deck.
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Rounds allowed per key before giving up.
    #[arg(long, global = true, default_value_t = solitaire_cipher::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand)]
enum Mode {
    /// Encrypt a message.
    Encrypt {
        /// Message text; read from stdin when omitted.
        message: Option<String>,
    },
    /// Decrypt a message.
    Decrypt {
        /// Message text; read from stdin when omitted.
        message: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose)?;

    let deck = load_deck(&cli)?;
    let mut cipher = Solitaire::with_max_attempts(deck, cli.max_attempts)?;

    let output = match cli.mode {
        Mode::Encrypt { message } => cipher.encrypt(&read_message(message)?)?,
        Mode::Decrypt { message } => cipher.decrypt(&read_message(message)?)?,
    };
    println!("{}", output);
    Ok(())
}

fn init_logger(verbose: bool) -> Result<()> {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .context("failed to initialize logger")
}

fn load_deck(cli: &Cli) -> Result<Deck> {
    if let Some(path) = &cli.deck {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read deck file {}", path.display()))?;
        return text
            .parse::<Deck>()
            .with_context(|| format!("invalid deck in {}", path.display()));
    }

    let deck = match cli.seed {
        Some(seed) => Deck::shuffled_with(&mut StdRng::seed_from_u64(seed)),
        None => Deck::shuffled(),
    };
    // the deck is the key
    let values: Vec<String> = deck.values().iter().map(u8::to_string).collect();
    eprintln!("deck: {}", values.join(" "));
    info!("using generated deck {}", deck);
    Ok(deck)
}

fn read_message(message: Option<String>) -> Result<String> {
    match message {
        Some(message) => Ok(message),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read message from stdin")?;
            Ok(buf)
        }
    }
}
