//! Wordle Game - CLI
//!
//! Interactive word-guessing game over the console, with a one-shot scoring
//! command for inspecting feedback.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use wordle_game::{
    commands::{run_play, score_pair},
    game::{DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH, GameConfig},
    output::print_score_result,
    wordlists::load_collection,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden word with per-letter feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line (built-in list when omitted or unreadable)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Total guesses allowed
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,

    /// Word length to play with
    #[arg(long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    word_length: usize,

    /// Seed the target draw for a reproducible game
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game (default)
    Play,

    /// Score a single guess against a known target
    Score {
        /// The hidden word
        target: String,

        /// The guess to evaluate
        guess: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = GameConfig {
        word_length: cli.word_length,
        max_attempts: cli.max_attempts,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let words = load_collection(cli.wordlist.as_deref(), config.word_length)?;
            let mut rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };

            let stdin = io::stdin();
            run_play(&words, config, &mut rng, stdin.lock())?;
            Ok(())
        }
        Commands::Score { target, guess } => {
            let result = score_pair(&target, &guess, config.word_length)?;
            print_score_result(&result);
            Ok(())
        }
    }
}
