//! Interactive console game
//!
//! Drives one [`GameSession`] over line-based input: prompt, validate, score,
//! repeat until the word is found or attempts run out. Written against any
//! `BufRead` so tests can feed it an in-memory cursor.

use crate::core::WordCollection;
use crate::game::{GameConfig, GameSession, GameState};
use crate::output::{print_guess_feedback, print_loss, print_welcome, print_win};
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run one interactive game to completion
///
/// Returns the final state: `Won`, `Lost`, or `InProgress` when the input
/// ends before the game does (the session is simply abandoned).
///
/// # Errors
///
/// Returns an error if reading input or flushing the prompt fails.
pub fn run_play<R, G>(
    words: &WordCollection,
    config: GameConfig,
    rng: &mut G,
    mut input: R,
) -> io::Result<GameState>
where
    R: BufRead,
    G: Rng + ?Sized,
{
    let mut session = GameSession::start(words, config, rng);
    print_welcome(config, words.len());

    while session.state() == GameState::InProgress {
        print!(
            "\nAttempt {}: Enter your guess: ",
            session.attempts_used() + 1
        );
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            println!("\nOut of input before the word was found. Goodbye!");
            break;
        }

        let Ok(report) = session.submit_guess(&line) else {
            break;
        };

        match &report.feedback {
            None => println!(
                "Invalid guess. Please enter a valid {}-letter word.",
                config.word_length
            ),
            Some(feedback) => print_guess_feedback(
                line.trim(),
                feedback,
                report.attempts_used,
                config.max_attempts,
            ),
        }

        match report.state {
            GameState::Won => print_win(report.attempts_used),
            GameState::Lost => print_loss(session.target_word().unwrap_or_default()),
            GameState::InProgress => {}
        }
    }

    Ok(session.state())
}
