//! Display functions for the interactive game and command results

use super::formatters::{colorize_guess, feedback_marks};
use crate::commands::ScoreResult;
use crate::core::Feedback;
use crate::game::GameConfig;
use colored::Colorize;

/// Print the game banner and the rules in play
pub fn print_welcome(config: GameConfig, word_count: usize) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Welcome to {}! Try to guess the {}-letter word.",
        "Wordle".bright_green().bold(),
        config.word_length
    );
    println!("You have {} attempts.", config.max_attempts);
    println!("Playing with {word_count} candidate words.");
    println!("{}", "─".repeat(60).cyan());
}

/// Print the feedback row for one scored guess
pub fn print_guess_feedback(
    guess: &str,
    feedback: &Feedback,
    attempts_used: u32,
    max_attempts: u32,
) {
    println!(
        "  {}  {}  {}",
        colorize_guess(guess, feedback),
        feedback.to_emoji(),
        format!("({attempts_used}/{max_attempts})").bright_black()
    );
    println!("  Feedback: {}", feedback_marks(guess, feedback));
}

/// Print the victory banner
pub fn print_win(attempts_used: u32) {
    println!(
        "\n{} You guessed the word in {} {}!",
        "Congratulations!".bright_green().bold(),
        attempts_used,
        if attempts_used == 1 { "attempt" } else { "attempts" }
    );
}

/// Print the defeat banner, revealing the answer
pub fn print_loss(target: &str) {
    println!(
        "\nSorry, you've used all attempts. The correct word was: {}",
        target.to_uppercase().bright_yellow().bold()
    );
}

/// Print the result of scoring a single target/guess pair
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "\nTarget: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!(
        "Guess:  {}  {}",
        colorize_guess(result.guess.text(), &result.feedback),
        result.feedback.to_emoji()
    );
    println!("Marks:  {}", result.feedback.marks(&result.guess));
}
