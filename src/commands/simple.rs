//! Simple interactive CLI mode
//!
//! The player keeps a secret in mind; the solver guesses and the player
//! answers with peg counts.

use crate::core::{Code, GameConfig, Response};
use crate::error::SolverError;
use crate::output::formatters::pegs_to_string;
use crate::solver::Solver;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// Rebuild a game from its recorded responses
///
/// Returns the solver and the guess awaiting a response.
///
/// # Errors
///
/// Returns the solver's error if a recorded response is rejected.
pub fn replay(game: &GameConfig, responses: &[Response]) -> Result<(Solver, Code), SolverError> {
    let mut solver = Solver::new(*game);
    let mut guess = solver.first_guess()?;
    for &response in responses {
        guess = solver.guess_again(response)?;
    }
    Ok((solver, guess))
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple(game: &GameConfig) -> Result<()> {
    let len = game.code_len();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║           Mastermind Codebreaker - Interactive Mode          ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Think of a secret of {len} different digits (0-{}).",
        game.base() - 1
    );
    println!("After each guess, enter the response:\n");
    println!("  - Counts, blacks first: '1 2' (1 right place, 2 wrong place)");
    println!("  - Or pegs: B for black, W for white, - for empty, e.g. 'BWW-'");
    println!("  - Or type 'win' if the guess is your secret!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last response\n");

    let mut responses: Vec<Response> = Vec::new();
    let (mut solver, mut guess) = replay(game, &responses)?;

    loop {
        let turn = responses.len() + 1;
        println!("────────────────────────────────────────────────────────────");
        println!(
            "Turn {turn}: {} other candidates remaining",
            solver.candidates().len()
        );
        println!("────────────────────────────────────────────────────────────");
        println!("\n🔐 My guess: {}\n", guess.to_string().bright_white().bold());

        let input = get_user_input("Response (or command)")?.to_lowercase();
        let response = match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                responses.clear();
                (solver, guess) = replay(game, &responses)?;
                println!("\n🔄 New game started!\n");
                continue;
            }
            "undo" | "u" => {
                if responses.pop().is_some() {
                    (solver, guess) = replay(game, &responses)?;
                    println!("✓ Undone! Back to turn {}\n", responses.len() + 1);
                } else {
                    println!("Nothing to undo!\n");
                }
                continue;
            }
            "win" | "correct" | "yes" | "solved" => Response::perfect(len),
            _ => {
                if let Some(response) = Response::parse(&input) {
                    response
                } else {
                    println!("❌ Invalid response! Use '1 2', 'BWW-' or 'win'\n");
                    continue;
                }
            }
        };

        match solver.guess_again(response) {
            Ok(next) if response.is_perfect(len) => {
                print_victory(&solver, &responses, next);
                if !play_again()? {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                responses.clear();
                (solver, guess) = replay(game, &responses)?;
                println!("\n🔄 New game started!\n");
            }
            Ok(next) => {
                responses.push(response);
                guess = next;
            }
            Err(SolverError::InconsistentResponse { .. }) => {
                println!(
                    "\n❌ No secret fits {} for {guess}. One of your responses may be wrong.",
                    pegs_to_string(response, len)
                );
                println!("Type the response again, or 'undo' to go back.\n");
            }
            Err(SolverError::Exhausted { guesses }) => {
                println!(
                    "\n{}",
                    format!("🔒 Code safe! I ran out of guesses after {guesses} tries.")
                        .bright_red()
                        .bold()
                );
                if !play_again()? {
                    return Ok(());
                }
                responses.clear();
                (solver, guess) = replay(game, &responses)?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn print_victory(solver: &Solver, responses: &[Response], secret: Code) {
    let len = solver.config().code_len();
    let turns = solver.guesses_made();

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "        🎉 ✨  C O D E   C R A C K E D !  ✨ 🎉        "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());
    println!(
        "\n  Your secret {} fell in {} {}",
        secret.to_string().bright_yellow().bold(),
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    );

    // Guesses are a pure function of the responses, so the history can be
    // rebuilt by replaying prefixes.
    if let Ok(history) = rebuild_history(solver.config(), responses) {
        println!("\n  Guess history:");
        for (i, (guess, response)) in history.iter().enumerate() {
            println!(
                "    {}. {} {}",
                (i + 1).to_string().bright_black(),
                guess.to_string().bright_white().bold(),
                pegs_to_string(*response, len)
            );
        }
        println!(
            "    {}. {} {}",
            (history.len() + 1).to_string().bright_black(),
            secret.to_string().bright_white().bold(),
            pegs_to_string(Response::perfect(len), len)
        );
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

fn rebuild_history(
    game: &GameConfig,
    responses: &[Response],
) -> Result<Vec<(Code, Response)>, SolverError> {
    let mut solver = Solver::new(*game);
    let mut guess = solver.first_guess()?;
    let mut history = Vec::with_capacity(responses.len());
    for &response in responses {
        history.push((guess, response));
        guess = solver.guess_again(response)?;
    }
    Ok(history)
}

fn play_again() -> Result<bool> {
    let answer = get_user_input("Play again? (yes/no)")?.to_lowercase();
    Ok(matches!(answer.as_str(), "yes" | "y"))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Failed to read from stdin")?;
    if read == 0 {
        anyhow::bail!("stdin closed");
    }

    Ok(input.trim().to_string())
}
