//! Interactive aide mode
//!
//! Suggests guesses for a puzzle played elsewhere; the user types the grade
//! each guess received.

use crate::core::{Grade, Word};
use crate::solver::{filter_candidates, select_best};
use crate::wordlists::Corpus;
use colored::Colorize;
use std::io::{self, Write};

/// Run the interactive aide
///
/// Each turn announces the suggested guess and reads back its grade as a
/// 5-character string over 'C', 'w', '.'. Invalid input is re-prompted
/// without touching the candidate set.
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_assist(corpus: &Corpus, first: &Word) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║             Wordle Solver - Interactive Aide                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest guesses; after each one enter the grade it received:\n");
    println!("  - 'C' for correct position");
    println!("  - 'w' for right letter, wrong spot");
    println!("  - '.' for not in the answer\n");
    println!("Commands: 'p' to list remaining candidates, 'quit' to exit\n");

    let mut remaining: Vec<Word> = corpus.words().to_vec();
    let mut guess = first.clone();
    let mut tries = 0;

    loop {
        println!("────────────────────────────────────────────────────────────");
        println!("There are {} possible words left", remaining.len());
        tries += 1;

        println!(
            "\nSuggested guess: {}",
            guess.text().to_uppercase().bright_yellow().bold()
        );

        // Read a grade, re-prompting until it parses
        let grade = loop {
            let input = get_user_input("  Grade (e.g. '.wC.w', 'p', 'quit')")?;

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\nBye!\n");
                    return Ok(());
                }
                "p" => {
                    for word in &remaining {
                        println!("  • {word}");
                    }
                }
                _ => match Grade::from_letters(&input) {
                    Ok(grade) => break grade,
                    Err(e) => println!("{} {e}", "Invalid grade:".red()),
                },
            }
        };

        if grade.is_perfect() {
            println!(
                "\n{}",
                format!("Solved! {} took {tries} tries", guess.text().to_uppercase())
                    .green()
                    .bold()
            );
            return Ok(());
        }

        remaining = filter_candidates(&remaining, &guess, grade);

        match select_best(&remaining) {
            Some(next) => guess = next.clone(),
            None => {
                println!(
                    "\n{}",
                    "No candidates remain - the answer is not in the word list, \
                     or a grade was mistyped."
                        .red()
                );
                return Ok(());
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
