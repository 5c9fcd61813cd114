//! Self-test mode
//!
//! Replays a full solve against a known answer, printing each guess and the
//! grade it scored.

use crate::core::{Grade, Word};
use crate::solver::{filter_candidates, select_best};
use crate::wordlists::Corpus;
use colored::Colorize;
use rand::prelude::IndexedRandom;

/// Replay a solve against `answer`, or a random corpus word when omitted
///
/// # Errors
///
/// Returns an error when the requested answer is not in the word list, or
/// when filtering eliminates every candidate (a grade bookkeeping defect).
pub fn run_selftest(corpus: &Corpus, first: &Word, answer: Option<&str>) -> Result<(), String> {
    let answer: Word = match answer {
        Some(text) => corpus
            .find(text)
            .cloned()
            .ok_or_else(|| format!("'{text}' is not in the word list"))?,
        None => corpus
            .words()
            .choose(&mut rand::rng())
            .cloned()
            .ok_or_else(|| "The word list is empty".to_string())?,
    };

    println!(
        "Testing for the answer {}",
        answer.text().to_uppercase().bright_yellow().bold()
    );

    let mut remaining: Vec<Word> = corpus.words().to_vec();
    let mut guess = first.clone();
    let mut tries = 1;

    while guess != answer {
        let grade = Grade::of(&guess, &answer);
        let letters = grade.letters().map_err(|e| e.to_string())?;

        println!("Guessing {guess}, scored a {letters}");

        remaining = filter_candidates(&remaining, &guess, grade);
        println!("There are {} potential words left", remaining.len());

        match select_best(&remaining) {
            Some(next) => guess = next.clone(),
            None => return Err(format!("No candidates remain while solving for {answer}")),
        }
        tries += 1;
    }

    println!(
        "\n{}",
        format!("Word is {}, took {tries} tries", guess.text().to_uppercase())
            .green()
            .bold()
    );

    Ok(())
}
