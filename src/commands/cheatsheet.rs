//! Cheat-sheet build command
//!
//! Precomputes the best second guess for every grade an opening can receive
//! and persists the table.

use crate::solver::CheatSheet;
use crate::wordlists::Corpus;
use colored::Colorize;
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Build and persist the cheat sheet for an opening word
///
/// The output file defaults to `<first>.txt`, the name the simulation
/// command looks for.
///
/// # Errors
///
/// Returns an error when the opening is not in the word list or the sheet
/// cannot be written.
pub fn run_cheatsheet(corpus: &Corpus, first: &str, output: Option<&Path>) -> Result<(), String> {
    let first = corpus
        .find(first)
        .cloned()
        .ok_or_else(|| format!("'{first}' is not in the word list"))?;

    println!(
        "Building cheat sheet for opening {}...",
        first.text().to_uppercase().bright_yellow().bold()
    );

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Evaluating 243 grades");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let start = Instant::now();
    let sheet = CheatSheet::build(&first, corpus.words());
    let duration = start.elapsed();

    spinner.finish_and_clear();

    for (grade, second) in sheet.iter() {
        let letters = grade.letters().map_err(|e| e.to_string())?;
        println!("{letters} - {second}");
    }

    let path = output.map_or_else(|| PathBuf::from(format!("{first}.txt")), Path::to_path_buf);
    sheet
        .save(&path)
        .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;

    println!(
        "\n{}",
        format!(
            "Wrote {} reachable grades to {} in {:.2}s",
            sheet.len(),
            path.display(),
            duration.as_secs_f64()
        )
        .green()
    );

    Ok(())
}
