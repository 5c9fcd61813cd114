//! Full-corpus simulation command
//!
//! Replays the solver against every corpus word and prints the try-count
//! histogram.

use crate::output::print_histogram;
use crate::solver::{CheatSheet, TryHistogram, solve_answer};
use crate::wordlists::Corpus;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::{Duration, Instant};

/// Simulate every corpus word with the given opening
///
/// When a sheet path is supplied the persisted cheat sheet is loaded;
/// otherwise one is built in memory first.
///
/// # Errors
///
/// Returns an error when the opening is not in the word list, the sheet
/// cannot be loaded, or a solve fails (an incomplete sheet aborts the whole
/// run rather than skipping the affected word).
pub fn run_simulate(corpus: &Corpus, first: &str, sheet_path: Option<&Path>) -> Result<(), String> {
    let first = corpus
        .find(first)
        .cloned()
        .ok_or_else(|| format!("'{first}' is not in the word list"))?;

    let sheet = match sheet_path {
        Some(path) => CheatSheet::load(path)
            .map_err(|e| format!("Failed to load cheat sheet {}: {e}", path.display()))?,
        None => {
            let spinner = ProgressBar::new_spinner();
            spinner.set_message("Building cheat sheet");
            spinner.enable_steady_tick(Duration::from_millis(100));
            let sheet = CheatSheet::build(&first, corpus.words());
            spinner.finish_and_clear();
            sheet
        }
    };

    println!(
        "Simulating {} answers with opening {}...",
        corpus.len(),
        first.text().to_uppercase().bright_yellow().bold()
    );

    let pb = ProgressBar::new(corpus.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut histogram = TryHistogram::new();

    for (index, answer) in corpus.words().iter().enumerate() {
        let tries = solve_answer(&first, &sheet, corpus.words(), answer)
            .map_err(|e| format!("Simulation aborted: {e}"))?;
        histogram.record(tries);

        if index % 10 == 0 {
            pb.set_message(format!("Avg: {:.2}", histogram.average()));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    println!(
        "\nSimulated {} words in {:.2}s\n",
        histogram.total(),
        duration.as_secs_f64()
    );

    print_histogram(&histogram);

    Ok(())
}
