//! Opening-guess ranking command
//!
//! Scores every corpus word as an opening and reports the full ranking.

use crate::output::{print_ranking, write_ranking};
use crate::solver::rank_openings;
use crate::wordlists::Corpus;
use indicatif::ProgressBar;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

/// Run the opening ranker, optionally writing the report to a file
///
/// # Errors
///
/// Returns an error if the report file cannot be written.
pub fn run_rank(corpus: &Corpus, output: Option<&Path>) -> Result<(), String> {
    println!(
        "Scoring {} opening guesses against the whole corpus...",
        corpus.len()
    );

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Scoring openings");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let start = Instant::now();
    let ranked = rank_openings(corpus.words());
    let duration = start.elapsed();

    spinner.finish_and_clear();
    println!("Scored {} openings in {:.2}s\n", ranked.len(), duration.as_secs_f64());

    print_ranking(&ranked, corpus.len(), 20);

    if let Some(path) = output {
        let mut file = fs::File::create(path)
            .map_err(|e| format!("Failed to create {}: {e}", path.display()))?;
        write_ranking(&mut file, &ranked, corpus.len())
            .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
        println!("\nWrote full ranking to {}", path.display());
    }

    Ok(())
}
