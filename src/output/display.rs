//! Display functions for command results

use crate::core::Word;
use crate::solver::TryHistogram;
use colored::Colorize;
use std::io;

/// Print the try-count histogram with distribution bars
pub fn print_histogram(histogram: &TryHistogram) {
    println!("{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let total = histogram.total();
    if total == 0 {
        println!("\nNo words simulated.");
        return;
    }

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words solved:     {total}");
    println!(
        "   Average tries:    {}",
        format!("{:.3}", histogram.average()).bright_yellow().bold()
    );
    println!("   Worst case:       {} tries", histogram.max_tries());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = histogram.counts().iter().copied().max().unwrap_or(1);

    for (tries, &count) in histogram.counts().iter().enumerate() {
        if tries == 0 {
            continue;
        }
        let pct = count as f64 * 100.0 / total as f64;
        let bar_len = if max_count > 0 {
            (count * 40 / max_count).max(usize::from(count > 0))
        } else {
            0
        };
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );

        println!("   Number of words in {tries} tries: {bar} {count:4} ({pct:5.1}%)");
    }
}

/// Print the top of an opening ranking, best first
pub fn print_ranking(ranked: &[(Word, u64)], corpus_size: usize, limit: usize) {
    println!("{}", "═".repeat(60).cyan());
    println!(" {} ", "OPENING RANKING".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    for (index, (word, score)) in ranked.iter().take(limit).enumerate() {
        let average = *score as f64 / corpus_size as f64;
        println!(
            "  {:>3}. {} - {:.3}",
            index + 1,
            word.text().to_uppercase().bright_yellow(),
            average
        );
    }

    if ranked.len() > limit {
        println!("  ... and {} more", ranked.len() - limit);
    }
}

/// Write the full ranking report, one `<word> - <score>` line per opening
///
/// The score is the average remaining-candidate count (raw total divided
/// by corpus size), matching the on-disk report format.
///
/// # Errors
/// Returns an I/O error on write failure.
pub fn write_ranking<W: io::Write>(
    mut writer: W,
    ranked: &[(Word, u64)],
    corpus_size: usize,
) -> io::Result<()> {
    for (word, score) in ranked {
        let average = *score as f64 / corpus_size as f64;
        writeln!(writer, "{word} - {average}")?;
    }
    Ok(())
}
