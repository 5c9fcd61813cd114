//! Wordle Partition Solver - CLI
//!
//! Guess selection by partition-size minimization, with cheat-sheet
//! precomputation and full-corpus simulation.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordle_partition::{
    DEFAULT_OPENING,
    commands::{run_assist, run_cheatsheet, run_rank, run_selftest, run_simulate},
    core::Word,
    wordlists::{COMMON, Corpus, UNCOMMON, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle_partition",
    about = "Wordle solver that minimizes expected remaining candidates",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Opening guess for the interactive modes
    #[arg(short, long, global = true, default_value = DEFAULT_OPENING)]
    first: String,

    /// Path to a custom common word list (default: embedded)
    #[arg(long, global = true)]
    common: Option<PathBuf>,

    /// Path to a custom uncommon word list (default: embedded)
    #[arg(long, global = true)]
    uncommon: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive aide: you play, it suggests and you grade
    Assist,

    /// Replay a full solve against a known or random answer
    Selftest {
        /// Answer word (random corpus word when omitted)
        word: Option<String>,
    },

    /// Score every corpus word as an opening guess
    Rank {
        /// Write the full ranking report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build the second-guess cheat sheet for an opening word
    Cheatsheet {
        /// Opening word the sheet is keyed to
        opening: String,

        /// Output file (default: <opening>.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replay the solver against every corpus word
    Simulate {
        /// Opening word for every solve
        opening: String,

        /// Load the cheat sheet from this file instead of building one
        #[arg(short, long)]
        sheet: Option<PathBuf>,
    },
}

/// Assemble the corpus from custom files or the embedded lists
fn load_corpus(common: Option<&Path>, uncommon: Option<&Path>) -> Result<Corpus> {
    let common_words = match common {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("Failed to load common list {}", path.display()))?,
        None => loader::words_from_slice(COMMON),
    };

    let uncommon_words = match uncommon {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("Failed to load uncommon list {}", path.display()))?,
        None => loader::words_from_slice(UNCOMMON),
    };

    Ok(Corpus::new(common_words, uncommon_words))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let corpus = load_corpus(cli.common.as_deref(), cli.uncommon.as_deref())?;
    if corpus.is_empty() {
        return Err(anyhow!("The word corpus is empty"));
    }

    match cli.command {
        Commands::Assist => {
            let first = find_opening(&corpus, &cli.first)?;
            run_assist(&corpus, &first).map_err(|e| anyhow!(e))
        }
        Commands::Selftest { word } => {
            let first = find_opening(&corpus, &cli.first)?;
            run_selftest(&corpus, &first, word.as_deref()).map_err(|e| anyhow!(e))
        }
        Commands::Rank { output } => run_rank(&corpus, output.as_deref()).map_err(|e| anyhow!(e)),
        Commands::Cheatsheet { opening, output } => {
            run_cheatsheet(&corpus, &opening, output.as_deref()).map_err(|e| anyhow!(e))
        }
        Commands::Simulate { opening, sheet } => {
            run_simulate(&corpus, &opening, sheet.as_deref()).map_err(|e| anyhow!(e))
        }
    }
}

fn find_opening(corpus: &Corpus, text: &str) -> Result<Word> {
    corpus
        .find(text)
        .cloned()
        .ok_or_else(|| anyhow!("Opening '{text}' is not in the word list"))
}
