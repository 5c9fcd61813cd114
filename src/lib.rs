//! Wordle Partition Solver
//!
//! A Wordle solver that picks guesses by minimizing the summed sizes of the
//! candidate partitions each guess induces - a proxy for expected remaining
//! candidates - and precomputes second-guess cheat sheets for fixed
//! openings.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_partition::core::{Grade, Word};
//!
//! let guess = Word::new("crane").unwrap();
//! let answer = Word::new("slate").unwrap();
//!
//! let grade = Grade::of(&guess, &answer);
//! println!("Grade: {}", grade.letters().unwrap());
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

/// Default opening guess used by the interactive modes
pub const DEFAULT_OPENING: &str = "lares";
