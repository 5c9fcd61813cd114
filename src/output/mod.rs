//! Terminal output formatting
//!
//! Display utilities for CLI results and report writing.

pub mod display;

pub use display::{print_histogram, print_ranking, write_ranking};
