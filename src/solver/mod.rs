//! Solving algorithms
//!
//! Candidate filtering, partition-score guess selection, cheat-sheet
//! precomputation, opening ranking, and the batch simulation harness.

pub mod cheatsheet;
pub mod filter;
pub mod opening;
pub mod selector;
pub mod simulate;

pub use cheatsheet::CheatSheet;
pub use filter::{consistent, filter_candidates};
pub use opening::rank_openings;
pub use selector::{score_guess, select_best};
pub use simulate::{SimulateError, TryHistogram, simulate, solve_answer};
