//! Core domain types for the solver
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod grade;
mod word;

pub use grade::{Grade, GradeError, Mark};
pub use word::{Word, WordError};
