//! Command implementations

pub mod assist;
pub mod cheatsheet;
pub mod rank;
pub mod selftest;
pub mod simulate;

pub use assist::run_assist;
pub use cheatsheet::run_cheatsheet;
pub use rank::run_rank;
pub use selftest::run_selftest;
pub use simulate::run_simulate;
