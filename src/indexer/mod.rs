//! Solution collection and progress aggregation
//!
//! # Error Handling Strategy
//!
//! The collector combines graceful degradation with a small set of fatal cases:
//!
//! - **Entry-level outcomes**: Files whose names don't parse, subdirectories and
//!   non-UTF-8 names are skipped. Unreadable solutions are kept with an unknown
//!   difficulty. None of these stop the scan.
//!
//! - **Bootstrap**: A missing solutions directory is created and an empty list is
//!   returned, so a fresh checkout renders the zero-state README.
//!
//! - **Fatal failures**: If the directory can't be created or listed, the error is
//!   propagated with context and the command fails.

pub mod collector;
pub mod progress;

pub use collector::collect_solutions;
pub use progress::calculate_progress;
