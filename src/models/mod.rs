//! Data models for the solutions index.
//!
//! This module defines the data structures used throughout the application:
//!
//! - [`Difficulty`] - Classification detected in a solution's leading lines
//! - [`Language`] - Solution language, which decides the file extension
//! - [`SolutionRecord`] - One qualifying solution file with its parsed metadata
//! - [`ProgressStats`] - Counts per difficulty derived from the record list
//!
//! Records are built once per scan and never mutated afterwards. Nothing here is
//! persisted; only the rendered README outlives a run.

pub mod difficulty;
pub mod language;
pub mod progress;
pub mod solution;

pub use difficulty::Difficulty;
pub use language::Language;
pub use progress::ProgressStats;
pub use solution::{ParsedFilename, SolutionRecord};
