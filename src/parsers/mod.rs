//! Parsers for solution filenames and solution file contents
//!
//! # Error Handling Strategy
//!
//! Nothing in this module returns an error. Both parsers treat odd input as a
//! normal filtering outcome:
//!
//! - **Filenames**: names that don't follow `NNNN-slug.ext` yield `None` and the
//!   collector skips them without a warning.
//!
//! - **File contents**: a solution that cannot be read (missing, permission
//!   denied) is classified as [`Difficulty::Unknown`](crate::models::Difficulty)
//!   so one bad file never aborts the scan.

pub mod difficulty;
pub mod filename;

pub use difficulty::{DIFFICULTY_SCAN_LINES, detect_difficulty, extract_difficulty};
pub use filename::{parse_filename, title_from_slug};
