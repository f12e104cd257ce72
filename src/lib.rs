//! Solutions README - regenerate a project index from a directory of solutions
//!
//! This library scans a directory of algorithm-exercise solutions named like
//! `0001-two-sum.js` and renders a markdown README with a table of contents and
//! a difficulty breakdown. It supports:
//!
//! - Parsing problem numbers and titles from solution filenames
//! - Detecting difficulty hints in the first lines of each solution
//! - Aggregating progress counts per difficulty
//! - Rendering and writing the README document
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use solutions_readme::{Language, calculate_progress, collect_solutions};
//!
//! let solutions = collect_solutions(Path::new("./solutions"), Language::Js)?;
//! let stats = calculate_progress(&solutions);
//! println!("Found {} solutions ({} easy)", stats.total, stats.easy);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod readme;
pub mod utils;

// Re-export commonly used types
pub use indexer::{calculate_progress, collect_solutions};
pub use models::{Difficulty, Language, ProgressStats, SolutionRecord};
pub use parsers::{detect_difficulty, extract_difficulty, parse_filename};
pub use readme::{ReadmeOptions, generate_readme, generate_table_of_contents, write_readme};
pub use utils::paths::{format_path_with_tilde, link_base};
