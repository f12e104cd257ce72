//! Directory scan producing the sorted list of solution records.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{Language, SolutionRecord};
use crate::parsers::{extract_difficulty, parse_filename};
use crate::utils::format_path_with_tilde;

/// Collect every solution in `solutions_dir`, sorted by problem number
///
/// Lists the directory once without recursing. Each regular entry whose name
/// parses as `NNNN-slug.<ext>` for the given language becomes a
/// [`SolutionRecord`], with its difficulty read from the file's first lines.
/// Entries with equal numbers are all kept and ordered by file name.
///
/// # Arguments
///
/// * `solutions_dir` - Directory holding the solution files
/// * `language` - Decides which file extension qualifies
///
/// # Returns
///
/// Returns an empty Vec (after creating the directory) if `solutions_dir` does
/// not exist yet.
///
/// # Errors
///
/// Returns an error if:
/// - The missing directory cannot be created
/// - The directory exists but cannot be read
/// - A directory entry cannot be accessed
pub fn collect_solutions(solutions_dir: &Path, language: Language) -> Result<Vec<SolutionRecord>> {
    if !solutions_dir.exists() {
        eprintln!(
            "Solutions directory not found. Creating {}...",
            format_path_with_tilde(solutions_dir)
        );
        fs::create_dir_all(solutions_dir).with_context(|| {
            format!("Failed to create solutions directory: {}", solutions_dir.display())
        })?;
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(solutions_dir).with_context(|| {
        format!("Failed to read solutions directory: {}", solutions_dir.display())
    })?;

    let mut solutions = Vec::new();

    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        let file_name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(_) => continue,
        };

        let Some(parsed) = parse_filename(&file_name, language.extension()) else {
            continue;
        };

        let difficulty = extract_difficulty(&path);
        solutions.push(SolutionRecord::new(parsed, path, difficulty));
    }

    solutions.sort_by(|a, b| a.number.cmp(&b.number).then_with(|| a.file_name.cmp(&b.file_name)));

    Ok(solutions)
}
