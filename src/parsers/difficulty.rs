use std::fs;
use std::path::Path;

use crate::models::Difficulty;

/// Number of leading lines searched for a difficulty hint
pub const DIFFICULTY_SCAN_LINES: usize = 10;

/// Keywords in per-line priority order
const KEYWORDS: [(&str, Difficulty); 3] =
    [("easy", Difficulty::Easy), ("medium", Difficulty::Medium), ("hard", Difficulty::Hard)];

/// Detect a difficulty hint in the first lines of a solution's source
///
/// Each of the first [`DIFFICULTY_SCAN_LINES`] lines is lowercased and searched
/// for "easy", "medium" and "hard", in that order. The first line containing
/// any of them decides. Matching is by substring, so a line mentioning
/// "hardcoded" counts as Hard.
///
/// # Examples
///
/// ```
/// use solutions_readme::{Difficulty, detect_difficulty};
///
/// assert_eq!(detect_difficulty("// Difficulty: Medium\n"), Difficulty::Medium);
/// assert_eq!(detect_difficulty("fn main() {}\n"), Difficulty::Unknown);
/// ```
pub fn detect_difficulty(content: &str) -> Difficulty {
    for line in content.split('\n').take(DIFFICULTY_SCAN_LINES) {
        let lower = line.to_lowercase();
        if let Some((_, difficulty)) = KEYWORDS.iter().find(|(kw, _)| lower.contains(kw)) {
            return *difficulty;
        }
    }

    Difficulty::Unknown
}

/// Read a solution file and detect its difficulty
///
/// Invalid UTF-8 is decoded lossily. Read failures yield
/// [`Difficulty::Unknown`] instead of an error.
pub fn extract_difficulty(path: &Path) -> Difficulty {
    match fs::read(path) {
        Ok(bytes) => detect_difficulty(&String::from_utf8_lossy(&bytes)),
        Err(_) => Difficulty::Unknown,
    }
}
