use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;

/// Problem number and title recovered from a filename like `0001-two-sum.js`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFilename {
    pub number: u32,
    pub title: String,
    pub slug: String,
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionRecord {
    pub number: u32,
    pub title: String,
    pub slug: String,
    pub file_name: String,
    pub source_path: PathBuf,
    pub difficulty: Difficulty,
}

impl SolutionRecord {
    pub fn new(parsed: ParsedFilename, source_path: PathBuf, difficulty: Difficulty) -> Self {
        Self {
            number: parsed.number,
            title: parsed.title,
            slug: parsed.slug,
            file_name: parsed.file_name,
            source_path,
            difficulty,
        }
    }
}
