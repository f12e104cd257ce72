//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for a project root holding a `solutions/` directory
pub struct ProjectDirBuilder {
    temp_dir: TempDir,
}

impl ProjectDirBuilder {
    /// Create a new builder with an empty `solutions/` directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir(temp_dir.path().join("solutions")).expect("Failed to create solutions dir");
        Self { temp_dir }
    }

    /// Create a new builder without a `solutions/` directory
    pub fn without_solutions_dir() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the project root
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a solution file with the given content
    pub fn with_file(self, file_name: &str, content: &str) -> Self {
        let path = self.temp_dir.path().join("solutions").join(file_name);
        fs::write(path, content).expect("Failed to write solution file");
        self
    }

    /// Add a solution built programmatically
    pub fn with_solution(self, solution: SolutionFileBuilder) -> Self {
        let file_name = solution.file_name();
        let content = solution.to_source();
        self.with_file(&file_name, &content)
    }

    /// Add an existing README with the given content
    pub fn with_readme(self, content: &str) -> Self {
        fs::write(self.temp_dir.path().join("README.md"), content).expect("Failed to write README");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ProjectDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a single solution source file
pub struct SolutionFileBuilder {
    number: u32,
    slug: String,
    extension: String,
    difficulty: Option<String>,
    leading_lines: usize,
}

impl SolutionFileBuilder {
    /// Create a solution with the given number and slug
    pub fn new(number: u32, slug: &str) -> Self {
        Self {
            number,
            slug: slug.to_string(),
            extension: "js".to_string(),
            difficulty: None,
            leading_lines: 0,
        }
    }

    /// Set the difficulty comment written into the header
    pub fn difficulty(mut self, difficulty: &str) -> Self {
        self.difficulty = Some(difficulty.to_string());
        self
    }

    /// Set the file extension (without dot)
    pub fn extension(mut self, extension: &str) -> Self {
        self.extension = extension.to_string();
        self
    }

    /// Push the difficulty comment down by this many filler lines
    pub fn leading_lines(mut self, count: usize) -> Self {
        self.leading_lines = count;
        self
    }

    pub fn file_name(&self) -> String {
        format!("{:04}-{}.{}", self.number, self.slug, self.extension)
    }

    /// Render the source file
    pub fn to_source(&self) -> String {
        let mut source = String::new();
        for _ in 0..self.leading_lines {
            source.push_str("// @param {number[]} nums\n");
        }
        if let Some(difficulty) = &self.difficulty {
            source.push_str(&format!("// Difficulty: {}\n", difficulty));
        }
        source.push_str("var solve = function(nums) {\n    return nums;\n};\n");
        source
    }
}

/// Path of the README inside a project root
pub fn readme_path(root: &Path) -> PathBuf {
    root.join("README.md")
}

/// Table and stats sections of a README, without the date lines
pub fn deterministic_part(readme: &str) -> String {
    readme
        .lines()
        .filter(|line| !line.starts_with("*Updated:") && !line.starts_with("*Last updated:"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A small realistic project with mixed difficulties
pub fn realistic_project() -> TempDir {
    ProjectDirBuilder::new()
        .with_solution(SolutionFileBuilder::new(1, "two-sum").difficulty("Easy"))
        .with_solution(SolutionFileBuilder::new(2, "add-two-numbers").difficulty("Medium"))
        .with_solution(SolutionFileBuilder::new(3, "longest-substring"))
        .with_solution(SolutionFileBuilder::new(4, "median-of-two-sorted-arrays").difficulty("Hard"))
        .with_solution(SolutionFileBuilder::new(20, "valid-parentheses").difficulty("Easy"))
        .with_file("notes.md", "Easy ideas")
        .build()
}
