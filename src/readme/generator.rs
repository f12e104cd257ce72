use std::fmt::Write;

use chrono::{DateTime, Local, Utc};

use crate::models::{Language, ProgressStats, SolutionRecord};

const TABLE_HEADER: &str = "| # | Title | Difficulty |\n|---|-------|------------|";
const EMPTY_TABLE_ROW: &str = "| | *Your solutions will appear here as you add them* | |";

/// Characters shown by [`preview`]
pub const PREVIEW_CHARS: usize = 500;

/// Settings that shape the rendered README
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmeOptions {
    pub language: Language,
    pub website_url: Option<String>,
    /// Prefix for solution links, e.g. `./solutions`
    pub link_base: String,
}

impl Default for ReadmeOptions {
    fn default() -> Self {
        Self { language: Language::default(), website_url: None, link_base: "./solutions".to_string() }
    }
}

/// Render the markdown table of contents
///
/// An empty list renders a single placeholder row instead of an empty table.
pub fn generate_table_of_contents(solutions: &[SolutionRecord], link_base: &str) -> String {
    if solutions.is_empty() {
        return format!("{}\n{}", TABLE_HEADER, EMPTY_TABLE_ROW);
    }

    let mut table = String::from(TABLE_HEADER);
    for solution in solutions {
        let _ = write!(
            table,
            "\n| {} | [{}]({}/{}) | {} |",
            solution.number,
            solution.title,
            link_base,
            solution.file_name,
            solution.difficulty.marker()
        );
    }

    table
}

/// Render the complete README document
///
/// `now` only feeds the "Updated" line (local date) and the footer (UTC date),
/// so two renders of the same input differ in nothing else.
pub fn generate_readme(
    solutions: &[SolutionRecord],
    stats: &ProgressStats,
    options: &ReadmeOptions,
    now: DateTime<Local>,
) -> String {
    let language = options.language.display_name();
    let has_solutions = stats.total > 0;

    let heading = if has_solutions {
        format!("{}+ LeetCode solutions", stats.total)
    } else {
        "LeetCode solutions".to_string()
    };
    let tagline = if has_solutions {
        format!("*Updated: {}*", now.format("%-m/%-d/%Y"))
    } else {
        "*Start your LeetCode journey here!*".to_string()
    };
    let progress = if has_solutions {
        format!("{} (and counting!)", stats.total)
    } else {
        "0 (just getting started!)".to_string()
    };
    let topics = if has_solutions {
        "Topics will be automatically detected and listed here as you add more solutions."
    } else {
        "Topics will appear here as you solve problems covering different algorithms and data structures."
    };

    let website = match &options.website_url {
        Some(url) => format!("{}\n\n", url),
        None => String::new(),
    };

    format!(
        "# {heading} in {language}

{tagline}

{website}## Table of Contents:

{table}

## Languages
- {language} (100%)

## Progress
- **Total Problems Solved**: {progress}
- **Easy**: {easy}
- **Medium**: {medium}  
- **Hard**: {hard}

## Topics Covered
{topics}

## Getting Started
This repository contains my personal journey solving LeetCode problems. Each solution includes:
- Clean, readable {language} code
- Detailed comments explaining the approach
- Time and space complexity analysis
- Test cases

## How to Use
1. Browse the solutions in the table above
2. Click on any problem title to view the solution
3. Each file contains the problem description, solution, and test cases
4. Run any solution with: `{run_command}`

## Contributing
Feel free to:
- Suggest optimizations for existing solutions
- Add alternative approaches
- Report any issues or bugs
- Improve documentation

## Auto-Update
This README is automatically updated using `solutions-readme`.
Run `solutions-readme` after adding new solutions.

## License
MIT License

---
*Last updated: {last_updated}*
*Solutions: {total} | Easy: {easy} | Medium: {medium} | Hard: {hard}*",
        table = generate_table_of_contents(solutions, &options.link_base),
        run_command = options.language.run_command(),
        last_updated = now.with_timezone(&Utc).format("%Y-%m-%d"),
        total = stats.total,
        easy = stats.easy,
        medium = stats.medium,
        hard = stats.hard,
    )
}

/// First [`PREVIEW_CHARS`] characters of a document followed by `...`
pub fn preview(document: &str) -> String {
    let mut head: String = document.chars().take(PREVIEW_CHARS).collect();
    head.push_str("...");
    head
}
