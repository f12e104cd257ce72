use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;

use crate::indexer::{calculate_progress, collect_solutions};
use crate::models::{Language, ProgressStats, SolutionRecord};
use crate::readme::{ReadmeOptions, generate_readme, preview, write_readme};
use crate::utils::{format_path_with_tilde, link_base};

/// Flags that take no value
const SWITCHES: &[&str] = &["-h", "--help", "-V", "--version", "--stats", "--dry-run", "--json"];

/// Options followed by a value, either as `--opt value` or `--opt=value`
const VALUE_OPTIONS: &[&str] = &["--solutions-dir", "--readme", "--language", "--website-url"];

/// Number of solutions listed after a successful update
const LATEST_SHOWN: usize = 5;

#[derive(Parser, Debug)]
#[command(name = "solutions-readme")]
#[command(version = "0.1.0")]
#[command(
    about = "Regenerate a solutions README with a table of contents and difficulty stats",
    long_about = None
)]
#[command(after_help = "Examples:
  solutions-readme             # Update README.md
  solutions-readme --stats     # Show current stats
  solutions-readme --dry-run   # Preview changes")]
pub struct Cli {
    /// Show current statistics only
    #[arg(long)]
    pub stats: bool,

    /// Show what would be updated without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Print statistics as JSON (with --stats)
    #[arg(long)]
    pub json: bool,

    /// Directory holding NNNN-slug.<ext> solution files
    #[arg(long, value_name = "DIR", default_value = "./solutions")]
    pub solutions_dir: PathBuf,

    /// README file to regenerate
    #[arg(long, value_name = "FILE", default_value = "./README.md")]
    pub readme: PathBuf,

    /// Solution language, decides the file extension
    #[arg(long, value_enum, default_value_t = Language::Js)]
    pub language: Language,

    /// Website link shown under the README heading
    #[arg(long, value_name = "URL")]
    pub website_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Update,
    Stats,
    DryRun,
}

impl Cli {
    /// Stats takes precedence over dry-run; neither means a full update
    pub fn mode(&self) -> Mode {
        if self.stats {
            Mode::Stats
        } else if self.dry_run {
            Mode::DryRun
        } else {
            Mode::Update
        }
    }
}

/// Resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub solutions_dir: PathBuf,
    pub readme_path: PathBuf,
    pub language: Language,
    pub website_url: Option<String>,
    pub json: bool,
}

impl From<&Cli> for RunConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            solutions_dir: cli.solutions_dir.clone(),
            readme_path: cli.readme.clone(),
            language: cli.language,
            website_url: cli.website_url.clone(),
            json: cli.json,
        }
    }
}

impl RunConfig {
    pub fn readme_options(&self) -> ReadmeOptions {
        ReadmeOptions {
            language: self.language,
            website_url: self.website_url.clone(),
            link_base: link_base(&self.solutions_dir, &self.readme_path),
        }
    }

    fn readme_name(&self) -> String {
        self.readme_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.readme_path.display().to_string())
    }
}

/// Drop arguments the CLI doesn't know so they can't abort the run
///
/// The first item (program name) is always kept. Known switches are kept as
/// is; known value options are kept together with their value. A value option
/// with nothing after it, or followed by another flag, is dropped. Everything
/// else is reported on stderr and discarded.
pub fn retain_known_args<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::<String>::into).peekable();
    let mut kept: Vec<String> = args.next().into_iter().collect();

    while let Some(arg) = args.next() {
        let (name, inline_value) = match arg.split_once('=') {
            Some((name, _)) => (name, true),
            None => (arg.as_str(), false),
        };

        if !inline_value && SWITCHES.contains(&name) {
            kept.push(arg);
        } else if VALUE_OPTIONS.contains(&name) {
            if inline_value {
                kept.push(arg);
            } else if let Some(value) = args.next_if(|value| !value.starts_with('-')) {
                kept.push(arg);
                kept.push(value);
            } else {
                eprintln!("Warning: Ignoring {} without a value", arg);
            }
        } else {
            eprintln!("Warning: Ignoring unrecognized argument: {}", arg);
        }
    }

    kept
}

/// Parse the command line without ever failing on usage errors
///
/// Help and version requests print and exit as usual. Any other parse error
/// (e.g. an invalid `--language` value) is reported as a warning and the run
/// continues with default options, keeping only the mode switches.
pub fn parse_cli<I, S>(args: I) -> Cli
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args = retain_known_args(args);

    match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let message = e.to_string();
            let reason = message.lines().next().unwrap_or_default().trim_start_matches("error: ");
            eprintln!("Warning: Ignoring options ({}), using defaults", reason);

            let mut switches: Vec<&String> = Vec::new();
            for arg in args.iter().skip(1) {
                if SWITCHES.contains(&arg.as_str()) && !switches.contains(&arg) {
                    switches.push(arg);
                }
            }
            let fallback = args.iter().take(1).chain(switches);

            Cli::try_parse_from(fallback)
                .unwrap_or_else(|_| Cli::parse_from(args.iter().take(1)))
        }
    }
}

pub fn run() -> Result<()> {
    let cli = parse_cli(std::env::args());
    run_with(&cli)
}

pub fn run_with(cli: &Cli) -> Result<()> {
    let config = RunConfig::from(cli);

    match cli.mode() {
        Mode::Stats => show_stats(&config),
        Mode::DryRun => dry_run(&config),
        Mode::Update => update_readme(&config),
    }
}

fn scan(config: &RunConfig) -> Result<(Vec<SolutionRecord>, ProgressStats)> {
    let solutions = collect_solutions(&config.solutions_dir, config.language)?;
    let stats = calculate_progress(&solutions);
    Ok((solutions, stats))
}

fn print_counts(stats: &ProgressStats) {
    println!("   Easy: {}", stats.easy);
    println!("   Medium: {}", stats.medium);
    println!("   Hard: {}", stats.hard);
    if stats.unknown() > 0 {
        println!("   Unknown: {}", stats.unknown());
    }
}

fn show_stats(config: &RunConfig) -> Result<()> {
    let (_, stats) = scan(config)?;

    if config.json {
        let json = serde_json::to_string_pretty(&stats).context("Failed to serialize stats")?;
        println!("{}", json);
        return Ok(());
    }

    println!("Solution Statistics");
    println!("===================");
    println!("   Total: {}", stats.total);
    print_counts(&stats);
    println!();
    println!("Solutions directory: {}", format_path_with_tilde(&config.solutions_dir));

    Ok(())
}

fn dry_run(config: &RunConfig) -> Result<()> {
    println!("Dry run mode - showing what would be updated...");
    let (solutions, stats) = scan(config)?;
    let content = generate_readme(&solutions, &stats, &config.readme_options(), Local::now());

    println!();
    println!("Generated content preview:");
    println!("{}", "=".repeat(50));
    println!("{}", preview(&content));
    println!("{}", "=".repeat(50));

    Ok(())
}

fn update_readme(config: &RunConfig) -> Result<()> {
    println!("Scanning {}...", format_path_with_tilde(&config.solutions_dir));
    let (solutions, stats) = scan(config)?;

    println!("Found {} solutions:", stats.total);
    print_counts(&stats);

    let content = generate_readme(&solutions, &stats, &config.readme_options(), Local::now());
    let readme_name = config.readme_name();
    write_readme(&config.readme_path, &content)
        .with_context(|| format!("Failed to update {}", readme_name))?;

    println!("{} updated successfully!", readme_name);

    if solutions.is_empty() {
        let ext = config.language.extension();
        println!();
        println!("Ready to add your first solution!");
        println!("   Create: {}/0001-two-sum.{}", format_path_with_tilde(&config.solutions_dir), ext);
        println!("   Then run: solutions-readme");
    } else {
        println!();
        println!("Latest solutions:");
        let skip = solutions.len().saturating_sub(LATEST_SHOWN);
        for solution in &solutions[skip..] {
            println!("   {}. {} ({})", solution.number, solution.title, solution.difficulty);
        }
    }

    Ok(())
}
