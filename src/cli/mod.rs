pub mod commands;

pub use commands::{Cli, Mode, RunConfig, parse_cli, retain_known_args, run};
