// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `depdag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "depdag",
    version,
    about = "Schedule dependent tasks into independent, topologically ordered groups.",
    long_about = None
)]
pub struct CliArgs {
    /// Read task lines from PATH instead of standard input.
    ///
    /// Each line is a task followed by its prerequisites, whitespace
    /// separated. Lines starting with `#` are comments.
    #[arg(long, value_name = "PATH")]
    pub input: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DEPDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse input, print tasks and prerequisites, but don't schedule.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
