// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `questlog`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "questlog",
    version,
    about = "Show a dependency-ordered task list with game-style XP and levels.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the task list (TOML).
    #[arg(long, value_name = "PATH", default_value = "Questlog.toml")]
    pub config: String,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `QUESTLOG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Evaluate overdue tasks as of this RFC 3339 instant instead of the
    /// system clock.
    #[arg(long, value_name = "RFC3339")]
    pub now: Option<String>,

    /// Parse and validate the task list, print it, then stop.
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

pub fn parse() -> CliArgs {
    CliArgs::parse()
}
