// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `taskdag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskdag",
    version,
    about = "Schedule a DAG of tasks onto a fixed pool of resources.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the JSON task definitions file.
    #[arg(value_name = "PATH")]
    pub tasks: String,

    /// Number of interchangeable resources in the pool. Must be >= 1.
    #[arg(value_name = "RESOURCES")]
    pub resources: usize,

    /// Use strict precedence semantics: dependents wait for dependency
    /// finish times, and delayed tasks advance their resource from the
    /// actual start time.
    #[arg(long)]
    pub strict: bool,

    /// Print a per-resource timeline after the JSON schedule.
    #[arg(long)]
    pub gantt: bool,

    /// Pretty-print the JSON schedule.
    #[arg(long)]
    pub pretty: bool,

    /// Parse + validate, print tasks and dependencies, but don't schedule.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
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
