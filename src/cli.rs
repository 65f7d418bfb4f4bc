// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Almost everything is configured through `INPUT_*` environment variables
//! set by the CI runner; the flags here are for local use and debugging.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `ssh-action`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ssh-action",
    version,
    about = "Run a remote command over ssh as a CI step, with connection retries.",
    long_about = None
)]
pub struct CliArgs {
    /// Set an input, overriding the `INPUT_<NAME>` environment variable.
    ///
    /// May be repeated, e.g. `--input host=10.0.0.2 --input run="uname -a"`.
    #[arg(long = "input", short = 'i', value_name = "NAME=VALUE", value_parser = parse_input_override)]
    pub inputs: Vec<(String, String)>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, the `log-level` input, then `SSH_ACTION_LOG`, then a
    /// default level is used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve and print the inputs and planned commands, but run nothing.
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

fn parse_input_override(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty input name in '{s}'"));
    }
    Ok((name.to_string(), value.to_string()))
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
