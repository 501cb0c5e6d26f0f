// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Parse a count that must be at least 1.
fn positive(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

/// Output format for the run summary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "auto-unassign")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Remove stale assignees from open GitHub issues")]
#[command(
    long_about = "Remove stale assignees from open GitHub issues.\n\n\
    Assignees who have held an issue longer than --daysSince days, and have no \
    open pull request linked to it, are unassigned. Issues labeled \
    'no-automation' are skipped. Requires GITHUB_TOKEN."
)]
#[command(after_help = "\
Examples:
  auto-unassign                              Run against internetarchive/openlibrary
  auto-unassign --daysSince 30 --dry-run     Report what a 30-day run would do
  auto-unassign --repoOwner octo --repo hello --format json")]
pub struct Cli {
    /// Days an assignment may be held before it is considered stale [default: 14]
    #[arg(long = "daysSince", visible_alias = "days-since", value_name = "days")]
    pub days_since: Option<u32>,

    /// Owner of the repository [default: internetarchive]
    #[arg(
        long = "repoOwner",
        visible_alias = "repo-owner",
        value_name = "owner",
        value_parser = non_empty_string
    )]
    pub repo_owner: Option<String>,

    /// Repository name [default: openlibrary]
    #[arg(long, value_name = "name", value_parser = non_empty_string)]
    pub repo: Option<String>,

    /// TOML file with run settings; flags take precedence
    #[arg(long, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Comment posted after unassigning ({assignees} and {days} are expanded)
    #[arg(long, value_name = "text", value_parser = non_empty_string)]
    pub comment: Option<String>,

    /// Report what would be done without changing any issue
    #[arg(long)]
    pub dry_run: bool,

    /// Number of issues evaluated at a time [default: 1]
    #[arg(long, value_name = "n", value_parser = positive)]
    pub concurrency: Option<usize>,

    /// Summary format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
