// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run configuration.
//!
//! Settings come from an optional TOML file passed with `--config`; any flag
//! given on the command line overrides the file. Every key is optional:
//!
//! ```toml
//! days_since = 14
//! repo_owner = "internetarchive"
//! repo = "openlibrary"
//! exclude_labels = ["no-automation"]
//! exclude_assignees = ["mek"]
//! comment = "Unassigning {assignees} after {days} days without progress."
//! concurrency = 4
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use ua_core::predicates::{DEFAULT_DAYS_SINCE, DEFAULT_EXCLUDE_LABEL};
use ua_core::{Criteria, IssueQuery, RunOptions};

use crate::cli::Cli;
use crate::error::{Error, Result};

const DEFAULT_REPO_OWNER: &str = "internetarchive";
const DEFAULT_REPO: &str = "openlibrary";

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Assignments held longer than this many days are removed.
    #[serde(default = "default_days_since")]
    pub days_since: u32,
    #[serde(default = "default_repo_owner")]
    pub repo_owner: String,
    #[serde(default = "default_repo")]
    pub repo: String,
    /// Issues with any of these labels are never touched (case-insensitive).
    #[serde(default = "default_exclude_labels")]
    pub exclude_labels: Vec<String>,
    /// Logins that are never unassigned.
    #[serde(default)]
    pub exclude_assignees: Vec<String>,
    /// Comment posted after unassigning; `{assignees}` and `{days}` are expanded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// REST endpoint; `GITHUB_API_URL` takes precedence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    /// Issues evaluated at a time.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    #[serde(default)]
    pub dry_run: bool,
}

fn default_days_since() -> u32 {
    DEFAULT_DAYS_SINCE
}

fn default_repo_owner() -> String {
    DEFAULT_REPO_OWNER.to_string()
}

fn default_repo() -> String {
    DEFAULT_REPO.to_string()
}

fn default_exclude_labels() -> Vec<String> {
    vec![DEFAULT_EXCLUDE_LABEL.to_string()]
}

fn default_concurrency() -> usize {
    1
}

impl Default for Config {
    fn default() -> Self {
        Config {
            days_since: default_days_since(),
            repo_owner: default_repo_owner(),
            repo: default_repo(),
            exclude_labels: default_exclude_labels(),
            exclude_assignees: Vec::new(),
            comment: None,
            api_url: None,
            concurrency: default_concurrency(),
            dry_run: false,
        }
    }
}

impl Config {
    /// Loads and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file cannot be read, is not valid
    /// TOML, contains unknown keys, or holds out-of-range values.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("invalid config {}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Builds the effective configuration: the `--config` file (or defaults)
    /// with command-line flags applied on top.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        Ok(config.with_overrides(cli))
    }

    /// Applies the flags that were given on the command line.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(days) = cli.days_since {
            self.days_since = days;
        }
        if let Some(owner) = &cli.repo_owner {
            self.repo_owner = owner.clone();
        }
        if let Some(repo) = &cli.repo {
            self.repo = repo.clone();
        }
        if let Some(comment) = &cli.comment {
            self.comment = Some(comment.clone());
        }
        if let Some(n) = cli.concurrency {
            self.concurrency = n;
        }
        self.dry_run |= cli.dry_run;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.concurrency == 0 {
            return Err(Error::Config("concurrency must be at least 1".to_string()));
        }
        if self.repo_owner.trim().is_empty() || self.repo.trim().is_empty() {
            return Err(Error::Config(
                "repo_owner and repo cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn criteria(&self) -> Criteria {
        Criteria {
            days_since: self.days_since,
            exclude_labels: self.exclude_labels.clone(),
            exclude_assignees: self.exclude_assignees.clone(),
            concurrency: self.concurrency,
        }
    }

    /// Options for a run evaluated at `now`.
    pub fn run_options(&self, now: DateTime<Utc>) -> RunOptions {
        RunOptions {
            query: IssueQuery::assigned_open(&self.repo_owner, &self.repo),
            criteria: self.criteria(),
            comment: self.comment.clone(),
            dry_run: self.dry_run,
            now,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
