// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! uars - the `auto-unassign` command.
//!
//! Wires the GitHub client from `ua-github` into the `ua-core` pipeline:
//! resolves settings from flags, an optional TOML file and the environment,
//! runs once, and prints the summary.

mod cli;
mod display;
mod logging;

pub mod config;
pub mod env;
pub mod error;

pub use cli::{Cli, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};

use chrono::Utc;
use tracing::{info, warn};
use ua_github::{GithubClient, GithubConfig, DEFAULT_API_URL};

/// Runs the automation once and prints the summary to stdout.
///
/// Returns [`Error::PartialFailure`] after printing if any issue could not
/// be evaluated or any action failed.
pub async fn run(cli: Cli) -> Result<()> {
    logging::init(cli.verbose)?;

    let config = Config::resolve(&cli)?;
    let token = env::github_token().ok_or(Error::MissingToken)?;
    let api_url = env::github_api_url()
        .or_else(|| config.api_url.clone())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let client = GithubClient::new(
        GithubConfig::new(token, &config.repo_owner, &config.repo).with_api_url(api_url),
    )?;
    let options = config.run_options(Utc::now());
    if options.dry_run {
        info!("dry run: no issue will be changed");
    }

    let summary = ua_core::run(&client, &client, &options).await?;

    match cli.format {
        OutputFormat::Text => print!("{}", display::text(&summary, &options.query)),
        OutputFormat::Json => println!("{}", display::json(&summary)?),
    }

    if summary.has_failures() {
        warn!("run finished with failures");
        return Err(Error::PartialFailure {
            errored: summary.errored.len(),
            failed: summary.dispatch.failures.len(),
        });
    }
    Ok(())
}
