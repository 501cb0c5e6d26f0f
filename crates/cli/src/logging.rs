// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Log output on stderr, leaving stdout to the run summary.

use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::env;
use crate::error::{Error, Result};

/// Filter directives: `debug` with `--verbose`, else `RUST_LOG`, else `info`.
pub fn directives(verbose: bool, rust_log: Option<&str>) -> String {
    match (verbose, rust_log) {
        (true, _) => "debug".to_string(),
        (false, Some(filter)) => filter.to_string(),
        (false, None) => "info".to_string(),
    }
}

/// Installs the global subscriber.
pub fn init(verbose: bool) -> Result<()> {
    let rust_log = env::rust_log();
    let filter = EnvFilter::try_new(directives(verbose, rust_log.as_deref()))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).map_err(|e| Error::Logging(e.to_string()))
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
