// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the uars library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("GITHUB_TOKEN is not set\n  hint: export a token that can edit issues in the target repository")]
    MissingToken,

    #[error("config error: {0}")]
    Config(String),

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error("{0}")]
    Core(#[from] ua_core::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("run finished with failures: {errored} issue(s) could not be evaluated, {failed} action(s) failed")]
    PartialFailure { errored: usize, failed: usize },
}

/// A specialized Result type for uars operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<ua_core::SourceError> for Error {
    fn from(e: ua_core::SourceError) -> Self {
        Error::Core(e.into())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
