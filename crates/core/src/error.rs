// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for ua-core operations.

use thiserror::Error;

use crate::dispatch::ActionKind;
use crate::source::SourceError;

/// All possible errors that can occur in ua-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("record source unavailable: {0}")]
    Source(#[from] SourceError),

    #[error("failed to load timeline for #{number}: {source}")]
    Timeline { number: u64, source: SourceError },

    #[error("failed to {action} #{number}: {source}")]
    Action {
        number: u64,
        action: ActionKind,
        source: SourceError,
    },

    #[error("invalid comment template: {0}\n  hint: supported placeholders are {{assignees}} and {{days}}")]
    InvalidTemplate(String),
}

impl Error {
    /// Returns true if this error must abort the whole run rather than
    /// just the record being evaluated.
    pub fn is_fatal(&self) -> bool {
        match self {
            Error::Source(source)
            | Error::Timeline { source, .. }
            | Error::Action { source, .. } => source.is_auth(),
            Error::InvalidTemplate(_) => false,
        }
    }
}

/// A specialized Result type for ua-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
