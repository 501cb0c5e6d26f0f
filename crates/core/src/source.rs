// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Record source abstraction.
//!
//! The pipeline never talks to an HTTP API directly. It consumes:
//! - an [`IssueSource`] that lists records and their timelines, and
//! - an [`IssueMutator`] that applies the side-effecting actions.
//!
//! Both are trait objects so tests can substitute in-memory fakes.

use std::future::Future;
use std::pin::Pin;

use crate::record::{IssueState, Record};
use crate::timeline::TimelineEvent;

/// Boxed future returned by the source traits.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Error type for record source operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// Credentials were rejected (HTTP 401/403).
    #[error("authentication failed: {0}\n  hint: check that GITHUB_TOKEN is set and has issues:write scope")]
    Unauthorized(String),

    /// The transport failed before a response was received.
    #[error("transport error: {0}")]
    Unavailable(String),

    /// The API answered with a non-success status.
    #[error("unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// The query cannot be served by this source.
    #[error("invalid query: {0}")]
    InvalidQuery(String),
}

impl SourceError {
    /// Returns true for credential failures.
    pub fn is_auth(&self) -> bool {
        matches!(self, SourceError::Unauthorized(_))
    }
}

/// Result type for record source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Query for listing candidate records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueQuery {
    /// Repository owner (user or organization).
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Only records in this state are listed.
    pub state: IssueState,
    /// Assignee filter: `*` for any assignee, `none` for unassigned, or a login.
    pub assignee: String,
    /// Page size requested from the source.
    pub per_page: u32,
}

impl IssueQuery {
    /// Maximum page size accepted by the GitHub REST API.
    pub const MAX_PER_PAGE: u32 = 100;

    /// Open records in `owner/repo` that have at least one assignee.
    pub fn assigned_open(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        IssueQuery {
            owner: owner.into(),
            repo: repo.into(),
            state: IssueState::Open,
            assignee: "*".to_string(),
            per_page: Self::MAX_PER_PAGE,
        }
    }

    /// Query-string parameters for this query, in a stable order.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("state", self.state.as_str().to_string()),
            ("assignee", self.assignee.clone()),
            ("per_page", self.per_page.min(Self::MAX_PER_PAGE).to_string()),
        ]
    }
}

/// Read side of the external system.
pub trait IssueSource: Send + Sync {
    /// Lists every record matching `query`, following pagination to the end.
    fn list_issues<'a>(&'a self, query: &'a IssueQuery) -> BoxFuture<'a, SourceResult<Vec<Record>>>;

    /// Lists the full timeline of record `number`, following pagination.
    fn list_timeline(&self, number: u64) -> BoxFuture<'_, SourceResult<Vec<TimelineEvent>>>;
}

/// Write side of the external system. Each call is one external request.
pub trait IssueMutator: Send + Sync {
    /// Removes `logins` from the assignees of record `number`.
    fn remove_assignees<'a>(
        &'a self,
        number: u64,
        logins: &'a [String],
    ) -> BoxFuture<'a, SourceResult<()>>;

    /// Posts a comment on record `number`.
    fn add_comment<'a>(&'a self, number: u64, body: &'a str) -> BoxFuture<'a, SourceResult<()>>;
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
