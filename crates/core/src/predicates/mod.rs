// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Standard predicates of the auto-unassign pipeline.
//!
//! In default evaluation order:
//!
//! 1. [`ExcludePullRequests`] - drops pull requests listed as issues
//! 2. [`ExcludeLabels`] - drops records carrying an opted-out label
//! 3. [`ExcludeAssignees`] - ignores protected assignees
//! 4. [`StaleAssignment`] - ignores assignees assigned too recently (timeline)
//! 5. [`LinkedPullRequest`] - ignores assignees with an open linked PR (timeline)
//!
//! The first three are local; the last two fetch the record timeline through
//! the run's cache, so a record rejected early costs no external call.

mod assignees;
mod labels;
mod linked;
mod pull_requests;
mod stale;

pub use assignees::ExcludeAssignees;
pub use labels::ExcludeLabels;
pub use linked::LinkedPullRequest;
pub use pull_requests::ExcludePullRequests;
pub use stale::StaleAssignment;

use crate::pipeline::Pipeline;

/// Label that opts a record out of automation unless configured otherwise.
pub const DEFAULT_EXCLUDE_LABEL: &str = "no-automation";

/// Default number of days an assignment may last before it is stale.
pub const DEFAULT_DAYS_SINCE: u32 = 14;

/// Inputs of the standard pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria {
    /// Assignments held strictly longer than this many days are stale.
    pub days_since: u32,
    /// Labels (case-insensitive) that exclude a record.
    pub exclude_labels: Vec<String>,
    /// Logins that are never unassigned.
    pub exclude_assignees: Vec<String>,
    /// Number of records evaluated at a time.
    pub concurrency: usize,
}

impl Default for Criteria {
    fn default() -> Self {
        Criteria {
            days_since: DEFAULT_DAYS_SINCE,
            exclude_labels: vec![DEFAULT_EXCLUDE_LABEL.to_string()],
            exclude_assignees: Vec::new(),
            concurrency: 1,
        }
    }
}

impl Criteria {
    /// Builds the standard pipeline, local predicates first.
    pub fn pipeline(&self) -> Pipeline {
        Pipeline::new()
            .with(ExcludePullRequests)
            .with(ExcludeLabels::new(self.exclude_labels.clone()))
            .with(ExcludeAssignees::new(self.exclude_assignees.clone()))
            .with(StaleAssignment::new(self.days_since))
            .with(LinkedPullRequest)
            .with_concurrency(self.concurrency)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
