// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Record types evaluated by the pipeline.
//!
//! A [`Record`] mirrors the subset of a GitHub issue payload the automation
//! cares about. Records are read-only external state, except for the
//! transient `ignored` marker on each [`Assignee`], which predicates use to
//! pass decisions to predicates later in the chain.

use serde::{Deserialize, Serialize};

/// Open/closed state of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueState {
    Open,
    Closed,
}

impl IssueState {
    /// Returns the string representation used by the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueState::Open => "open",
            IssueState::Closed => "closed",
        }
    }
}

/// A user reference as embedded in API payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub login: String,
}

/// A label attached to a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
}

impl Label {
    pub fn new(name: impl Into<String>) -> Self {
        Label { name: name.into() }
    }
}

/// An assignee of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    /// Username of the assignee.
    pub login: String,
    /// Set by predicates when this assignee must not affect later verdicts
    /// (and must not be unassigned). Never read from or sent to the API.
    #[serde(skip)]
    pub ignored: bool,
}

impl Assignee {
    pub fn new(login: impl Into<String>) -> Self {
        Assignee {
            login: login.into(),
            ignored: false,
        }
    }
}

/// Marker present on records that are really pull requests.
///
/// The issues endpoint lists pull requests as issues; the presence of this
/// object is the only way to tell them apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// An externally tracked work item evaluated for action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique number of the record within its repository.
    pub number: u64,
    #[serde(default)]
    pub title: String,
    pub state: IssueState,
    #[serde(default)]
    pub assignees: Vec<Assignee>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<PullRequestRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
}

impl Record {
    /// Creates an open record with no assignees or labels.
    pub fn new(number: u64, title: impl Into<String>) -> Self {
        Record {
            number,
            title: title.into(),
            state: IssueState::Open,
            assignees: Vec::new(),
            labels: Vec::new(),
            body: None,
            pull_request: None,
            html_url: None,
        }
    }

    pub fn with_assignees<I, S>(mut self, logins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assignees = logins.into_iter().map(Assignee::new).collect();
        self
    }

    pub fn with_labels<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = names.into_iter().map(Label::new).collect();
        self
    }

    /// Returns true if this record is a pull request rather than an issue.
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }

    /// Returns true if any label matches one of `names`, ignoring case.
    pub fn has_any_label(&self, names: &[String]) -> bool {
        self.labels
            .iter()
            .any(|label| names.iter().any(|n| n.eq_ignore_ascii_case(&label.name)))
    }

    /// Assignees that have not been marked ignored.
    pub fn active_assignees(&self) -> impl Iterator<Item = &Assignee> {
        self.assignees.iter().filter(|a| !a.ignored)
    }

    /// Mutable view of the assignees that have not been marked ignored.
    pub fn active_assignees_mut(&mut self) -> impl Iterator<Item = &mut Assignee> {
        self.assignees.iter_mut().filter(|a| !a.ignored)
    }

    pub fn has_active_assignees(&self) -> bool {
        self.active_assignees().next().is_some()
    }

    /// Logins of the assignees that have not been marked ignored, in order.
    pub fn active_logins(&self) -> Vec<String> {
        self.active_assignees().map(|a| a.login.clone()).collect()
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
