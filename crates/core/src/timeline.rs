// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Timeline events: the append-only history of a record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{IssueState, PullRequestRef, UserRef};

/// Kinds of timeline events the predicates understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A user was assigned to the record.
    Assigned,
    /// A user was removed from the record's assignees.
    Unassigned,
    /// Another issue or pull request mentioned the record.
    CrossReferenced,
    /// Any event kind not listed above (commented, labeled, committed, ...).
    Other,
}

impl EventKind {
    /// Maps an API event name to a kind.
    pub fn parse(name: &str) -> Self {
        match name {
            "assigned" => EventKind::Assigned,
            "unassigned" => EventKind::Unassigned,
            "cross-referenced" => EventKind::CrossReferenced,
            _ => EventKind::Other,
        }
    }
}

/// The issue or pull request a `cross-referenced` event points back to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedIssue {
    pub number: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<IssueState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<PullRequestRef>,
}

impl LinkedIssue {
    pub fn is_open_pull_request(&self) -> bool {
        self.pull_request.is_some() && self.state == Some(IssueState::Open)
    }
}

/// Payload of a `cross-referenced` event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossReference {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<LinkedIssue>,
}

/// One entry of a record's timeline.
///
/// Only the fields used by the predicates are decoded; event kinds that carry
/// no `created_at` (e.g. `committed`) decode with `created_at: None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Raw event name as reported by the API.
    pub event: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<UserRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<CrossReference>,
}

impl TimelineEvent {
    /// An `assigned` event for `login` at `at`.
    pub fn assigned(login: impl Into<String>, at: DateTime<Utc>) -> Self {
        TimelineEvent {
            event: "assigned".to_string(),
            created_at: Some(at),
            assignee: Some(UserRef {
                login: login.into(),
            }),
            source: None,
        }
    }

    /// A `cross-referenced` event from pull request `number` by `author`.
    pub fn referenced_by_pull_request(
        number: u64,
        author: impl Into<String>,
        state: IssueState,
        at: DateTime<Utc>,
    ) -> Self {
        TimelineEvent {
            event: "cross-referenced".to_string(),
            created_at: Some(at),
            assignee: None,
            source: Some(CrossReference {
                kind: Some("issue".to_string()),
                issue: Some(LinkedIssue {
                    number,
                    state: Some(state),
                    user: Some(UserRef {
                        login: author.into(),
                    }),
                    pull_request: Some(PullRequestRef::default()),
                }),
            }),
        }
    }

    pub fn kind(&self) -> EventKind {
        EventKind::parse(&self.event)
    }

    fn names_assignee(&self, login: &str) -> bool {
        self.assignee
            .as_ref()
            .is_some_and(|a| a.login.eq_ignore_ascii_case(login))
    }
}

/// Returns when `login` was most recently assigned, if the timeline says so.
pub fn latest_assignment(events: &[TimelineEvent], login: &str) -> Option<DateTime<Utc>> {
    events
        .iter()
        .filter(|e| e.kind() == EventKind::Assigned && e.names_assignee(login))
        .filter_map(|e| e.created_at)
        .max()
}

/// Returns the numbers of open pull requests by `login` that cross-reference
/// the record, in timeline order.
pub fn open_pull_requests_by(events: &[TimelineEvent], login: &str) -> Vec<u64> {
    events
        .iter()
        .filter(|e| e.kind() == EventKind::CrossReferenced)
        .filter_map(|e| e.source.as_ref()?.issue.as_ref())
        .filter(|issue| issue.is_open_pull_request())
        .filter(|issue| {
            issue
                .user
                .as_ref()
                .is_some_and(|u| u.login.eq_ignore_ascii_case(login))
        })
        .map(|issue| issue.number)
        .collect()
}

#[cfg(test)]
#[path = "timeline_tests.rs"]
mod tests;
