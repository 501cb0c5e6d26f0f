// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Action dispatcher.
//!
//! Applies the unassignment (and optional comment) to every record that
//! survived the pipeline. Each record is handled in isolation: a failed call
//! is logged and recorded, and the dispatcher moves on to the next record.
//! Rejected credentials are the exception: they stop dispatching at once.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::record::Record;
use crate::source::{IssueMutator, SourceError};

const ASSIGNEES_PLACEHOLDER: &str = "assignees";
const DAYS_PLACEHOLDER: &str = "days";

/// Comment posted after unassigning.
///
/// Supports `{assignees}` (rendered as `@login` mentions) and `{days}`
/// (the staleness threshold).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentTemplate {
    text: String,
}

impl CommentTemplate {
    /// Parses `text`, rejecting unknown or unterminated placeholders.
    pub fn parse(text: &str) -> Result<Self> {
        let mut rest = text;
        while let Some(open) = rest.find('{') {
            let after = &rest[open + 1..];
            let close = after
                .find('}')
                .ok_or_else(|| Error::InvalidTemplate(format!("unterminated placeholder in '{}'", text)))?;
            let name = &after[..close];
            if name != ASSIGNEES_PLACEHOLDER && name != DAYS_PLACEHOLDER {
                return Err(Error::InvalidTemplate(format!("unknown placeholder {{{}}}", name)));
            }
            rest = &after[close + 1..];
        }
        Ok(CommentTemplate {
            text: text.to_string(),
        })
    }

    pub fn render(&self, logins: &[String], days: u32) -> String {
        let mentions = logins
            .iter()
            .map(|l| format!("@{}", l))
            .collect::<Vec<_>>()
            .join(", ");
        self.text
            .replace("{assignees}", &mentions)
            .replace("{days}", &days.to_string())
    }
}

/// Kinds of mutation the dispatcher performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Unassign,
    Comment,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Unassign => "unassign",
            ActionKind::Comment => "comment",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A record the dispatcher acted on (or would have, in dry-run mode).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Actioned {
    pub number: u64,
    pub unassigned: Vec<String>,
    pub commented: bool,
}

/// A mutation call that failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchFailure {
    pub number: u64,
    pub action: ActionKind,
    pub reason: String,
}

/// Outcome of dispatching actions over the surviving records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DispatchReport {
    pub dry_run: bool,
    pub actioned: Vec<Actioned>,
    pub failures: Vec<DispatchFailure>,
}

impl DispatchReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Records a failed call, or returns it as an error if it must abort dispatching.
    fn record_failure(&mut self, number: u64, action: ActionKind, source: SourceError) -> Result<()> {
        if source.is_auth() {
            return Err(Error::Action {
                number,
                action,
                source,
            });
        }
        warn!(number, %action, "action failed: {}", source);
        self.failures.push(DispatchFailure {
            number,
            action,
            reason: source.to_string(),
        });
        Ok(())
    }
}

/// Applies actions to surviving records through an [`IssueMutator`].
pub struct Dispatcher<'m> {
    mutator: &'m dyn IssueMutator,
    comment: Option<CommentTemplate>,
    days_since: u32,
    dry_run: bool,
}

impl<'m> Dispatcher<'m> {
    pub fn new(mutator: &'m dyn IssueMutator, days_since: u32) -> Self {
        Dispatcher {
            mutator,
            comment: None,
            days_since,
            dry_run: false,
        }
    }

    pub fn with_comment(mut self, comment: Option<CommentTemplate>) -> Self {
        self.comment = comment;
        self
    }

    /// In dry-run mode no mutation call is made; the report lists what would happen.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Unassigns every non-ignored assignee of each record, in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Action`] as soon as a call fails with rejected
    /// credentials; no further record is touched. Any other failure is
    /// recorded in the report.
    pub async fn dispatch(&self, records: &[Record]) -> Result<DispatchReport> {
        let mut report = DispatchReport {
            dry_run: self.dry_run,
            ..DispatchReport::default()
        };

        for record in records {
            let logins = record.active_logins();
            if logins.is_empty() {
                debug!(number = record.number, "nothing to unassign");
                continue;
            }

            if self.dry_run {
                info!(number = record.number, ?logins, "dry run: would unassign");
                report.actioned.push(Actioned {
                    number: record.number,
                    unassigned: logins,
                    commented: self.comment.is_some(),
                });
                continue;
            }

            if let Err(e) = self.mutator.remove_assignees(record.number, &logins).await {
                report.record_failure(record.number, ActionKind::Unassign, e)?;
                continue;
            }
            info!(number = record.number, ?logins, "unassigned");

            let mut commented = false;
            if let Some(template) = &self.comment {
                let body = template.render(&logins, self.days_since);
                match self.mutator.add_comment(record.number, &body).await {
                    Ok(()) => commented = true,
                    Err(e) => report.record_failure(record.number, ActionKind::Comment, e)?,
                }
            }

            report.actioned.push(Actioned {
                number: record.number,
                unassigned: logins,
                commented,
            });
        }

        Ok(report)
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
