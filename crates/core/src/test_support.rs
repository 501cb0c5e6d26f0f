// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory source and mutator for unit tests.

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};

use crate::record::Record;
use crate::source::{BoxFuture, IssueMutator, IssueQuery, IssueSource, SourceError, SourceResult};
use crate::timeline::TimelineEvent;

/// Fixed reference time used across tests.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap()
}

pub fn days_ago(days: i64) -> DateTime<Utc> {
    fixed_now() - chrono::Duration::days(days)
}

/// Fake external system recording every call made against it.
#[derive(Default)]
pub struct FakeSource {
    issues: Vec<Record>,
    timelines: HashMap<u64, Vec<TimelineEvent>>,
    list_error: Option<SourceError>,
    timeline_errors: HashMap<u64, SourceError>,
    unassign_errors: HashMap<u64, SourceError>,
    comment_errors: HashMap<u64, SourceError>,
    timeline_delay: Option<Duration>,
    list_calls: Mutex<Vec<IssueQuery>>,
    timeline_calls: Mutex<Vec<u64>>,
    removed: Mutex<Vec<(u64, Vec<String>)>>,
    comments: Mutex<Vec<(u64, String)>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_issue(mut self, record: Record) -> Self {
        self.issues.push(record);
        self
    }

    pub fn with_timeline(mut self, number: u64, events: Vec<TimelineEvent>) -> Self {
        self.timelines.insert(number, events);
        self
    }

    pub fn failing_list(mut self, err: SourceError) -> Self {
        self.list_error = Some(err);
        self
    }

    pub fn failing_timeline(mut self, number: u64, err: SourceError) -> Self {
        self.timeline_errors.insert(number, err);
        self
    }

    pub fn failing_unassign(mut self, number: u64, err: SourceError) -> Self {
        self.unassign_errors.insert(number, err);
        self
    }

    pub fn failing_comment(mut self, number: u64, err: SourceError) -> Self {
        self.comment_errors.insert(number, err);
        self
    }

    /// Makes every timeline fetch take `delay`, so concurrent lookups overlap.
    pub fn with_timeline_delay(mut self, delay: Duration) -> Self {
        self.timeline_delay = Some(delay);
        self
    }

    pub fn list_calls(&self) -> Vec<IssueQuery> {
        self.list_calls.lock().unwrap().clone()
    }

    pub fn timeline_calls(&self) -> Vec<u64> {
        self.timeline_calls.lock().unwrap().clone()
    }

    pub fn removed(&self) -> Vec<(u64, Vec<String>)> {
        self.removed.lock().unwrap().clone()
    }

    pub fn comments(&self) -> Vec<(u64, String)> {
        self.comments.lock().unwrap().clone()
    }
}

impl IssueSource for FakeSource {
    fn list_issues<'a>(&'a self, query: &'a IssueQuery) -> BoxFuture<'a, SourceResult<Vec<Record>>> {
        Box::pin(async move {
            self.list_calls.lock().unwrap().push(query.clone());
            match &self.list_error {
                Some(err) => Err(err.clone()),
                None => Ok(self.issues.clone()),
            }
        })
    }

    fn list_timeline(&self, number: u64) -> BoxFuture<'_, SourceResult<Vec<TimelineEvent>>> {
        Box::pin(async move {
            self.timeline_calls.lock().unwrap().push(number);
            if let Some(delay) = self.timeline_delay {
                tokio::time::sleep(delay).await;
            }
            if let Some(err) = self.timeline_errors.get(&number) {
                return Err(err.clone());
            }
            Ok(self.timelines.get(&number).cloned().unwrap_or_default())
        })
    }
}

impl IssueMutator for FakeSource {
    fn remove_assignees<'a>(
        &'a self,
        number: u64,
        logins: &'a [String],
    ) -> BoxFuture<'a, SourceResult<()>> {
        Box::pin(async move {
            if let Some(err) = self.unassign_errors.get(&number) {
                return Err(err.clone());
            }
            self.removed.lock().unwrap().push((number, logins.to_vec()));
            Ok(())
        })
    }

    fn add_comment<'a>(&'a self, number: u64, body: &'a str) -> BoxFuture<'a, SourceResult<()>> {
        Box::pin(async move {
            if let Some(err) = self.comment_errors.get(&number) {
                return Err(err.clone());
            }
            self.comments.lock().unwrap().push((number, body.to_string()));
            Ok(())
        })
    }
}
