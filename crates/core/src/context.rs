// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-run evaluation context.
//!
//! One [`RunContext`] is built for each run and passed by reference through
//! every predicate. It owns the timeline cache and the reference time, and is
//! dropped when the run ends; nothing is kept across runs.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::cache::TimelineCache;
use crate::error::{Error, Result};
use crate::source::IssueSource;
use crate::timeline::TimelineEvent;

/// State shared by all predicates during one run.
pub struct RunContext<'s> {
    now: DateTime<Utc>,
    timelines: TimelineCache<'s>,
}

impl<'s> RunContext<'s> {
    /// Creates a context evaluating against `now`, fetching timelines from `source`.
    pub fn new(source: &'s dyn IssueSource, now: DateTime<Utc>) -> Self {
        RunContext {
            now,
            timelines: TimelineCache::new(source),
        }
    }

    /// Reference time for all age computations in this run.
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Timeline of record `number`, fetched at most once per run.
    pub async fn timeline(&self, number: u64) -> Result<Arc<[TimelineEvent]>> {
        self.timelines
            .get(number)
            .await
            .map_err(|source| Error::Timeline { number, source })
    }

    pub fn timelines(&self) -> &TimelineCache<'s> {
        &self.timelines
    }
}
