// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-flight timeline cache.
//!
//! Several predicates need a record's timeline. The cache fetches it on first
//! access and serves every later access from memory. Each record id owns a
//! [`OnceCell`], so concurrent lookups for the same id wait on the one
//! in-flight fetch instead of issuing their own. Failures are memoized too:
//! a timeline that failed to load stays failed for the rest of the run.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::{Mutex, OnceCell};
use tracing::debug;

use crate::source::{IssueSource, SourceResult};
use crate::timeline::TimelineEvent;

type TimelineSlot = SourceResult<Arc<[TimelineEvent]>>;

/// Run-scoped memo of record timelines keyed by record number.
pub struct TimelineCache<'s> {
    source: &'s dyn IssueSource,
    entries: Mutex<HashMap<u64, Arc<OnceCell<TimelineSlot>>>>,
    fetches: AtomicUsize,
}

impl<'s> TimelineCache<'s> {
    pub fn new(source: &'s dyn IssueSource) -> Self {
        TimelineCache {
            source,
            entries: Mutex::new(HashMap::new()),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Returns the timeline of record `number`, fetching it on first access.
    pub async fn get(&self, number: u64) -> TimelineSlot {
        // The map lock is held only long enough to find or insert the cell.
        let cell = {
            let mut entries = self.entries.lock().await;
            Arc::clone(entries.entry(number).or_default())
        };

        cell.get_or_init(|| async {
            self.fetches.fetch_add(1, Ordering::Relaxed);
            debug!(number, "fetching timeline");
            self.source
                .list_timeline(number)
                .await
                .map(Arc::<[TimelineEvent]>::from)
        })
        .await
        .clone()
    }

    /// Number of timeline fetches issued to the source so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
