// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Predicate pipeline engine.
//!
//! A [`Pipeline`] is an ordered list of [`Predicate`]s. Each record is run
//! through the list independently and survives only if every predicate
//! returns `true`; evaluation stops at the first `false`. Predicates may
//! annotate the assignees of the record under evaluation, and later
//! predicates in the chain see those annotations.
//!
//! Put cheap local predicates first: a record rejected by a label check never
//! costs a timeline fetch.

use std::collections::BTreeMap;

use futures_util::stream::{self, StreamExt};
use serde::Serialize;
use tracing::{debug, warn};

use crate::context::RunContext;
use crate::error::Result;
use crate::record::Record;
use crate::source::BoxFuture;

/// Future returned by [`Predicate::evaluate`].
pub type PredicateFuture<'a> = BoxFuture<'a, Result<bool>>;

/// A boolean test over a single record, possibly suspending on external calls.
pub trait Predicate: Send + Sync {
    /// Stable name used in logs and summaries.
    fn name(&self) -> &'static str;

    /// Returns `Ok(true)` to keep the record, `Ok(false)` to reject it.
    ///
    /// May mark assignees of `record` as ignored; must not touch anything else.
    fn evaluate<'a>(&'a self, record: &'a mut Record, ctx: &'a RunContext<'a>)
        -> PredicateFuture<'a>;
}

/// Result of running one record through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every predicate returned true.
    Pass,
    /// The named predicate returned false.
    Rejected(&'static str),
}

/// A record dropped by a predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub number: u64,
    pub predicate: &'static str,
}

/// A record whose evaluation failed; it is never actioned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationFailure {
    pub number: u64,
    pub reason: String,
}

/// Records partitioned by the pipeline, each list in source order.
#[derive(Debug, Default)]
pub struct FilterOutcome {
    pub survivors: Vec<Record>,
    pub rejected: Vec<Rejection>,
    pub errored: Vec<EvaluationFailure>,
}

impl FilterOutcome {
    /// Count of rejected records per predicate name.
    pub fn rejections_by_predicate(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for rejection in &self.rejected {
            *counts.entry(rejection.predicate).or_insert(0) += 1;
        }
        counts
    }
}

/// An ordered chain of predicates.
pub struct Pipeline {
    predicates: Vec<Box<dyn Predicate>>,
    concurrency: usize,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    /// Creates an empty pipeline (every record passes) evaluating one record at a time.
    pub fn new() -> Self {
        Pipeline {
            predicates: Vec::new(),
            concurrency: 1,
        }
    }

    /// Appends `predicate` to the end of the chain.
    pub fn with(mut self, predicate: impl Predicate + 'static) -> Self {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Evaluates up to `n` records at a time. Output order is unaffected.
    pub fn with_concurrency(mut self, n: usize) -> Self {
        self.concurrency = n.max(1);
        self
    }

    /// Predicate names in evaluation order.
    pub fn names(&self) -> Vec<&'static str> {
        self.predicates.iter().map(|p| p.name()).collect()
    }

    /// Runs `record` through the chain, stopping at the first rejection.
    pub async fn evaluate(&self, record: &mut Record, ctx: &RunContext<'_>) -> Result<Verdict> {
        for predicate in &self.predicates {
            if !predicate.evaluate(record, ctx).await? {
                debug!(number = record.number, predicate = predicate.name(), "rejected");
                return Ok(Verdict::Rejected(predicate.name()));
            }
        }
        debug!(number = record.number, "passed all predicates");
        Ok(Verdict::Pass)
    }

    /// Filters `records`, returning survivors and rejections in input order.
    ///
    /// A failed evaluation drops only that record, unless the error is fatal
    /// (rejected credentials), which aborts the whole filter.
    pub async fn filter(&self, records: Vec<Record>, ctx: &RunContext<'_>) -> Result<FilterOutcome> {
        let mut outcome = FilterOutcome::default();

        // `buffered` yields in input order regardless of completion order.
        let mut evaluations = stream::iter(records.into_iter().map(|mut record| async move {
            let verdict = self.evaluate(&mut record, ctx).await;
            (record, verdict)
        }))
        .buffered(self.concurrency);

        while let Some((record, verdict)) = evaluations.next().await {
            match verdict {
                Ok(Verdict::Pass) => outcome.survivors.push(record),
                Ok(Verdict::Rejected(predicate)) => outcome.rejected.push(Rejection {
                    number: record.number,
                    predicate,
                }),
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    warn!(number = record.number, "skipping record: {}", e);
                    outcome.errored.push(EvaluationFailure {
                        number: record.number,
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
