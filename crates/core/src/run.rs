// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One auto-unassign run: fetch, filter, dispatch, summarize.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::context::RunContext;
use crate::dispatch::{CommentTemplate, DispatchReport, Dispatcher};
use crate::error::Result;
use crate::pipeline::EvaluationFailure;
use crate::predicates::Criteria;
use crate::source::{IssueMutator, IssueQuery, IssueSource};

/// Everything a run needs besides the external system.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub query: IssueQuery,
    pub criteria: Criteria,
    /// Comment template posted after unassigning, if any.
    pub comment: Option<String>,
    pub dry_run: bool,
    /// Reference time for assignment ages.
    pub now: DateTime<Utc>,
}

/// Aggregate result of a run, reported to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Records returned by the source.
    pub fetched: usize,
    /// Numbers of the records that survived the pipeline, in source order.
    pub survivors: Vec<u64>,
    /// Rejected record count per predicate.
    pub rejected: BTreeMap<&'static str, usize>,
    /// Records skipped because their evaluation failed.
    pub errored: Vec<EvaluationFailure>,
    /// Timeline fetches issued during filtering.
    pub timeline_fetches: usize,
    pub dispatch: DispatchReport,
}

impl RunSummary {
    /// Returns true if any record could not be evaluated or actioned.
    pub fn has_failures(&self) -> bool {
        !self.errored.is_empty() || self.dispatch.has_failures()
    }
}

/// Runs the whole automation once.
///
/// Fails only on fatal errors: an invalid comment template, a failed
/// initial fetch, or rejected credentials on any call. Per-record failures
/// end up in the returned summary.
pub async fn run(
    source: &dyn IssueSource,
    mutator: &dyn IssueMutator,
    options: &RunOptions,
) -> Result<RunSummary> {
    let template = options
        .comment
        .as_deref()
        .map(CommentTemplate::parse)
        .transpose()?;

    info!(
        owner = %options.query.owner,
        repo = %options.query.repo,
        days_since = options.criteria.days_since,
        "fetching assigned issues"
    );
    let records = source.list_issues(&options.query).await?;
    let mut summary = RunSummary {
        fetched: records.len(),
        dispatch: DispatchReport {
            dry_run: options.dry_run,
            ..DispatchReport::default()
        },
        ..RunSummary::default()
    };

    if records.is_empty() {
        info!("no issues were returned by the initial query");
        return Ok(summary);
    }
    info!(count = records.len(), "filtering issues");

    let ctx = RunContext::new(source, options.now);
    let outcome = options.criteria.pipeline().filter(records, &ctx).await?;

    summary.survivors = outcome.survivors.iter().map(|r| r.number).collect();
    summary.rejected = outcome.rejections_by_predicate();
    summary.timeline_fetches = ctx.timelines().fetch_count();
    info!(
        survivors = outcome.survivors.len(),
        errored = outcome.errored.len(),
        timeline_fetches = summary.timeline_fetches,
        "filtering complete"
    );
    summary.errored = outcome.errored;

    summary.dispatch = Dispatcher::new(mutator, options.criteria.days_since)
        .with_comment(template)
        .dry_run(options.dry_run)
        .dispatch(&outcome.survivors)
        .await?;

    Ok(summary)
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
