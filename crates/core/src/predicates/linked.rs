// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tracing::debug;

use crate::context::RunContext;
use crate::pipeline::{Predicate, PredicateFuture};
use crate::record::Record;
use crate::timeline::open_pull_requests_by;

/// Ignores assignees who are working on the record through an open pull
/// request that cross-references it. Keeps the record if anyone is left.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkedPullRequest;

impl Predicate for LinkedPullRequest {
    fn name(&self) -> &'static str {
        "linked_pull_request"
    }

    fn evaluate<'a>(&'a self, record: &'a mut Record, ctx: &'a RunContext<'a>) -> PredicateFuture<'a> {
        Box::pin(async move {
            if !record.has_active_assignees() {
                return Ok(false);
            }

            let number = record.number;
            let timeline = ctx.timeline(number).await?;

            for assignee in record.active_assignees_mut() {
                let pulls = open_pull_requests_by(&timeline, &assignee.login);
                if !pulls.is_empty() {
                    debug!(number, login = %assignee.login, ?pulls, "assignee has an open linked pull request");
                    assignee.ignored = true;
                }
            }

            Ok(record.has_active_assignees())
        })
    }
}
