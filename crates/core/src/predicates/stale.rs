// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::Duration;
use tracing::{debug, warn};

use crate::context::RunContext;
use crate::pipeline::{Predicate, PredicateFuture};
use crate::record::Record;
use crate::timeline::latest_assignment;

/// Keeps records with at least one assignee holding the assignment for
/// strictly longer than the threshold.
///
/// An assignee's assignment time is the most recent `assigned` event naming
/// them. If the timeline has no such event, the assignee counts as assigned
/// right now, so inconsistent data never leads to an unassignment.
/// Assignees below the threshold are marked ignored.
#[derive(Debug, Clone)]
pub struct StaleAssignment {
    threshold: Duration,
}

impl StaleAssignment {
    pub fn new(days: u32) -> Self {
        StaleAssignment {
            threshold: Duration::days(i64::from(days)),
        }
    }
}

impl Predicate for StaleAssignment {
    fn name(&self) -> &'static str {
        "stale_assignment"
    }

    fn evaluate<'a>(&'a self, record: &'a mut Record, ctx: &'a RunContext<'a>) -> PredicateFuture<'a> {
        Box::pin(async move {
            if !record.has_active_assignees() {
                return Ok(false);
            }

            let number = record.number;
            let timeline = ctx.timeline(number).await?;
            let now = ctx.now();

            for assignee in record.active_assignees_mut() {
                let assigned_at = match latest_assignment(&timeline, &assignee.login) {
                    Some(at) => at,
                    None => {
                        warn!(number, login = %assignee.login, "no assignment event in timeline, treating as just assigned");
                        now
                    }
                };

                let held = now.signed_duration_since(assigned_at);
                if held <= self.threshold {
                    debug!(number, login = %assignee.login, days = held.num_days(), "assignment is recent");
                    assignee.ignored = true;
                }
            }

            Ok(record.has_active_assignees())
        })
    }
}
