// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::future::ready;

use crate::context::RunContext;
use crate::pipeline::{Predicate, PredicateFuture};
use crate::record::Record;

/// Rejects pull requests; the issues endpoint lists them alongside issues.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExcludePullRequests;

impl Predicate for ExcludePullRequests {
    fn name(&self) -> &'static str {
        "exclude_pull_requests"
    }

    fn evaluate<'a>(&'a self, record: &'a mut Record, _ctx: &'a RunContext<'a>) -> PredicateFuture<'a> {
        Box::pin(ready(Ok(!record.is_pull_request())))
    }
}
