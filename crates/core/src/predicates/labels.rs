// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::future::ready;

use crate::context::RunContext;
use crate::pipeline::{Predicate, PredicateFuture};
use crate::record::Record;

/// Rejects records carrying any excluded label. Matching ignores case.
#[derive(Debug, Clone, Default)]
pub struct ExcludeLabels {
    labels: Vec<String>,
}

impl ExcludeLabels {
    pub fn new(labels: Vec<String>) -> Self {
        ExcludeLabels { labels }
    }
}

impl Predicate for ExcludeLabels {
    fn name(&self) -> &'static str {
        "exclude_labels"
    }

    fn evaluate<'a>(&'a self, record: &'a mut Record, _ctx: &'a RunContext<'a>) -> PredicateFuture<'a> {
        Box::pin(ready(Ok(!record.has_any_label(&self.labels))))
    }
}
