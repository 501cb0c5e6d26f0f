// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::future::ready;

use tracing::debug;

use crate::context::RunContext;
use crate::pipeline::{Predicate, PredicateFuture};
use crate::record::Record;

/// Protects listed logins from unassignment.
///
/// Every listed assignee is marked ignored. The record is rejected only when
/// no assignee is left to consider, i.e. all of them are excluded (a record
/// without assignees is rejected too).
#[derive(Debug, Clone, Default)]
pub struct ExcludeAssignees {
    logins: Vec<String>,
}

impl ExcludeAssignees {
    pub fn new(logins: Vec<String>) -> Self {
        ExcludeAssignees { logins }
    }

    fn is_excluded(&self, login: &str) -> bool {
        self.logins.iter().any(|l| l.eq_ignore_ascii_case(login))
    }
}

impl Predicate for ExcludeAssignees {
    fn name(&self) -> &'static str {
        "exclude_assignees"
    }

    fn evaluate<'a>(&'a self, record: &'a mut Record, _ctx: &'a RunContext<'a>) -> PredicateFuture<'a> {
        let number = record.number;
        for assignee in record.active_assignees_mut() {
            if self.is_excluded(&assignee.login) {
                debug!(number, login = %assignee.login, "assignee excluded");
                assignee.ignored = true;
            }
        }
        Box::pin(ready(Ok(record.has_active_assignees())))
    }
}
