// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ua-core: Predicate pipeline for issue triage automation.
//!
//! This crate holds everything that does not depend on a concrete API:
//! the record and timeline model, the source/mutator traits, the single-flight
//! timeline cache, the predicate pipeline with its standard predicates, and
//! the action dispatcher. The GitHub adapter lives in `ua-github`.

pub mod cache;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod pipeline;
pub mod predicates;
pub mod record;
pub mod run;
pub mod source;
pub mod timeline;

#[cfg(test)]
mod test_support;

pub use cache::TimelineCache;
pub use context::RunContext;
pub use dispatch::{ActionKind, CommentTemplate, DispatchReport, Dispatcher};
pub use error::{Error, Result};
pub use pipeline::{FilterOutcome, Pipeline, Predicate, PredicateFuture, Verdict};
pub use predicates::Criteria;
pub use record::{Assignee, IssueState, Label, Record, UserRef};
pub use run::{run, RunOptions, RunSummary};
pub use source::{BoxFuture, IssueMutator, IssueQuery, IssueSource, SourceError, SourceResult};
pub use timeline::{EventKind, TimelineEvent};
