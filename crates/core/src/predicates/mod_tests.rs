// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::context::RunContext;
use crate::pipeline::{Predicate, Verdict};
use crate::record::{IssueState, PullRequestRef, Record};
use crate::test_support::{days_ago, fixed_now, FakeSource};
use crate::timeline::TimelineEvent;
use yare::parameterized;

async fn check(predicate: &dyn Predicate, record: &mut Record, source: &FakeSource) -> bool {
    let ctx = RunContext::new(source, fixed_now());
    predicate.evaluate(record, &ctx).await.unwrap()
}

fn issue(number: u64, assignees: &[&str]) -> Record {
    Record::new(number, "issue").with_assignees(assignees.iter().copied())
}

// ─────────────────────────────────────────────────────────────────────────────
// Local predicates
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn exclude_pull_requests_rejects_pull_requests() {
    let source = FakeSource::new();
    let mut pr = issue(1, &["alice"]);
    pr.pull_request = Some(PullRequestRef::default());
    let mut plain = issue(2, &["alice"]);

    assert!(!check(&ExcludePullRequests, &mut pr, &source).await);
    assert!(check(&ExcludePullRequests, &mut plain, &source).await);
}

#[parameterized(
    excluded = { &["no-automation"], false },
    excluded_other_case = { &["good first issue", "No-Automation"], false },
    unrelated = { &["bug"], true },
    none = { &[], true },
)]
fn exclude_labels_matches_case_insensitively(labels: &[&str], keep: bool) {
    let source = FakeSource::new();
    let mut record = issue(1, &["alice"]).with_labels(labels.iter().copied());
    let predicate = ExcludeLabels::new(vec!["no-automation".to_string()]);

    let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
    assert_eq!(rt.block_on(check(&predicate, &mut record, &source)), keep);
}

#[tokio::test]
async fn exclude_assignees_marks_listed_logins() {
    let source = FakeSource::new();
    let mut record = issue(1, &["maintainer", "alice"]);
    let predicate = ExcludeAssignees::new(vec!["Maintainer".to_string()]);

    assert!(check(&predicate, &mut record, &source).await);
    assert!(record.assignees[0].ignored);
    assert!(!record.assignees[1].ignored);
}

#[parameterized(
    all_excluded = { &["maintainer"], false },
    some_excluded = { &["maintainer", "alice"], true },
    none_excluded = { &["alice"], true },
    no_assignees = { &[], false },
)]
fn exclude_assignees_rejects_only_when_all_excluded(assignees: &[&str], keep: bool) {
    let source = FakeSource::new();
    let mut record = issue(1, assignees);
    let predicate = ExcludeAssignees::new(vec!["maintainer".to_string()]);

    let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
    assert_eq!(rt.block_on(check(&predicate, &mut record, &source)), keep);
}

// ─────────────────────────────────────────────────────────────────────────────
// Stale assignment
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    twenty_days = { 20, true },
    fifteen_days = { 15, true },
    exactly_threshold = { 14, false },
    five_days = { 5, false },
)]
fn stale_assignment_threshold(assigned_days_ago: i64, keep: bool) {
    let source = FakeSource::new()
        .with_timeline(42, vec![TimelineEvent::assigned("alice", days_ago(assigned_days_ago))]);
    let mut record = issue(42, &["alice"]);

    let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
    assert_eq!(rt.block_on(check(&StaleAssignment::new(14), &mut record, &source)), keep);
    assert_eq!(record.assignees[0].ignored, !keep);
}

#[tokio::test]
async fn stale_assignment_without_assigned_event_fails_safe() {
    let source = FakeSource::new().with_timeline(
        42,
        vec![TimelineEvent::referenced_by_pull_request(
            7,
            "bob",
            IssueState::Closed,
            days_ago(40),
        )],
    );
    let mut record = issue(42, &["alice"]);

    assert!(!check(&StaleAssignment::new(14), &mut record, &source).await);
    assert!(record.assignees[0].ignored);
}

#[tokio::test]
async fn stale_assignment_uses_most_recent_assignment() {
    let source = FakeSource::new().with_timeline(
        42,
        vec![
            TimelineEvent::assigned("alice", days_ago(60)),
            TimelineEvent::assigned("alice", days_ago(2)),
        ],
    );
    let mut record = issue(42, &["alice"]);

    assert!(!check(&StaleAssignment::new(14), &mut record, &source).await);
}

#[tokio::test]
async fn stale_assignment_ignores_only_recent_assignees() {
    let source = FakeSource::new().with_timeline(
        42,
        vec![
            TimelineEvent::assigned("alice", days_ago(30)),
            TimelineEvent::assigned("bob", days_ago(1)),
        ],
    );
    let mut record = issue(42, &["alice", "bob"]);

    assert!(check(&StaleAssignment::new(14), &mut record, &source).await);
    assert_eq!(record.active_logins(), vec!["alice"]);
}

#[tokio::test]
async fn stale_assignment_skips_fetch_when_nobody_is_left() {
    let source = FakeSource::new();
    let mut record = issue(42, &["alice"]);
    record.assignees[0].ignored = true;

    assert!(!check(&StaleAssignment::new(14), &mut record, &source).await);
    assert!(source.timeline_calls().is_empty());
}

#[tokio::test]
async fn stale_assignment_does_not_revisit_ignored_assignees() {
    let source = FakeSource::new().with_timeline(
        42,
        vec![
            TimelineEvent::assigned("maintainer", days_ago(90)),
            TimelineEvent::assigned("alice", days_ago(3)),
        ],
    );
    let mut record = issue(42, &["maintainer", "alice"]);
    record.assignees[0].ignored = true;

    assert!(!check(&StaleAssignment::new(14), &mut record, &source).await);
}

// ─────────────────────────────────────────────────────────────────────────────
// Linked pull request
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn linked_pull_request_ignores_assignee_with_open_pr() {
    let source = FakeSource::new().with_timeline(
        42,
        vec![
            TimelineEvent::assigned("alice", days_ago(30)),
            TimelineEvent::referenced_by_pull_request(100, "alice", IssueState::Open, days_ago(2)),
        ],
    );
    let mut record = issue(42, &["alice"]);

    assert!(!check(&LinkedPullRequest, &mut record, &source).await);
    assert!(record.assignees[0].ignored);
}

#[tokio::test]
async fn linked_pull_request_keeps_assignee_with_closed_pr() {
    let source = FakeSource::new().with_timeline(
        42,
        vec![TimelineEvent::referenced_by_pull_request(
            100,
            "alice",
            IssueState::Closed,
            days_ago(2),
        )],
    );
    let mut record = issue(42, &["alice"]);

    assert!(check(&LinkedPullRequest, &mut record, &source).await);
}

#[tokio::test]
async fn linked_pull_request_keeps_record_if_someone_is_left() {
    let source = FakeSource::new().with_timeline(
        42,
        vec![TimelineEvent::referenced_by_pull_request(
            100,
            "alice",
            IssueState::Open,
            days_ago(2),
        )],
    );
    let mut record = issue(42, &["alice", "bob"]);

    assert!(check(&LinkedPullRequest, &mut record, &source).await);
    assert_eq!(record.active_logins(), vec!["bob"]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Standard pipeline
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn default_criteria() {
    let criteria = Criteria::default();

    assert_eq!(criteria.days_since, 14);
    assert_eq!(criteria.exclude_labels, vec!["no-automation"]);
    assert!(criteria.exclude_assignees.is_empty());
}

#[test]
fn standard_pipeline_runs_local_predicates_first() {
    assert_eq!(
        Criteria::default().pipeline().names(),
        vec![
            "exclude_pull_requests",
            "exclude_labels",
            "exclude_assignees",
            "stale_assignment",
            "linked_pull_request",
        ]
    );
}

#[tokio::test]
async fn timeline_is_fetched_once_for_both_timeline_predicates() {
    let source =
        FakeSource::new().with_timeline(42, vec![TimelineEvent::assigned("alice", days_ago(20))]);
    let ctx = RunContext::new(&source, fixed_now());
    let mut record = issue(42, &["alice"]);

    let verdict = Criteria::default().pipeline().evaluate(&mut record, &ctx).await.unwrap();

    assert_eq!(verdict, Verdict::Pass);
    assert_eq!(source.timeline_calls(), vec![42]);
}

#[tokio::test]
async fn excluded_label_costs_no_timeline_fetch() {
    let source =
        FakeSource::new().with_timeline(42, vec![TimelineEvent::assigned("alice", days_ago(20))]);
    let ctx = RunContext::new(&source, fixed_now());
    let mut record = issue(42, &["alice"]).with_labels(["no-automation"]);

    let verdict = Criteria::default().pipeline().evaluate(&mut record, &ctx).await.unwrap();

    assert_eq!(verdict, Verdict::Rejected("exclude_labels"));
    assert_eq!(ctx.timelines().fetch_count(), 0);
}
