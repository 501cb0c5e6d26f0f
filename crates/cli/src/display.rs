// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run summary rendering.

use ua_core::{IssueQuery, RunSummary};

use crate::error::Result;

/// Human-readable summary, one fact per line.
pub fn text(summary: &RunSummary, query: &IssueQuery) -> String {
    let mut out = format!(
        "{}/{}: {} fetched, {} stale, {} errored\n",
        query.owner,
        query.repo,
        summary.fetched,
        summary.survivors.len(),
        summary.errored.len()
    );

    if !summary.rejected.is_empty() {
        out.push_str("Skipped:\n");
        for (predicate, count) in &summary.rejected {
            out.push_str(&format!("  {}: {}\n", predicate, count));
        }
    }

    let verb = if summary.dispatch.dry_run {
        "would unassign"
    } else {
        "unassigned"
    };
    for actioned in &summary.dispatch.actioned {
        let mentions: Vec<String> = actioned
            .unassigned
            .iter()
            .map(|login| format!("@{}", login))
            .collect();
        out.push_str(&format!("#{}: {} {}", actioned.number, verb, mentions.join(", ")));
        if actioned.commented {
            out.push_str(" (commented)");
        }
        out.push('\n');
    }

    for failure in &summary.dispatch.failures {
        out.push_str(&format!(
            "#{}: {} failed: {}\n",
            failure.number, failure.action, failure.reason
        ));
    }

    for errored in &summary.errored {
        out.push_str(&format!("#{}: skipped: {}\n", errored.number, errored.reason));
    }

    out
}

/// Pretty-printed JSON summary.
pub fn json(summary: &RunSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
