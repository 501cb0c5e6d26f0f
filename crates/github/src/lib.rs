// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ua-github: GitHub REST adapter for ua-core.
//!
//! [`GithubClient`] implements [`ua_core::IssueSource`] and
//! [`ua_core::IssueMutator`] on top of the GitHub REST API, following
//! `Link: rel="next"` pagination transparently.

mod client;
mod pagination;

pub use client::{GithubClient, GithubConfig, API_VERSION, DEFAULT_API_URL};
pub use pagination::next_link;
