// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! The variable name constants are generated by `build.rs` and live in the
//! [`vars`] submodule.

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Returns the value of `GITHUB_TOKEN` if set and non-empty.
pub fn github_token() -> Option<String> {
    non_empty(vars::GITHUB_TOKEN)
}

/// Returns the value of `GITHUB_API_URL` if set and non-empty.
pub fn github_api_url() -> Option<String> {
    non_empty(vars::GITHUB_API_URL)
}

/// Returns the value of `RUST_LOG` if set and non-empty.
pub fn rust_log() -> Option<String> {
    non_empty(vars::RUST_LOG)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
