// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `Link` header pagination.
//!
//! GitHub paginates list endpoints with a header of the form:
//!
//! ```text
//! <https://api.github.com/...&page=2>; rel="next", <https://api.github.com/...&page=5>; rel="last"
//! ```

/// Returns the `rel="next"` URL of a `Link` header, if present.
pub fn next_link(header: &str) -> Option<String> {
    header.split(',').find_map(|entry| {
        let mut parts = entry.split(';');
        let target = parts.next()?.trim();
        let url = target.strip_prefix('<')?.strip_suffix('>')?;
        let is_next = parts.any(|param| {
            let param = param.trim();
            param == "rel=\"next\"" || param == "rel=next"
        });
        is_next.then(|| url.to_string())
    })
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
