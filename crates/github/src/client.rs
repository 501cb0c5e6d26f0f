// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! GitHub REST client.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, LINK};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use ua_core::{
    BoxFuture, IssueMutator, IssueQuery, IssueSource, Record, SourceError, SourceResult,
    TimelineEvent,
};

use crate::pagination::next_link;

/// Default REST endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// REST API version pinned on every request.
pub const API_VERSION: &str = "2022-11-28";

const USER_AGENT: &str = concat!("auto-unassign/", env!("CARGO_PKG_VERSION"));

/// Connection settings for [`GithubClient`].
#[derive(Debug, Clone)]
pub struct GithubConfig {
    /// Base URL of the REST API, without a trailing slash.
    pub api_url: String,
    /// Token sent as `Authorization: Bearer`.
    pub token: String,
    /// Owner of the repository timelines and mutations target.
    pub owner: String,
    /// Repository timelines and mutations target.
    pub repo: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl GithubConfig {
    pub fn new(token: impl Into<String>, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        GithubConfig {
            api_url: DEFAULT_API_URL.to_string(),
            token: token.into(),
            owner: owner.into(),
            repo: repo.into(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }
}

/// GitHub implementation of the record source and mutation API.
pub struct GithubClient {
    http: Client,
    config: GithubConfig,
}

/// Error body returned by the REST API.
#[derive(Deserialize)]
struct ApiError {
    message: String,
}

impl GithubClient {
    pub fn new(config: GithubConfig) -> SourceResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static(API_VERSION));

        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| SourceError::Unavailable(format!("failed to build http client: {}", e)))?;

        Ok(GithubClient { http, config })
    }

    fn repo_url(&self, owner: &str, repo: &str) -> String {
        format!("{}/repos/{}/{}", self.config.api_url, owner, repo)
    }

    /// The query must name the configured repository; timelines and
    /// mutations always target it.
    fn check_target(&self, query: &IssueQuery) -> SourceResult<()> {
        let same = query.owner.eq_ignore_ascii_case(&self.config.owner)
            && query.repo.eq_ignore_ascii_case(&self.config.repo);
        if same {
            return Ok(());
        }
        Err(SourceError::InvalidQuery(format!(
            "client is configured for {}/{} but the query targets {}/{}",
            self.config.owner, self.config.repo, query.owner, query.repo
        )))
    }

    fn issue_url(&self, number: u64) -> String {
        format!(
            "{}/issues/{}",
            self.repo_url(&self.config.owner, &self.config.repo),
            number
        )
    }

    fn request(&self, method: reqwest::Method, url: &str) -> RequestBuilder {
        self.http
            .request(method, url)
            .bearer_auth(&self.config.token)
    }

    async fn send(&self, request: RequestBuilder) -> SourceResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| SourceError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(status_error(status, &body))
    }

    /// GETs `url` and every following page, concatenating the items.
    async fn get_all<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> SourceResult<Vec<T>> {
        let mut items = Vec::new();
        let mut request = self.request(reqwest::Method::GET, url).query(params);
        let mut page = 1;

        loop {
            let response = self.send(request).await?;
            let next = response
                .headers()
                .get(LINK)
                .and_then(|v| v.to_str().ok())
                .and_then(next_link);

            let batch: Vec<T> = response
                .json()
                .await
                .map_err(|e| SourceError::Decode(e.to_string()))?;
            debug!(url, page, count = batch.len(), "fetched page");
            items.extend(batch);

            match next {
                Some(next_url) => {
                    request = self.request(reqwest::Method::GET, &next_url);
                    page += 1;
                }
                None => break,
            }
        }

        Ok(items)
    }
}

/// Maps a non-success response to a [`SourceError`].
///
/// 401 and 403 are credential failures, except a 403 caused by rate limiting.
fn status_error(status: StatusCode, body: &str) -> SourceError {
    let message = serde_json::from_str::<ApiError>(body)
        .map(|e| e.message)
        .unwrap_or_else(|_| body.trim().to_string());

    let rate_limited = message.to_lowercase().contains("rate limit");
    match status {
        StatusCode::UNAUTHORIZED => SourceError::Unauthorized(message),
        StatusCode::FORBIDDEN if !rate_limited => SourceError::Unauthorized(message),
        _ => SourceError::Status {
            status: status.as_u16(),
            message,
        },
    }
}

impl IssueSource for GithubClient {
    fn list_issues<'a>(&'a self, query: &'a IssueQuery) -> BoxFuture<'a, SourceResult<Vec<Record>>> {
        Box::pin(async move {
            self.check_target(query)?;
            let url = format!("{}/issues", self.repo_url(&query.owner, &query.repo));
            debug!(owner = %query.owner, repo = %query.repo, "listing issues");
            self.get_all(&url, &query.params()).await
        })
    }

    fn list_timeline(&self, number: u64) -> BoxFuture<'_, SourceResult<Vec<TimelineEvent>>> {
        Box::pin(async move {
            let url = format!("{}/timeline", self.issue_url(number));
            let params = [("per_page", IssueQuery::MAX_PER_PAGE.to_string())];
            self.get_all(&url, &params).await
        })
    }
}

impl IssueMutator for GithubClient {
    fn remove_assignees<'a>(
        &'a self,
        number: u64,
        logins: &'a [String],
    ) -> BoxFuture<'a, SourceResult<()>> {
        Box::pin(async move {
            let url = format!("{}/assignees", self.issue_url(number));
            let request = self
                .request(reqwest::Method::DELETE, &url)
                .json(&serde_json::json!({ "assignees": logins }));
            self.send(request).await?;
            Ok(())
        })
    }

    fn add_comment<'a>(&'a self, number: u64, body: &'a str) -> BoxFuture<'a, SourceResult<()>> {
        Box::pin(async move {
            let url = format!("{}/comments", self.issue_url(number));
            let request = self
                .request(reqwest::Method::POST, &url)
                .json(&serde_json::json!({ "body": body }));
            self.send(request).await?;
            Ok(())
        })
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
