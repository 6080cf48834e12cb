//! GitHub API client implementation

use crate::core::{FetchError, GitReleasesError, GitReleasesResult};
use crate::di::traits::{ConfigProvider, ReleaseProvider};
use async_trait::async_trait;
use gitreleases_core::Release;
use reqwest::{header, Client as HttpClient};

/// Media type requested from the releases API
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Points below which the remaining rate limit is logged as a warning
pub const RATE_LIMIT_WARN_THRESHOLD: u64 = 50;

/// Rate-limit state reported by a releases API response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: Option<u64>,
    pub remaining: u64,
    /// Unix timestamp (seconds) at which the window resets
    pub reset: Option<u64>,
}

impl RateLimit {
    /// Read the `x-ratelimit-*` headers; `None` without `x-ratelimit-remaining`.
    pub fn from_headers(headers: &header::HeaderMap) -> Option<Self> {
        let number = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok())
        };

        Some(Self {
            limit: number("x-ratelimit-limit"),
            remaining: number("x-ratelimit-remaining")?,
            reset: number("x-ratelimit-reset"),
        })
    }

    pub fn is_low(&self) -> bool {
        self.remaining < RATE_LIMIT_WARN_THRESHOLD
    }
}

/// GitHub API client
///
/// One request per call, no retries, and no timeout beyond the transport
/// default.
#[derive(Clone, Debug)]
pub struct GitHubClient {
    http_client: HttpClient,
    api_url: String,
}

impl GitHubClient {
    /// Create a new GitHub client
    pub fn new(config: &dyn ConfigProvider) -> GitReleasesResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(config.user_agent()).map_err(|e| {
                GitReleasesError::Config(format!("Invalid user_agent: {}", e))
            })?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static(GITHUB_ACCEPT),
        );

        let http_client = HttpClient::builder()
            .default_headers(headers)
            .build()
            .map_err(FetchError::Transport)?;

        Ok(Self {
            http_client,
            api_url: config.api_url().trim_end_matches('/').to_string(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Get the first page of releases for a repository
    ///
    /// `owner` and `repo` are interpolated into the URL as given.
    #[tracing::instrument(skip(self), err(Debug))]
    pub async fn get_releases(&self, owner: &str, repo: &str) -> GitReleasesResult<Vec<Release>> {
        let url = format!("{}/repos/{}/{}/releases", self.api_url, owner, repo);
        let releases: Vec<Release> = self.api_get(&url).await?;

        if releases.is_empty() {
            return Err(FetchError::NoReleases.into());
        }

        tracing::debug!(count = releases.len(), "fetched releases");
        Ok(releases)
    }

    /// Get a release by its tag name
    #[tracing::instrument(skip(self), err(Debug))]
    pub async fn get_release_by_tag(
        &self,
        owner: &str,
        repo: &str,
        tag: &str,
    ) -> GitReleasesResult<Release> {
        let url = format!(
            "{}/repos/{}/{}/releases/tags/{}",
            self.api_url, owner, repo, tag
        );
        self.api_get(&url).await
    }

    /// Make an API GET request and parse the JSON response
    async fn api_get<T: serde::de::DeserializeOwned>(&self, url: &str) -> GitReleasesResult<T> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        if let Some(rate) = RateLimit::from_headers(response.headers()) {
            if rate.is_low() {
                tracing::warn!(
                    limit = rate.limit,
                    remaining = rate.remaining,
                    reset = rate.reset,
                    "releases API rate limit almost exhausted"
                );
            } else {
                tracing::debug!(
                    limit = rate.limit,
                    remaining = rate.remaining,
                    reset = rate.reset,
                    "releases API rate limit"
                );
            }
        }

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "releases API returned an error");
            return Err(FetchError::HttpStatus(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default().to_string(),
            )
            .into());
        }

        Ok(response.json().await.map_err(FetchError::Transport)?)
    }
}

#[async_trait]
impl ReleaseProvider for GitHubClient {
    async fn fetch_releases(&self, owner: &str, repo: &str) -> GitReleasesResult<Vec<Release>> {
        self.get_releases(owner, repo).await
    }

    async fn fetch_release_by_tag(
        &self,
        owner: &str,
        repo: &str,
        tag: &str,
    ) -> GitReleasesResult<Release> {
        self.get_release_by_tag(owner, repo, tag).await
    }
}
