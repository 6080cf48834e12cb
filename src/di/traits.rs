//! Trait definitions for dependency injection

use crate::core::GitReleasesResult;
use async_trait::async_trait;
use gitreleases_core::{Release, ResolveOptions};

/// Trait for configuration access
///
/// Provides read-only access to application configuration.
/// Implementations should be thread-safe (Send + Sync).
pub trait ConfigProvider: Send + Sync {
    /// Base URL of the releases API, without a trailing slash
    fn api_url(&self) -> &str;

    /// User-Agent header value
    fn user_agent(&self) -> &str;

    /// Options handed to the asset resolver
    fn resolve_options(&self) -> ResolveOptions;
}

/// Trait for release feed access
///
/// Each call performs exactly one request; implementations never retry.
#[async_trait]
pub trait ReleaseProvider: Send + Sync {
    /// Get the first page of releases, freshest first
    ///
    /// An empty feed is reported as `FetchError::NoReleases`.
    async fn fetch_releases(&self, owner: &str, repo: &str) -> GitReleasesResult<Vec<Release>>;

    /// Get a single release by tag name
    async fn fetch_release_by_tag(
        &self,
        owner: &str,
        repo: &str,
        tag: &str,
    ) -> GitReleasesResult<Release>;
}
