//! Mock implementations of service traits for testing

use super::traits::{ConfigProvider, ReleaseProvider};
use crate::core::{FetchError, GitReleasesResult};
use async_trait::async_trait;
use gitreleases_core::{EmptyPolicy, Release, ResolveOptions};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock configuration provider for testing
///
/// # Example
///
/// ```
/// use gitreleases::di::mocks::MockConfigProvider;
/// use gitreleases::di::ConfigProvider;
///
/// let mut config = MockConfigProvider::default();
/// config.include_source_archives = true;
///
/// assert!(config.resolve_options().include_source_archives);
/// ```
#[derive(Clone)]
pub struct MockConfigProvider {
    pub api_url: String,
    pub user_agent: String,
    pub include_source_archives: bool,
    pub soft_empty: bool,
}

impl Default for MockConfigProvider {
    fn default() -> Self {
        Self {
            api_url: "http://localhost".to_string(),
            user_agent: "gitreleases-test".to_string(),
            include_source_archives: false,
            soft_empty: false,
        }
    }
}

impl ConfigProvider for MockConfigProvider {
    fn api_url(&self) -> &str {
        &self.api_url
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            include_source_archives: self.include_source_archives,
            empty_policy: if self.soft_empty {
                EmptyPolicy::SoftEmpty
            } else {
                EmptyPolicy::Strict
            },
        }
    }
}

/// Mock release provider for testing
///
/// Serves release feeds from memory. Unknown repositories answer like the
/// API does for them: HTTP 404. Every call is counted.
///
/// # Example
///
/// ```
/// use gitreleases::di::mocks::MockReleaseProvider;
/// use gitreleases_core::Release;
///
/// let provider = MockReleaseProvider::new();
/// provider.add_releases("rokka-io", "rokka-go", vec![Release::with_assets(["tool"])]);
/// ```
#[derive(Clone, Default)]
pub struct MockReleaseProvider {
    feeds: Arc<Mutex<HashMap<String, Vec<Release>>>>,
    statuses: Arc<Mutex<HashMap<String, (u16, String)>>>,
    calls: Arc<Mutex<usize>>,
}

impl MockReleaseProvider {
    /// Create a new mock release provider
    pub fn new() -> Self {
        Self::default()
    }

    fn key(owner: &str, repo: &str) -> String {
        format!("{}/{}", owner, repo)
    }

    /// Serve `releases` for `owner/repo`
    pub fn add_releases(&self, owner: &str, repo: &str, releases: Vec<Release>) {
        self.feeds
            .lock()
            .unwrap()
            .insert(Self::key(owner, repo), releases);
    }

    /// Answer every request for `owner/repo` with an HTTP status
    pub fn fail_with_status(&self, owner: &str, repo: &str, status: u16, status_text: &str) {
        self.statuses
            .lock()
            .unwrap()
            .insert(Self::key(owner, repo), (status, status_text.to_string()));
    }

    /// Number of requests served so far
    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    fn feed(&self, owner: &str, repo: &str) -> GitReleasesResult<Vec<Release>> {
        *self.calls.lock().unwrap() += 1;

        let key = Self::key(owner, repo);
        if let Some((status, text)) = self.statuses.lock().unwrap().get(&key) {
            return Err(FetchError::HttpStatus(*status, text.clone()).into());
        }
        self.feeds
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .ok_or_else(|| FetchError::HttpStatus(404, "Not Found".to_string()).into())
    }
}

#[async_trait]
impl ReleaseProvider for MockReleaseProvider {
    async fn fetch_releases(&self, owner: &str, repo: &str) -> GitReleasesResult<Vec<Release>> {
        let releases = self.feed(owner, repo)?;
        if releases.is_empty() {
            return Err(FetchError::NoReleases.into());
        }
        Ok(releases)
    }

    async fn fetch_release_by_tag(
        &self,
        owner: &str,
        repo: &str,
        tag: &str,
    ) -> GitReleasesResult<Release> {
        self.feed(owner, repo)?
            .into_iter()
            .find(|release| release.tag_name.as_deref() == Some(tag))
            .ok_or_else(|| FetchError::HttpStatus(404, "Not Found".to_string()).into())
    }
}
