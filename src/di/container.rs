//! Service container for dependency injection

use super::traits::{ConfigProvider, ReleaseProvider};
use crate::config::Config;
use crate::core::GitReleasesResult;
use crate::engine::ReleaseEngine;
use crate::github::GitHubClient;
use crate::redirect::RedirectResolver;
use std::path::Path;
use std::sync::Arc;

/// Service container for dependency injection
///
/// Holds the configuration and the release feed behind trait objects, so
/// tests can swap the GitHub client for an in-memory feed.
///
/// # Example (Testing)
///
/// ```
/// use gitreleases::di::{ServiceContainer, mocks::*};
/// use std::sync::Arc;
///
/// let config = Arc::new(MockConfigProvider::default());
/// let releases = Arc::new(MockReleaseProvider::new());
///
/// let container = ServiceContainer::with_providers(config, releases);
/// let engine = container.engine();
/// ```
#[derive(Clone)]
pub struct ServiceContainer {
    pub config: Arc<dyn ConfigProvider>,
    pub releases: Arc<dyn ReleaseProvider>,
}

impl ServiceContainer {
    /// Create a new service container with production implementations
    ///
    /// Loads config from the default location and builds the GitHub client.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be parsed or the HTTP
    /// client cannot be built.
    pub fn new() -> GitReleasesResult<Self> {
        Self::from_config(Config::load()?)
    }

    /// Same as [`ServiceContainer::new`] with an explicit config file
    pub fn with_config_file(path: &Path) -> GitReleasesResult<Self> {
        Self::from_config(Config::load_from(path)?)
    }

    pub fn from_config(config: Config) -> GitReleasesResult<Self> {
        let client = GitHubClient::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            releases: Arc::new(client),
        })
    }

    /// Create a service container with custom provider implementations
    ///
    /// This is primarily useful for testing.
    pub fn with_providers(
        config: Arc<dyn ConfigProvider>,
        releases: Arc<dyn ReleaseProvider>,
    ) -> Self {
        Self { config, releases }
    }

    /// Fetch-then-resolve pipeline using the configured resolve options
    pub fn engine(&self) -> ReleaseEngine {
        ReleaseEngine::new(self.releases.clone(), self.config.resolve_options())
    }

    pub fn redirects(&self) -> RedirectResolver {
        RedirectResolver::new(self.releases.clone())
    }
}
