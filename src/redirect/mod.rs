//! Redirect lookup
//!
//! Evaluates a `/gh/{organization}/{repository}/{tag}/{asset}` path into the
//! download URL it currently points at. For `latest` this is decided at
//! lookup time, so a path handed out earlier keeps following new releases.

use crate::core::{FetchError, GitReleasesError, GitReleasesResult, RedirectError};
use crate::di::ReleaseProvider;
use gitreleases_core::release::MAX_SCANNED_RELEASES;
use gitreleases_core::{RedirectPath, Release};
use std::sync::Arc;

#[derive(Clone)]
pub struct RedirectResolver {
    releases: Arc<dyn ReleaseProvider>,
}

impl RedirectResolver {
    pub fn new(releases: Arc<dyn ReleaseProvider>) -> Self {
        Self { releases }
    }

    /// Download URL behind a redirect path
    #[tracing::instrument(skip_all, fields(path = %path), err(Debug))]
    pub async fn resolve(&self, path: &RedirectPath) -> GitReleasesResult<String> {
        let release = if path.is_latest() {
            self.latest_providing(path).await?
        } else {
            self.tagged(path).await?
        };

        let url = release
            .download_url(&path.asset)
            .ok_or_else(|| RedirectError::AssetNotFound {
                asset: path.asset.clone(),
            })?;

        tracing::info!(url, "found release URL");
        Ok(url.to_string())
    }

    /// Parse `input` and resolve it
    pub async fn resolve_str(&self, input: &str) -> GitReleasesResult<String> {
        let path = RedirectPath::parse(input)?;
        self.resolve(&path).await
    }

    async fn latest_providing(&self, path: &RedirectPath) -> GitReleasesResult<Release> {
        self.releases
            .fetch_releases(&path.organization, &path.repository)
            .await?
            .into_iter()
            .take(MAX_SCANNED_RELEASES)
            .find(|release| release.provides(&path.asset))
            .ok_or_else(|| {
                GitReleasesError::from(RedirectError::AssetNotFound {
                    asset: path.asset.clone(),
                })
            })
    }

    async fn tagged(&self, path: &RedirectPath) -> GitReleasesResult<Release> {
        self.releases
            .fetch_release_by_tag(&path.organization, &path.repository, &path.tag)
            .await
            .map_err(|e| match e {
                GitReleasesError::Fetch(FetchError::HttpStatus(404, _)) => {
                    GitReleasesError::from(RedirectError::ReleaseNotFound {
                        tag: path.tag.clone(),
                    })
                }
                other => other,
            })
    }
}
