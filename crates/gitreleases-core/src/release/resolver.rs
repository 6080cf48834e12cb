//! Asset resolution
//!
//! Picks the freshest release (within the first [`MAX_SCANNED_RELEASES`])
//! that carries at least one asset and derives one redirect target per
//! asset. Paths always point at the `latest` segment, never at the tag of
//! the release that was inspected.

use super::{Release, ResolvedTarget, SourceArchive, MAX_SCANNED_RELEASES};
use crate::core::ResolveError;

/// What to do when no scanned release has an asset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyPolicy {
    /// Fail with [`ResolveError::NoQualifyingRelease`].
    #[default]
    Strict,
    /// Return an empty target list.
    SoftEmpty,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Append the `ziparchive` and `targzarchive` entries.
    pub include_source_archives: bool,
    pub empty_policy: EmptyPolicy,
}

/// Turns a release feed into redirect targets
#[derive(Debug, Clone, Copy, Default)]
pub struct AssetResolver {
    options: ResolveOptions,
}

impl AssetResolver {
    pub fn new(options: ResolveOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ResolveOptions {
        self.options
    }

    /// First release with assets among the scanned window.
    pub fn select_release(releases: &[Release]) -> Option<&Release> {
        releases
            .iter()
            .take(MAX_SCANNED_RELEASES)
            .find(|release| release.has_assets())
    }

    pub fn resolve(
        &self,
        releases: &[Release],
        organization: &str,
        repository: &str,
    ) -> Result<Vec<ResolvedTarget>, ResolveError> {
        let release = match Self::select_release(releases) {
            Some(release) => release,
            None => {
                return match self.options.empty_policy {
                    EmptyPolicy::Strict => Err(ResolveError::NoQualifyingRelease),
                    EmptyPolicy::SoftEmpty => Ok(Vec::new()),
                };
            }
        };

        if release.assets.is_empty() {
            return Err(ResolveError::NoAssets);
        }

        let archives: &[SourceArchive] = if self.options.include_source_archives {
            &SourceArchive::ALL[..]
        } else {
            &[]
        };

        let targets = release
            .assets
            .iter()
            .map(|asset| asset.name.as_str())
            .chain(archives.iter().map(|archive| archive.name()))
            .map(|name| ResolvedTarget::new(organization, repository, name))
            .collect();

        Ok(targets)
    }
}
