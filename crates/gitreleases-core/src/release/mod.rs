//! Release data model
//!
//! Mirrors the subset of the GitHub releases payload the engine reads, plus
//! the derived values it produces.

mod query;
mod redirect_path;
mod resolver;

pub use query::Query;
pub use redirect_path::RedirectPath;
pub use resolver::{AssetResolver, EmptyPolicy, ResolveOptions};

use serde::{Deserialize, Deserializer, Serialize};

/// Number of releases, freshest first, that are ever considered.
pub const MAX_SCANNED_RELEASES: usize = 5;

/// Release segment used in every derived path.
pub const LATEST_TAG: &str = "latest";

/// Host prefixed to a path to build the display label.
pub const REDIRECT_HOST: &str = "gitreleases.dev";

/// GitHub release asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_download_url: Option<String>,
    #[serde(default)]
    pub size: u64,
}

impl Asset {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            browser_download_url: None,
            size: 0,
        }
    }
}

/// GitHub release information
///
/// A missing or `null` `assets` field reads as an empty asset list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tarball_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipball_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub assets: Vec<Asset>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Asset>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Asset>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Release {
    pub fn with_assets<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            assets: names.into_iter().map(Asset::new).collect(),
            ..Self::default()
        }
    }

    /// Whether the release qualifies for resolution.
    pub fn has_assets(&self) -> bool {
        !self.assets.is_empty()
    }

    pub fn asset(&self, name: &str) -> Option<&Asset> {
        self.assets.iter().find(|asset| asset.name == name)
    }

    /// Whether a redirect for `name` can be served from this release.
    ///
    /// Source archives exist for every release.
    pub fn provides(&self, name: &str) -> bool {
        SourceArchive::from_name(name).is_some() || self.asset(name).is_some()
    }

    /// Download URL behind the asset (or source archive) called `name`.
    pub fn download_url(&self, name: &str) -> Option<&str> {
        match SourceArchive::from_name(name) {
            Some(SourceArchive::Zip) => self.zipball_url.as_deref(),
            Some(SourceArchive::TarGz) => self.tarball_url.as_deref(),
            None => self
                .asset(name)
                .and_then(|asset| asset.browser_download_url.as_deref()),
        }
    }
}

/// Whole-repository source snapshot exposed next to the release assets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceArchive {
    Zip,
    TarGz,
}

impl SourceArchive {
    pub const ALL: [SourceArchive; 2] = [SourceArchive::Zip, SourceArchive::TarGz];

    pub fn name(self) -> &'static str {
        match self {
            SourceArchive::Zip => "ziparchive",
            SourceArchive::TarGz => "targzarchive",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|archive| archive.name() == name)
    }
}

impl std::fmt::Display for SourceArchive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Redirect path for an asset of the latest release.
pub fn redirect_path(organization: &str, repository: &str, asset_name: &str) -> String {
    format!(
        "/gh/{}/{}/{}/{}",
        organization, repository, LATEST_TAG, asset_name
    )
}

/// A derived `(label, path)` pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedTarget {
    pub label: String,
    pub path: String,
}

impl ResolvedTarget {
    pub fn new(organization: &str, repository: &str, asset_name: &str) -> Self {
        let path = redirect_path(organization, repository, asset_name);
        Self {
            label: format!("{}{}", REDIRECT_HOST, path),
            path,
        }
    }
}
