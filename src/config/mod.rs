use crate::core::{GitReleasesError, GitReleasesResult};
use crate::di::ConfigProvider;
use gitreleases_core::{EmptyPolicy, ResolveOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding `api_url`
pub const API_URL_ENV: &str = "GITRELEASES_API_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the GitHub REST API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// User-Agent sent with every request (required by the GitHub API)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Append `ziparchive` and `targzarchive` to every resolved asset list
    #[serde(default)]
    pub include_source_archives: bool,

    /// Return an empty list instead of an error when none of the scanned
    /// releases has an asset
    #[serde(default)]
    pub soft_empty: bool,
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_user_agent() -> String {
    "gitreleases".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            user_agent: default_user_agent(),
            include_source_archives: false,
            soft_empty: false,
        }
    }
}

impl Config {
    /// Default config file location
    ///
    /// - Windows: %APPDATA%\gitreleases\config.yaml
    /// - Linux: ~/.config/gitreleases/config.yaml
    /// - macOS: ~/Library/Application Support/gitreleases/config.yaml
    pub fn default_path() -> GitReleasesResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("gitreleases").join("config.yaml"))
            .ok_or_else(|| {
                GitReleasesError::Config("Could not determine config directory".to_string())
            })
    }

    /// Load config from the default location.
    ///
    /// A missing file yields the defaults; nothing is written to disk.
    pub fn load() -> GitReleasesResult<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load config from `path`, then apply environment overrides
    pub fn load_from(path: &Path) -> GitReleasesResult<Self> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path)?;
            if content.trim().is_empty() {
                Self::default()
            } else {
                serde_yaml::from_str(&content).map_err(|e| {
                    GitReleasesError::Config(format!(
                        "Failed to parse {}: {}",
                        path.display(),
                        e
                    ))
                })?
            }
        } else {
            Self::default()
        };

        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(api_url) = std::env::var(API_URL_ENV) {
            if !api_url.is_empty() {
                self.api_url = api_url;
            }
        }
    }

    fn validate(&self) -> GitReleasesResult<()> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(GitReleasesError::Config(format!(
                "api_url must be an http(s) URL, got {:?}",
                self.api_url
            )));
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> GitReleasesResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl ConfigProvider for Config {
    fn api_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
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
