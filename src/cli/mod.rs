pub mod assets;
pub mod config;
pub mod redirect;

use gitreleases::config::Config;
use gitreleases::core::GitReleasesResult;
use std::path::Path;

/// Load config from `--config` when given, else from the default location
pub fn load_config(path: Option<&Path>) -> GitReleasesResult<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}
