use super::load_config;
use gitreleases::core::GitReleasesResult;
use std::path::PathBuf;

pub fn show(config: Option<PathBuf>) -> GitReleasesResult<()> {
    let config = load_config(config.as_deref())?;
    print!("{}", config.to_yaml()?);
    Ok(())
}
