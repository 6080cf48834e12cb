use super::load_config;
use gitreleases::core::GitReleasesResult;
use gitreleases::di::ServiceContainer;
use gitreleases::release::RedirectPath;
use std::path::PathBuf;

pub async fn run(path: String, config: Option<PathBuf>) -> GitReleasesResult<()> {
    let path = RedirectPath::parse(&path)?;
    let container = ServiceContainer::from_config(load_config(config.as_deref())?)?;

    let url = container.redirects().resolve(&path).await?;
    println!("{}", url);
    Ok(())
}
