use super::load_config;
use gitreleases::core::GitReleasesResult;
use gitreleases::di::ServiceContainer;
use gitreleases::release::{Query, ResolvedTarget};
use std::path::PathBuf;

pub struct AssetsOptions {
    pub repository: String,
    pub archives: bool,
    pub soft_empty: bool,
    pub json: bool,
    pub config: Option<PathBuf>,
}

pub async fn run(options: AssetsOptions) -> GitReleasesResult<()> {
    let query = Query::parse(&options.repository)?;

    let mut config = load_config(options.config.as_deref())?;
    config.include_source_archives |= options.archives;
    config.soft_empty |= options.soft_empty;

    let container = ServiceContainer::from_config(config)?;
    let targets = container.engine().lookup(&query).await?;

    print!("{}", render(&targets, options.json)?);
    Ok(())
}

/// One label per line, or a JSON array of `{label, path}`
pub fn render(targets: &[ResolvedTarget], json: bool) -> GitReleasesResult<String> {
    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(targets)?));
    }

    let mut out = String::new();
    for target in targets {
        out.push_str(&target.label);
        out.push('\n');
    }
    Ok(out)
}
