use thiserror::Error;

pub type GitReleasesResult<T> = Result<T, GitReleasesError>;

/// Failures of the single releases request.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The API answered with a non-success status (code, status text).
    #[error("HTTP {0}: {1}")]
    HttpStatus(u16, String),

    /// The API answered with an empty release list.
    #[error("No release found")]
    NoReleases,

    /// Network unreachable or a body that is not a release list.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl FetchError {
    /// Status code of an `HttpStatus` failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::HttpStatus(code, _) => Some(*code),
            _ => None,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// None of the scanned releases carries an asset.
    #[error("No asset found")]
    NoQualifyingRelease,

    /// The selected release has an empty asset list.
    #[error("No asset found")]
    NoAssets,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RedirectError {
    #[error("Invalid redirect path: {0}")]
    InvalidPath(String),

    #[error("Release {tag} not found")]
    ReleaseNotFound { tag: String },

    #[error("Asset {asset} not found")]
    AssetNotFound { asset: String },
}

#[derive(Error, Debug)]
pub enum GitReleasesError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Redirect(#[from] RedirectError),

    #[error("{0}")]
    InvalidQuery(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for GitReleasesError {
    fn from(err: reqwest::Error) -> Self {
        GitReleasesError::Fetch(FetchError::Transport(err))
    }
}
