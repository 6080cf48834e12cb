//! gitreleases: resolve the latest GitHub release assets of a repository
//!
//! This crate wires the release resolution engine from `gitreleases-core`
//! to the GitHub API: configuration, the release fetcher, the fetch-then-
//! resolve pipeline and the redirect lookup used by the command line tool.

pub use gitreleases_core::{
    format_error_with_help, user_message, ErrorHelp, GitReleasesError, GitReleasesResult,
};

/// Core module re-exported from gitreleases-core.
pub mod core {
    pub use gitreleases_core::core::*;
    pub use gitreleases_core::{format_error_with_help, user_message, ErrorHelp};
}

/// Release model and resolver re-exported from gitreleases-core.
pub mod release {
    pub use gitreleases_core::release::*;
}

/// Configuration management.
pub mod config;

/// GitHub integration (release fetcher).
pub mod github;

/// Dependency injection infrastructure.
pub mod di;

/// Fetch-then-resolve pipeline.
pub mod engine;

/// Redirect path evaluation.
pub mod redirect;
