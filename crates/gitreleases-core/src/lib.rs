//! Core utilities for gitreleases
//!
//! This crate holds the pieces of the release resolution engine that do not
//! touch the network: error types, the release data model, the query parser
//! and the asset resolver that turns a release feed into redirect paths.

pub mod core;
pub mod release;

pub use crate::core::error::{FetchError, GitReleasesError, GitReleasesResult, RedirectError, ResolveError};
pub use crate::core::error_help::{format_error_with_help, user_message, ErrorHelp};
pub use release::{
    redirect_path, Asset, AssetResolver, EmptyPolicy, Query, RedirectPath, Release,
    ResolveOptions, ResolvedTarget, SourceArchive,
};
