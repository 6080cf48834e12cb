//! GitHub integration
//!
//! This module provides the release fetcher: a thin client over the GitHub
//! REST API that returns release feeds (or a single release by tag) and
//! classifies failures into `FetchError`.

pub mod client;

pub use client::{GitHubClient, GITHUB_ACCEPT};
