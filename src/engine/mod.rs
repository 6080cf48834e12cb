//! Release resolution pipeline
//!
//! Fetch, then resolve. The only suspension point is the releases request;
//! resolution runs over the already-materialized feed. Nothing is kept
//! between queries, so one engine can serve overlapping queries.

use crate::core::{user_message, GitReleasesResult};
use crate::di::ReleaseProvider;
use gitreleases_core::{AssetResolver, Query, ResolveOptions, ResolvedTarget};
use std::sync::Arc;

/// Per-query lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryState {
    Idle,
    Fetching,
    Resolved(Vec<ResolvedTarget>),
    /// Failure rendered as the message shown to the user
    Failed(String),
}

impl QueryState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, QueryState::Resolved(_) | QueryState::Failed(_))
    }
}

#[derive(Clone)]
pub struct ReleaseEngine {
    releases: Arc<dyn ReleaseProvider>,
    resolver: AssetResolver,
}

impl ReleaseEngine {
    pub fn new(releases: Arc<dyn ReleaseProvider>, options: ResolveOptions) -> Self {
        Self {
            releases,
            resolver: AssetResolver::new(options),
        }
    }

    pub fn options(&self) -> ResolveOptions {
        self.resolver.options()
    }

    /// Resolve the redirect targets of `query`
    #[tracing::instrument(skip_all, fields(query = %query), err(Debug))]
    pub async fn lookup(&self, query: &Query) -> GitReleasesResult<Vec<ResolvedTarget>> {
        tracing::debug!("fetching releases");
        let releases = self
            .releases
            .fetch_releases(&query.organization, &query.repository)
            .await?;

        let targets = self
            .resolver
            .resolve(&releases, &query.organization, &query.repository)?;

        tracing::info!(targets = targets.len(), "resolved release assets");
        Ok(targets)
    }

    /// Run `query` to a terminal state, reporting each transition to
    /// `observer` (`Fetching`, then `Resolved` or `Failed`).
    pub async fn run_with<F>(&self, query: &Query, mut observer: F) -> QueryState
    where
        F: FnMut(&QueryState),
    {
        observer(&QueryState::Fetching);
        let state = match self.lookup(query).await {
            Ok(targets) => QueryState::Resolved(targets),
            Err(e) => QueryState::Failed(user_message(&e)),
        };
        observer(&state);
        state
    }

    pub async fn run(&self, query: &Query) -> QueryState {
        self.run_with(query, |_| {}).await
    }
}
