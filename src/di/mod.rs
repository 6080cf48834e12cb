//! Dependency injection infrastructure for gitreleases
//!
//! Trait-based seams between the engine and the network, so the pipeline can
//! be exercised against in-memory release feeds.
//!
//! # Example (Production)
//! ```no_run
//! use gitreleases::di::ServiceContainer;
//!
//! # fn example() -> gitreleases::core::GitReleasesResult<()> {
//! let container = ServiceContainer::new()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example (Testing)
//! ```
//! use gitreleases::di::{ServiceContainer, mocks::*};
//! use std::sync::Arc;
//!
//! let config = Arc::new(MockConfigProvider::default());
//! let releases = Arc::new(MockReleaseProvider::new());
//!
//! let container = ServiceContainer::with_providers(config, releases);
//! ```

pub mod container;
pub mod mocks;
pub mod traits;

// Re-export key types
pub use container::ServiceContainer;
pub use traits::{ConfigProvider, ReleaseProvider};
