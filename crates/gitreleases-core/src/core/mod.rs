pub mod error;
pub mod error_help;

pub use error::{FetchError, GitReleasesError, GitReleasesResult, RedirectError, ResolveError};
