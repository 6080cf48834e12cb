use crate::core::{GitReleasesError, GitReleasesResult};
use regex::Regex;
use std::fmt;
use std::str::FromStr;

const REPOSITORY_PATTERN: &str = r"(?i)^((?:https?://)?github\.com/)?([^/]+)/([^/]+)";

const INVALID_URL_MESSAGE: &str = "URL incorrect. Example: https://github.com/rokka-io/rokka-go";

/// Organization and repository to resolve
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query {
    pub organization: String,
    pub repository: String,
}

impl Query {
    /// Create a query; both parts must be non-empty.
    pub fn new(organization: impl Into<String>, repository: impl Into<String>) -> GitReleasesResult<Self> {
        let organization = organization.into();
        let repository = repository.into();
        if organization.is_empty() || repository.is_empty() {
            return Err(GitReleasesError::InvalidQuery(
                "Organization and repository must not be empty".to_string(),
            ));
        }
        Ok(Self {
            organization,
            repository,
        })
    }

    /// Parse a pasted repository URL (`https://github.com/org/repo/...`) or
    /// a bare `org/repo`.
    ///
    /// Anything after the repository segment is ignored.
    pub fn parse(input: &str) -> GitReleasesResult<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(GitReleasesError::InvalidQuery(INVALID_URL_MESSAGE.to_string()));
        }

        let re = Regex::new(REPOSITORY_PATTERN)
            .map_err(|e| GitReleasesError::InvalidQuery(format!("Invalid regex: {}", e)))?;
        let captures = re
            .captures(input)
            .ok_or_else(|| GitReleasesError::InvalidQuery(INVALID_URL_MESSAGE.to_string()))?;

        Self::new(&captures[2], &captures[3])
    }
}

impl FromStr for Query {
    type Err = GitReleasesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.organization, self.repository)
    }
}
