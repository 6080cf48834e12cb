use super::LATEST_TAG;
use crate::core::RedirectError;
use std::fmt;

const PATH_PREFIX: &str = "/gh/";

/// Parsed `/gh/{organization}/{repository}/{tag}/{asset}` path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectPath {
    pub organization: String,
    pub repository: String,
    pub tag: String,
    pub asset: String,
}

impl RedirectPath {
    /// Parse a redirect path, optionally given as a full URL
    /// (`https://gitreleases.dev/gh/...`).
    pub fn parse(input: &str) -> Result<Self, RedirectError> {
        let trimmed = input.trim();
        let path = match trimmed.split_once("://") {
            Some((_, rest)) => rest.find('/').map(|idx| &rest[idx..]).unwrap_or(""),
            None => trimmed,
        };

        let invalid = || RedirectError::InvalidPath(trimmed.to_string());
        let rest = path.strip_prefix(PATH_PREFIX).ok_or_else(invalid)?;

        let segments: Vec<&str> = rest.split('/').collect();
        match segments.as_slice() {
            [organization, repository, tag, asset]
                if segments.iter().all(|segment| !segment.is_empty()) =>
            {
                Ok(Self {
                    organization: organization.to_string(),
                    repository: repository.to_string(),
                    tag: tag.to_string(),
                    asset: asset.to_string(),
                })
            }
            _ => Err(invalid()),
        }
    }

    pub fn is_latest(&self) -> bool {
        self.tag == LATEST_TAG
    }
}

impl fmt::Display for RedirectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}/{}/{}/{}",
            PATH_PREFIX, self.organization, self.repository, self.tag, self.asset
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::release::redirect_path;

    #[test]
    fn test_parse_latest_path() {
        let path = RedirectPath::parse("/gh/rokka-io/rokka-go/latest/tool_linux_amd64").unwrap();
        assert_eq!(path.organization, "rokka-io");
        assert_eq!(path.repository, "rokka-go");
        assert_eq!(path.asset, "tool_linux_amd64");
        assert!(path.is_latest());
    }

    #[test]
    fn test_parse_full_url_with_tag() {
        let path = RedirectPath::parse("https://gitreleases.dev/gh/o/r/v1.2.0/tool.zip").unwrap();
        assert_eq!(path.tag, "v1.2.0");
        assert!(!path.is_latest());
    }

    #[test]
    fn test_display_round_trips_derived_path() {
        let derived = redirect_path("o", "r", "targzarchive");
        let parsed = RedirectPath::parse(&derived).unwrap();
        assert_eq!(parsed.to_string(), derived);
    }

    #[test]
    fn test_parse_rejects_malformed_paths() {
        for input in [
            "",
            "/gh/o/r/latest",
            "/gh/o/r/latest/a/b",
            "/gh/o//latest/a",
            "/gl/o/r/latest/a",
            "https://gitreleases.dev",
        ] {
            assert!(
                matches!(RedirectPath::parse(input), Err(RedirectError::InvalidPath(_))),
                "accepted {:?}",
                input
            );
        }
    }
}
