//! Human-readable rendering of errors
//!
//! Every failure of the engine ends up as a single message string at the
//! boundary. A few HTTP statuses are rewritten into something a user can act
//! on; everything else falls back to the error's own text.

use super::error::{FetchError, GitReleasesError};

const RATE_LIMIT_SUFFIX: &str = "most likely means that you exceeded the hourly rate limit, sorry. Try constructing the URL on your own please :)";

const NOT_FOUND_MESSAGE: &str = "Repository or organization not found";

/// Extra guidance shown below an error message
pub trait ErrorHelp {
    fn help(&self) -> Option<String>;
}

impl ErrorHelp for GitReleasesError {
    fn help(&self) -> Option<String> {
        match self {
            GitReleasesError::Fetch(FetchError::HttpStatus(403, _)) => Some(
                "Unauthenticated requests are limited per hour. Redirect paths follow the pattern /gh/{organization}/{repository}/latest/{asset}"
                    .to_string(),
            ),
            GitReleasesError::Fetch(FetchError::HttpStatus(404, _)) => {
                Some("Check the spelling of the organization and repository".to_string())
            }
            GitReleasesError::Fetch(FetchError::Transport(_)) => {
                Some("Check your network connection and the configured api_url".to_string())
            }
            GitReleasesError::Resolve(_) => {
                Some("Only the 5 most recent releases are searched for assets".to_string())
            }
            GitReleasesError::Config(_) | GitReleasesError::Yaml(_) => {
                Some("Run `gitreleases config show` to inspect the effective configuration".to_string())
            }
            _ => None,
        }
    }
}

/// Message for a failed query, as shown to the user
pub fn user_message(err: &GitReleasesError) -> String {
    match err {
        GitReleasesError::Fetch(FetchError::HttpStatus(code, status_text)) => {
            http_status_message(*code, status_text)
        }
        GitReleasesError::Fetch(FetchError::Transport(e)) => with_causes(e),
        other => other.to_string(),
    }
}

/// `err` followed by each error in its source chain
fn with_causes(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

fn http_status_message(code: u16, status_text: &str) -> String {
    match code {
        403 => {
            let text = if status_text.is_empty() {
                "Forbidden"
            } else {
                status_text
            };
            format!("{} - {}", text, RATE_LIMIT_SUFFIX)
        }
        404 => NOT_FOUND_MESSAGE.to_string(),
        _ if status_text.is_empty() => format!("HTTP {}", code),
        _ => status_text.to_string(),
    }
}

/// Format an error with its help hint (if any)
pub fn format_error_with_help(err: &GitReleasesError) -> String {
    let message = format!("Error: {}", user_message(err));
    match err.help() {
        Some(help) => format!("{}\n\n  help: {}", message, help),
        None => message,
    }
}
