//! GitHub transport error types.

use thiserror::Error;

/// Errors returned by a [`RepositoryHost`](super::RepositoryHost).
#[derive(Debug, Error)]
pub enum HostError {
    /// The requested owner, repository or branch does not exist (HTTP 404).
    #[error("Not Found: {message}")]
    NotFound { message: String },

    /// GitHub answered with any other error status.
    #[error("GitHub API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The request never produced a GitHub response (transport, decoding, ...).
    #[error("GitHub client error: {0}")]
    Client(octocrab::Error),
}

impl HostError {
    /// Returns true if this error means "does not exist".
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns the HTTP status code, if GitHub sent one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Api { status, .. } => Some(*status),
            Self::Client(_) => None,
        }
    }
}

impl From<octocrab::Error> for HostError {
    fn from(error: octocrab::Error) -> Self {
        match &error {
            octocrab::Error::GitHub { source, .. } => {
                let status = source.status_code.as_u16();
                let message = source.message.clone();
                if status == 404 {
                    Self::NotFound { message }
                } else {
                    Self::Api { status, message }
                }
            }
            _ => Self::Client(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_reports_404() {
        let error = HostError::NotFound {
            message: "Not Found".to_string(),
        };
        assert!(error.is_not_found());
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn api_error_is_not_not_found() {
        let error = HostError::Api {
            status: 502,
            message: "Bad Gateway".to_string(),
        };
        assert!(!error.is_not_found());
        assert_eq!(error.status(), Some(502));
        assert_eq!(error.to_string(), "GitHub API error (502): Bad Gateway");
    }
}
