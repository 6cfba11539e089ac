//! Runner error types.

/// Errors that can occur during a listing run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Repository discovery failed.
    #[error(transparent)]
    Discovery(#[from] crate::discovery::DiscoveryError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// Formatting the repository list failed.
    #[error("Failed to format repositories: {0}")]
    Format(#[from] serde_json::Error),

    /// Writing step outputs or the summary failed.
    #[error(transparent)]
    Output(#[from] crate::outputs::OutputError),

    /// Rendering the summary failed.
    #[error(transparent)]
    Summary(#[from] crate::summary::SummaryError),
}
