//! Repository discovery error types.

use super::OwnerMode;
use crate::github::HostError;
use thiserror::Error;

/// Errors that can occur during repository discovery.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// A listing page could not be fetched. Always fatal for the run.
    #[error("Error fetching page {page} of {mode} repositories: {source}")]
    Fetch {
        /// Endpoint in use when the request failed.
        mode: OwnerMode,
        /// Page that failed.
        page: u32,
        /// Underlying transport error.
        #[source]
        source: HostError,
    },
}
