//! Runner configuration.

use crate::discovery::DiscoveryOptions;
use crate::filter::{ForkPolicy, VisibilityPolicy};
use crate::formatter::OutputFormat;

/// Configuration for a repository listing run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Organization or user whose repositories are listed.
    owner: String,
    /// GitHub token used for API calls.
    token: String,
    /// Branch to search for, if any.
    branch_name: Option<String>,
    /// Serialization of the `repositories` outputs.
    output_format: OutputFormat,
    /// Visibility filter.
    visibility: VisibilityPolicy,
    /// Fork filter.
    forks: ForkPolicy,
    /// Paging and cap settings for discovery.
    discovery: DiscoveryOptions,
    /// Maximum branch lookups in flight.
    probe_concurrency: usize,
}

impl RunnerConfig {
    /// Creates a configuration with default filters, format and paging.
    pub fn new(owner: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            token: token.into(),
            branch_name: None,
            output_format: OutputFormat::default(),
            visibility: VisibilityPolicy::default(),
            forks: ForkPolicy::default(),
            discovery: DiscoveryOptions::default(),
            probe_concurrency: 1,
        }
    }

    /// Sets the branch to search for. An empty name disables the search.
    pub fn with_branch_name(mut self, branch_name: impl Into<String>) -> Self {
        let branch_name = branch_name.into();
        self.branch_name = (!branch_name.is_empty()).then_some(branch_name);
        self
    }

    /// Sets the output format.
    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    /// Sets the visibility filter.
    pub fn with_visibility(mut self, visibility: VisibilityPolicy) -> Self {
        self.visibility = visibility;
        self
    }

    /// Sets the fork filter.
    pub fn with_forks(mut self, forks: ForkPolicy) -> Self {
        self.forks = forks;
        self
    }

    /// Sets paging and the repository cap.
    pub fn with_discovery_options(mut self, discovery: DiscoveryOptions) -> Self {
        self.discovery = discovery;
        self
    }

    /// Sets how many branch lookups may run at once. Clamped to at least 1.
    pub fn with_probe_concurrency(mut self, probe_concurrency: usize) -> Self {
        self.probe_concurrency = probe_concurrency.max(1);
        self
    }

    /// Returns the owner login.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the branch to search for, if any.
    pub fn branch_name(&self) -> Option<&str> {
        self.branch_name.as_deref()
    }

    /// Returns the output format.
    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    /// Returns the visibility filter.
    pub fn visibility(&self) -> VisibilityPolicy {
        self.visibility
    }

    /// Returns the fork filter.
    pub fn forks(&self) -> ForkPolicy {
        self.forks
    }

    /// Returns the discovery options.
    pub fn discovery(&self) -> &DiscoveryOptions {
        &self.discovery
    }

    /// Returns the maximum branch lookups in flight.
    pub fn probe_concurrency(&self) -> usize {
        self.probe_concurrency
    }
}
