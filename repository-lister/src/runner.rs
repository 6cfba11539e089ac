//! Orchestrates a repository listing run.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::branches::probe_branches;
use crate::discovery::discover_repositories;
use crate::filter::filter_repositories;
use crate::formatter::format_repositories;
use crate::github::{GitHubHost, RepositoryHost};
use crate::outputs::OutputSink;
use crate::summary::{RunSummary, SummaryRenderer};
use tracing::info;

/// Output holding the formatted filtered repositories.
pub const REPOSITORIES_OUTPUT: &str = "repositories";
/// Output holding the filtered repository count.
pub const REPOSITORY_COUNT_OUTPUT: &str = "repository-count";
/// Output holding the formatted branch matches.
pub const BRANCH_REPOSITORIES_OUTPUT: &str = "repositories-with-branch";
/// Output holding the branch match count.
pub const BRANCH_COUNT_OUTPUT: &str = "repositories-with-branch-count";

/// Orchestrates discovery, filtering, formatting, probing and reporting.
pub struct Runner<H = GitHubHost> {
    config: RunnerConfig,
    host: H,
    sink: OutputSink,
    renderer: SummaryRenderer,
}

impl Runner<GitHubHost> {
    /// Builds a runner talking to GitHub and writing to the Actions files
    /// named in the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the GitHub client or summary template cannot be
    /// built.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let host = GitHubHost::new(config.token())?;
        Self::with_parts(config, host, OutputSink::from_env())
    }
}

impl<H: RepositoryHost> Runner<H> {
    /// Builds a runner from explicit parts.
    ///
    /// # Errors
    ///
    /// Returns an error if the summary template cannot be built.
    pub fn with_parts(config: RunnerConfig, host: H, sink: OutputSink) -> Result<Self, RunnerError> {
        Ok(Self {
            config,
            host,
            sink,
            renderer: SummaryRenderer::new()?,
        })
    }

    /// Executes the full run.
    ///
    /// Nothing is written if discovery fails. Branch lookup failures are
    /// counted in the summary but do not fail the run.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let config = &self.config;
        let owner = config.owner();

        let discovery = discover_repositories(&self.host, owner, config.discovery()).await?;
        info!(
            count = discovery.repositories.len(),
            mode = %discovery.mode,
            "Found repositories"
        );

        let selected =
            filter_repositories(&discovery.repositories, config.visibility(), config.forks());
        info!(
            count = selected.len(),
            visibility = %config.visibility(),
            forks = %config.forks(),
            "After filtering"
        );

        let formatted = format_repositories(&selected, config.output_format())?;
        self.sink.set_output(REPOSITORIES_OUTPUT, &formatted)?;
        self.sink
            .set_output(REPOSITORY_COUNT_OUTPUT, &selected.len().to_string())?;

        let mut summary =
            RunSummary::new(discovery.mode, discovery.repositories.len(), selected.len());

        let markdown = match config.branch_name() {
            Some(branch) => {
                let report = probe_branches(
                    &self.host,
                    owner,
                    &selected,
                    branch,
                    config.probe_concurrency(),
                )
                .await;

                let formatted = format_repositories(&report.matches, config.output_format())?;
                self.sink.set_output(BRANCH_REPOSITORIES_OUTPUT, &formatted)?;
                self.sink
                    .set_output(BRANCH_COUNT_OUTPUT, &report.matches.len().to_string())?;

                summary.record_probe(&report);
                self.renderer.render_branch_matches(branch, &report.matches)?
            }
            None => self.renderer.render_repositories(owner, &selected)?,
        };
        self.sink.write_summary(&markdown)?;

        Ok(summary)
    }
}
