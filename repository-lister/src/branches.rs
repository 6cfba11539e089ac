//! Branch probing across discovered repositories.
//!
//! Each repository gets exactly one "get branch" lookup. A 404 means the
//! branch is absent; any other failure becomes a [`ProbeWarning`] and the
//! pass carries on with the next repository.

mod branch_match;
mod outcome;

pub use branch_match::BranchMatch;
pub use outcome::{ProbeOutcome, ProbeReport, ProbeWarning};

use crate::discovery::RepositoryRecord;
use crate::github::RepositoryHost;
use futures::stream::{self, StreamExt};
use tracing::{debug, info, info_span, warn, Instrument};

/// Checks every repository for `branch`.
///
/// Lookups are issued in input order. With `concurrency` 1 they run one at a
/// time; higher values keep up to that many lookups in flight while still
/// yielding outcomes in input order.
pub async fn probe_branches<H>(
    host: &H,
    owner: &str,
    repositories: &[RepositoryRecord],
    branch: &str,
    concurrency: usize,
) -> ProbeReport
where
    H: RepositoryHost + ?Sized,
{
    let span = info_span!("probe_branches", branch = %branch);

    async {
        info!(
            count = repositories.len(),
            concurrency, "Searching for branch across repositories"
        );

        let outcomes: Vec<ProbeOutcome> = stream::iter(repositories)
            .map(|repository| probe_repository(host, owner, repository, branch))
            .buffered(concurrency.max(1))
            .collect()
            .await;
        let report: ProbeReport = outcomes.into_iter().collect();

        info!(
            found = report.matches.len(),
            missing = report.missing,
            failed = report.warnings.len(),
            "Branch search complete"
        );
        report
    }
    .instrument(span)
    .await
}

/// Looks up `branch` in a single repository.
pub async fn probe_repository<H>(
    host: &H,
    owner: &str,
    repository: &RepositoryRecord,
    branch: &str,
) -> ProbeOutcome
where
    H: RepositoryHost + ?Sized,
{
    match host.get_branch(owner, &repository.name, branch).await {
        Ok(found) => {
            info!(repo = %repository.full_name, branch = %found.name, "Branch found");
            ProbeOutcome::Found(BranchMatch::new(repository, branch))
        }
        Err(e) if e.is_not_found() => {
            debug!(repo = %repository.full_name, "Branch not found");
            ProbeOutcome::Missing
        }
        Err(e) => {
            warn!(repo = %repository.full_name, error = %e, "Error checking branch");
            ProbeOutcome::Failed(ProbeWarning {
                repository: repository.full_name.clone(),
                message: e.to_string(),
            })
        }
    }
}
