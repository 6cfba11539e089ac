//! Repository filtering by visibility and fork status.

mod policy;

pub use policy::{ForkPolicy, UnknownPolicy, VisibilityPolicy};

use crate::discovery::RepositoryRecord;

/// Keeps the repositories matching both policies, in their original order.
#[must_use]
pub fn filter_repositories(
    repositories: &[RepositoryRecord],
    visibility: VisibilityPolicy,
    forks: ForkPolicy,
) -> Vec<RepositoryRecord> {
    repositories
        .iter()
        .filter(|repo| matches_visibility(repo, visibility) && matches_forks(repo, forks))
        .cloned()
        .collect()
}

fn matches_visibility(repo: &RepositoryRecord, policy: VisibilityPolicy) -> bool {
    match policy {
        VisibilityPolicy::All => true,
        VisibilityPolicy::Public => !repo.private,
        VisibilityPolicy::Private => repo.private,
        VisibilityPolicy::Internal => repo.is_internal(),
    }
}

fn matches_forks(repo: &RepositoryRecord, policy: ForkPolicy) -> bool {
    match policy {
        ForkPolicy::Include => true,
        ForkPolicy::Exclude => !repo.fork,
        ForkPolicy::Only => repo.fork,
    }
}
