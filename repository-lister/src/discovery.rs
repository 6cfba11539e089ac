//! Repository discovery for an organization or user.
//!
//! Pages through the owner's repositories, first as an organization and, if
//! GitHub does not know the owner as one, as a user. Paging stops on an empty
//! page, when the configured maximum is reached, or when a page comes back
//! shorter than requested.

mod error;
mod mode;
mod options;
mod repository;

pub use error::DiscoveryError;
pub use mode::{OwnerMode, PageCursor};
pub use options::{DiscoveryOptions, DEFAULT_MAX_REPOSITORIES, MAX_PER_PAGE};
pub use repository::RepositoryRecord;

use crate::github::{HostError, RepositoryHost};
use tracing::{error, info, info_span, Instrument};

/// Repositories collected for one owner.
#[derive(Debug, Clone)]
pub struct Discovery {
    /// Endpoint that produced the repositories.
    pub mode: OwnerMode,

    /// Repositories in listing order.
    pub repositories: Vec<RepositoryRecord>,
}

/// Why the pagination loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    EmptyPage,
    LimitReached,
    ShortPage,
}

/// Discovers all repositories of `owner`.
///
/// # Arguments
///
/// * `host` - GitHub transport
/// * `owner` - Organization or user login
/// * `options` - Page size, start page and repository cap
///
/// # Errors
///
/// Returns [`DiscoveryError::Fetch`] for any failed page other than the
/// first organization "not found", which switches to user mode instead.
/// Repositories collected before the failure are discarded.
pub async fn discover_repositories<H>(
    host: &H,
    owner: &str,
    options: &DiscoveryOptions,
) -> Result<Discovery, DiscoveryError>
where
    H: RepositoryHost + ?Sized,
{
    let span = info_span!("discover", owner = %owner);

    async {
        let max_repos = options
            .limit()
            .map_or_else(|| "unlimited".to_string(), |n| n.to_string());
        info!(
            max_repos = %max_repos,
            start_page = options.start_page(),
            per_page = options.per_page(),
            "Fetching repositories"
        );

        let mut cursor = PageCursor::new(options.start_page());
        let mut repositories: Vec<RepositoryRecord> = Vec::new();

        loop {
            info!(
                page = cursor.page(),
                so_far = repositories.len(),
                mode = %cursor.mode(),
                "Fetching page"
            );

            let fetched = fetch_page(host, owner, &cursor, options.per_page()).await;
            let batch = match fetched {
                Ok(batch) => batch,
                Err(e) => {
                    if e.is_not_found() && cursor.fall_back() {
                        info!("Owner is not an organization, trying as a user");
                        continue;
                    }
                    error!(page = cursor.page(), error = %e, "Error fetching page");
                    return Err(DiscoveryError::Fetch {
                        mode: cursor.mode(),
                        page: cursor.page(),
                        source: e,
                    });
                }
            };
            cursor.record_response();

            match accumulate(&mut repositories, batch, options) {
                Some(Stop::LimitReached) => {
                    info!(limit = repositories.len(), "Reached max repos limit");
                    break;
                }
                Some(_) => break,
                None => cursor.advance(),
            }
        }

        info!(count = repositories.len(), mode = %cursor.mode(), "Discovery complete");
        Ok(Discovery {
            mode: cursor.mode(),
            repositories,
        })
    }
    .instrument(span)
    .await
}

/// Requests the page the cursor points at.
async fn fetch_page<H>(
    host: &H,
    owner: &str,
    cursor: &PageCursor,
    per_page: u8,
) -> Result<Vec<RepositoryRecord>, HostError>
where
    H: RepositoryHost + ?Sized,
{
    match cursor.mode() {
        OwnerMode::Organization => {
            host.list_org_repositories(owner, cursor.page(), per_page)
                .await
        }
        OwnerMode::User => {
            host.list_user_repositories(owner, cursor.page(), per_page)
                .await
        }
    }
}

/// Appends a page to the accumulator, respecting the repository cap.
///
/// Returns the stop condition the page triggered, if any.
fn accumulate(
    repositories: &mut Vec<RepositoryRecord>,
    batch: Vec<RepositoryRecord>,
    options: &DiscoveryOptions,
) -> Option<Stop> {
    if batch.is_empty() {
        return Some(Stop::EmptyPage);
    }

    let received = batch.len();
    let remaining = options
        .limit()
        .map_or(received, |limit| limit.saturating_sub(repositories.len()));
    repositories.extend(batch.into_iter().take(remaining));

    if options
        .limit()
        .is_some_and(|limit| repositories.len() >= limit)
    {
        return Some(Stop::LimitReached);
    }

    if received < usize::from(options.per_page()) {
        return Some(Stop::ShortPage);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(prefix: &str, count: usize) -> Vec<RepositoryRecord> {
        (0..count)
            .map(|i| RepositoryRecord {
                name: format!("{prefix}{i}"),
                full_name: format!("owner/{prefix}{i}"),
                url: format!("https://github.com/owner/{prefix}{i}"),
                default_branch: Some("main".to_string()),
                private: false,
                fork: false,
                visibility: Some("public".to_string()),
            })
            .collect()
    }

    #[test]
    fn empty_page_stops() {
        let mut acc = records("a", 3);
        let options = DiscoveryOptions::new(100, 1, 0);

        assert_eq!(
            accumulate(&mut acc, Vec::new(), &options),
            Some(Stop::EmptyPage)
        );
        assert_eq!(acc.len(), 3);
    }

    #[test]
    fn full_page_continues_when_unlimited() {
        let mut acc = Vec::new();
        let options = DiscoveryOptions::new(10, 1, 0);

        assert_eq!(accumulate(&mut acc, records("a", 10), &options), None);
        assert_eq!(acc.len(), 10);
    }

    #[test]
    fn short_page_stops() {
        let mut acc = Vec::new();
        let options = DiscoveryOptions::new(10, 1, 0);

        assert_eq!(
            accumulate(&mut acc, records("a", 4), &options),
            Some(Stop::ShortPage)
        );
    }

    #[test]
    fn truncates_to_remaining_budget() {
        let mut acc = records("a", 25);
        let options = DiscoveryOptions::new(10, 1, 30);

        assert_eq!(
            accumulate(&mut acc, records("b", 10), &options),
            Some(Stop::LimitReached)
        );
        assert_eq!(acc.len(), 30);
        assert_eq!(acc[29].name, "b4");
    }

    #[test]
    fn limit_takes_priority_over_short_page() {
        let mut acc = Vec::new();
        let options = DiscoveryOptions::new(10, 1, 5);

        assert_eq!(
            accumulate(&mut acc, records("a", 5), &options),
            Some(Stop::LimitReached)
        );
    }
}
