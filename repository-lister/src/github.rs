//! GitHub REST transport.
//!
//! [`RepositoryHost`] is the narrow set of calls discovery and branch probing
//! need. [`GitHubHost`] implements it with octocrab; tests provide their own
//! in-memory hosts.

mod error;

pub use error::HostError;

use crate::discovery::RepositoryRecord;
use async_trait::async_trait;
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};

/// A branch as returned by the "get branch" endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Branch {
    /// Branch name.
    pub name: String,
}

/// Repository listing and branch lookup operations.
#[async_trait]
pub trait RepositoryHost: Send + Sync {
    /// Lists one page of repositories owned by an organization.
    async fn list_org_repositories(
        &self,
        org: &str,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<RepositoryRecord>, HostError>;

    /// Lists one page of repositories owned by a user.
    async fn list_user_repositories(
        &self,
        user: &str,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<RepositoryRecord>, HostError>;

    /// Looks up a single branch of a repository.
    async fn get_branch(&self, owner: &str, repo: &str, branch: &str)
        -> Result<Branch, HostError>;
}

/// Query string shared by both repository listing endpoints.
#[derive(Serialize)]
struct ListReposParams {
    #[serde(rename = "type")]
    kind: &'static str,
    per_page: u8,
    page: u32,
}

impl ListReposParams {
    fn all(page: u32, per_page: u8) -> Self {
        Self {
            kind: "all",
            per_page,
            page,
        }
    }
}

/// [`RepositoryHost`] backed by the GitHub REST API.
#[derive(Clone)]
pub struct GitHubHost {
    octocrab: Octocrab,
}

impl GitHubHost {
    /// Builds a host authenticated with a personal access token.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(token: &str) -> Result<Self, octocrab::Error> {
        let octocrab = Octocrab::builder()
            .personal_token(token.to_string())
            .build()?;
        Ok(Self { octocrab })
    }

    async fn list_repositories(
        &self,
        route: String,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<RepositoryRecord>, HostError> {
        let params = ListReposParams::all(page, per_page);
        Ok(self.octocrab.get(route, Some(&params)).await?)
    }
}

#[async_trait]
impl RepositoryHost for GitHubHost {
    async fn list_org_repositories(
        &self,
        org: &str,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<RepositoryRecord>, HostError> {
        self.list_repositories(format!("/orgs/{org}/repos"), page, per_page)
            .await
    }

    async fn list_user_repositories(
        &self,
        user: &str,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<RepositoryRecord>, HostError> {
        self.list_repositories(format!("/users/{user}/repos"), page, per_page)
            .await
    }

    async fn get_branch(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> Result<Branch, HostError> {
        let route = branch_route(owner, repo, branch);
        Ok(self.octocrab.get(route, None::<&()>).await?)
    }
}

/// Builds the "get branch" route. Slashes in branch names are encoded.
fn branch_route(owner: &str, repo: &str, branch: &str) -> String {
    format!(
        "/repos/{owner}/{repo}/branches/{}",
        urlencoding::encode(branch)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_branch_in_route() {
        assert_eq!(
            branch_route("acme", "widgets", "feature/new thing"),
            "/repos/acme/widgets/branches/feature%2Fnew%20thing"
        );
    }

    #[test]
    fn list_params_request_all_repository_types() {
        let params = serde_json::to_value(ListReposParams::all(3, 50)).unwrap();
        assert_eq!(
            params,
            serde_json::json!({ "type": "all", "per_page": 50, "page": 3 })
        );
    }

    #[test]
    fn branch_ignores_extra_fields() {
        let branch: Branch =
            serde_json::from_str(r#"{"name":"main","protected":true,"commit":{"sha":"abc"}}"#)
                .unwrap();
        assert_eq!(branch.name, "main");
    }
}
