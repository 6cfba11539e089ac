//! In-memory GitHub host shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use repository_lister::{Branch, HostError, RepositoryHost, RepositoryRecord};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Mutex;

/// A request the fake host received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Org { page: u32, per_page: u8 },
    User { page: u32, per_page: u8 },
    Branch { owner: String, repo: String, branch: String },
}

/// Serves repository listings and branches from memory.
#[derive(Default)]
pub struct FakeHost {
    org: Option<Vec<RepositoryRecord>>,
    user: Option<Vec<RepositoryRecord>>,
    failing_pages: HashMap<u32, u16>,
    branches: HashMap<String, HashSet<String>>,
    branch_errors: HashMap<String, u16>,
    calls: Mutex<Vec<Call>>,
}

impl FakeHost {
    /// An owner GitHub knows as an organization.
    pub fn organization(repositories: Vec<RepositoryRecord>) -> Self {
        Self {
            org: Some(repositories),
            ..Self::default()
        }
    }

    /// An owner GitHub only knows as a user.
    pub fn user(repositories: Vec<RepositoryRecord>) -> Self {
        Self {
            user: Some(repositories),
            ..Self::default()
        }
    }

    /// An owner GitHub does not know at all.
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Makes listing `page` fail with `status`, whichever endpoint is used.
    pub fn failing_page(mut self, page: u32, status: u16) -> Self {
        self.failing_pages.insert(page, status);
        self
    }

    /// Gives repository `repo` a branch named `branch`.
    pub fn with_branch(mut self, repo: &str, branch: &str) -> Self {
        self.branches
            .entry(repo.to_string())
            .or_default()
            .insert(branch.to_string());
        self
    }

    /// Makes every branch lookup in `repo` fail with `status`.
    pub fn failing_branch_lookup(mut self, repo: &str, status: u16) -> Self {
        self.branch_errors.insert(repo.to_string(), status);
        self
    }

    /// Returns every request received so far.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Returns only the listing requests received so far.
    pub fn listing_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| !matches!(call, Call::Branch { .. }))
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn page_of(
        &self,
        repositories: Option<&Vec<RepositoryRecord>>,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<RepositoryRecord>, HostError> {
        let Some(repositories) = repositories else {
            return Err(not_found());
        };
        if let Some(&status) = self.failing_pages.get(&page) {
            return Err(api_error(status));
        }

        let per_page = usize::from(per_page);
        let start = (page as usize - 1) * per_page;
        Ok(repositories
            .iter()
            .skip(start)
            .take(per_page)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl RepositoryHost for FakeHost {
    async fn list_org_repositories(
        &self,
        _org: &str,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<RepositoryRecord>, HostError> {
        self.record(Call::Org { page, per_page });
        self.page_of(self.org.as_ref(), page, per_page)
    }

    async fn list_user_repositories(
        &self,
        _user: &str,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<RepositoryRecord>, HostError> {
        self.record(Call::User { page, per_page });
        self.page_of(self.user.as_ref(), page, per_page)
    }

    async fn get_branch(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> Result<Branch, HostError> {
        self.record(Call::Branch {
            owner: owner.to_string(),
            repo: repo.to_string(),
            branch: branch.to_string(),
        });

        if let Some(&status) = self.branch_errors.get(repo) {
            return Err(api_error(status));
        }
        match self.branches.get(repo) {
            Some(names) if names.contains(branch) => Ok(Branch {
                name: branch.to_string(),
            }),
            _ => Err(not_found()),
        }
    }
}

pub fn not_found() -> HostError {
    HostError::NotFound {
        message: "Not Found".to_string(),
    }
}

pub fn api_error(status: u16) -> HostError {
    HostError::Api {
        status,
        message: "Server Error".to_string(),
    }
}

/// A public, non-fork repository owned by `acme`.
pub fn repo(name: &str) -> RepositoryRecord {
    RepositoryRecord {
        name: name.to_string(),
        full_name: format!("acme/{name}"),
        url: format!("https://github.com/acme/{name}"),
        default_branch: Some("main".to_string()),
        private: false,
        fork: false,
        visibility: Some("public".to_string()),
    }
}

/// `count` repositories named `repo-0`, `repo-1`, ...
pub fn numbered(count: usize) -> Vec<RepositoryRecord> {
    (0..count).map(|i| repo(&format!("repo-{i}"))).collect()
}

pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Parses a recorded GitHub listing page from `tests/fixtures`.
pub fn listing_fixture(name: &str) -> Vec<RepositoryRecord> {
    let raw = std::fs::read_to_string(fixtures_root().join(name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}
