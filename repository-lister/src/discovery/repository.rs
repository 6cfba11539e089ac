//! Repository records as listed by GitHub.

use serde::Deserialize;

/// One repository from a listing page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryRecord {
    /// Short repository name, unique within its owner.
    pub name: String,

    /// Full repository name in "owner/name" format.
    pub full_name: String,

    /// Web URL of the repository.
    #[serde(rename = "html_url")]
    pub url: String,

    /// Default branch name (e.g., "main").
    #[serde(default)]
    pub default_branch: Option<String>,

    /// Whether the repository is private.
    #[serde(default)]
    pub private: bool,

    /// Whether the repository is a fork.
    #[serde(default)]
    pub fork: bool,

    /// Visibility reported by GitHub ("public", "private" or "internal").
    /// Not every GitHub deployment sends it.
    #[serde(default)]
    pub visibility: Option<String>,
}

impl RepositoryRecord {
    /// Returns true if GitHub reports the repository as internal.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        self.visibility.as_deref() == Some("internal")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_listing_entry() {
        let record: RepositoryRecord = serde_json::from_str(
            r#"{
                "id": 1296269,
                "name": "Hello-World",
                "full_name": "octocat/Hello-World",
                "html_url": "https://github.com/octocat/Hello-World",
                "default_branch": "master",
                "private": false,
                "fork": true,
                "visibility": "public",
                "owner": { "login": "octocat" }
            }"#,
        )
        .unwrap();

        assert_eq!(record.name, "Hello-World");
        assert_eq!(record.full_name, "octocat/Hello-World");
        assert_eq!(record.url, "https://github.com/octocat/Hello-World");
        assert_eq!(record.default_branch.as_deref(), Some("master"));
        assert!(!record.private);
        assert!(record.fork);
        assert!(!record.is_internal());
    }

    #[test]
    fn tolerates_missing_optional_fields() {
        let record: RepositoryRecord = serde_json::from_str(
            r#"{
                "name": "legacy",
                "full_name": "corp/legacy",
                "html_url": "https://ghe.example.com/corp/legacy"
            }"#,
        )
        .unwrap();

        assert_eq!(record.default_branch, None);
        assert_eq!(record.visibility, None);
        assert!(!record.private);
        assert!(!record.fork);
    }
}
