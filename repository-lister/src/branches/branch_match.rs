//! Confirmed branch occurrences.

use crate::discovery::RepositoryRecord;

/// A repository confirmed to contain the searched branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchMatch {
    /// Repository name.
    pub name: String,

    /// Full repository name in "owner/name" format.
    pub full_name: String,

    /// Web URL of the repository.
    pub url: String,

    /// Web URL of the branch tree.
    pub branch_url: String,
}

impl BranchMatch {
    /// Builds a match for `repository`, linking to `branch`.
    #[must_use]
    pub fn new(repository: &RepositoryRecord, branch: &str) -> Self {
        Self {
            name: repository.name.clone(),
            full_name: repository.full_name.clone(),
            url: repository.url.clone(),
            branch_url: format!("{}/tree/{}", repository.url, encode_path_segment(branch)),
        }
    }
}

/// Characters `urlencoding` escapes but browsers keep literal in a path.
const LITERAL_MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Percent-encodes a branch name, leaving `-_.!~*'()` and alphanumerics as is.
fn encode_path_segment(branch: &str) -> String {
    LITERAL_MARKS
        .iter()
        .fold(urlencoding::encode(branch).into_owned(), |encoded, (escaped, mark)| {
            encoded.replace(escaped, mark)
        })
}
