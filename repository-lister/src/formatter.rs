//! Rendering repository lists for step outputs.
//!
//! Every format only carries `name` and `full_name`, so the same functions
//! serve discovered repositories and branch matches.

mod format;

pub use format::{OutputFormat, UnknownFormat};

use crate::branches::BranchMatch;
use crate::discovery::RepositoryRecord;
use serde::Serialize;

/// Anything with a short and an owner-qualified name.
pub trait NamedRepository {
    /// Short repository name.
    fn name(&self) -> &str;

    /// "owner/name".
    fn full_name(&self) -> &str;
}

impl NamedRepository for RepositoryRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn full_name(&self) -> &str {
        &self.full_name
    }
}

impl NamedRepository for BranchMatch {
    fn name(&self) -> &str {
        &self.name
    }

    fn full_name(&self) -> &str {
        &self.full_name
    }
}

#[derive(Serialize)]
struct NameEntry<'a> {
    name: &'a str,
    full_name: &'a str,
}

/// Renders `repositories` in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_repositories<R: NamedRepository>(
    repositories: &[R],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => {
            let entries: Vec<NameEntry<'_>> = repositories
                .iter()
                .map(|repo| NameEntry {
                    name: repo.name(),
                    full_name: repo.full_name(),
                })
                .collect();
            serde_json::to_string(&entries)
        }
        OutputFormat::Flat => Ok(repositories
            .iter()
            .map(NamedRepository::full_name)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Array => {
            let names: Vec<&str> = repositories.iter().map(NamedRepository::full_name).collect();
            serde_json::to_string(&names)
        }
        OutputFormat::Csv => Ok(to_csv(repositories)),
    }
}

fn to_csv<R: NamedRepository>(repositories: &[R]) -> String {
    let mut lines = Vec::with_capacity(repositories.len() + 1);
    lines.push("name,full_name".to_string());
    lines.extend(repositories.iter().map(|repo| {
        format!(
            "{},{}",
            escape_csv(repo.name()),
            escape_csv(repo.full_name())
        )
    }));
    lines.join("\n")
}

/// Quotes a CSV field if it contains a comma, quote or newline.
fn escape_csv(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
