//! Markdown summary renderer.

use super::SummaryError;
use crate::branches::BranchMatch;
use crate::discovery::RepositoryRecord;
use handlebars::{no_escape, Handlebars};
use serde::Serialize;

const SUMMARY_TEMPLATE: &str = "summary";

/// Heading, blank line, then one bullet per item. `note` is always present
/// (possibly empty) so strict mode never trips on it.
const SUMMARY_SOURCE: &str = "# {{heading}}\n\n\
{{#each items}}- [{{label}}]({{link}}){{#if note}} - default: {{note}}{{/if}}\n{{/each}}";

#[derive(Serialize)]
struct SummaryItem<'a> {
    label: &'a str,
    link: &'a str,
    note: &'a str,
}

#[derive(Serialize)]
struct SummaryData<'a> {
    heading: String,
    items: Vec<SummaryItem<'a>>,
}

/// Creates a Handlebars registry for markdown output.
///
/// The registry is configured with:
/// - No HTML escaping (for markdown output)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);
    hbs
}

/// Renders the step summary document.
pub struct SummaryRenderer {
    handlebars: Handlebars<'static>,
}

impl SummaryRenderer {
    /// Creates a renderer with the summary template registered.
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to compile.
    pub fn new() -> Result<Self, SummaryError> {
        let mut handlebars = create_handlebars_registry();
        handlebars.register_template_string(SUMMARY_TEMPLATE, SUMMARY_SOURCE)?;
        Ok(Self { handlebars })
    }

    /// Renders the "all repositories" document.
    ///
    /// Each item links the repository and notes its default branch when
    /// one is known.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_repositories(
        &self,
        owner: &str,
        repositories: &[RepositoryRecord],
    ) -> Result<String, SummaryError> {
        let data = SummaryData {
            heading: format!("All repositories for {owner}"),
            items: repositories
                .iter()
                .map(|repo| SummaryItem {
                    label: &repo.full_name,
                    link: &repo.url,
                    note: repo.default_branch.as_deref().unwrap_or(""),
                })
                .collect(),
        };
        self.render(&data)
    }

    /// Renders the branch search document.
    ///
    /// With no matches only the "No repositories found" heading is emitted.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_branch_matches(
        &self,
        branch: &str,
        matches: &[BranchMatch],
    ) -> Result<String, SummaryError> {
        let heading = if matches.is_empty() {
            format!("No repositories found with branch '{branch}'")
        } else {
            format!("Repositories with branch '{branch}'")
        };
        let data = SummaryData {
            heading,
            items: matches
                .iter()
                .map(|found| SummaryItem {
                    label: &found.full_name,
                    link: &found.branch_url,
                    note: "",
                })
                .collect(),
        };
        self.render(&data)
    }

    fn render(&self, data: &SummaryData<'_>) -> Result<String, SummaryError> {
        let rendered = self.handlebars.render(SUMMARY_TEMPLATE, data)?;
        Ok(format!("{}\n", rendered.trim_end()))
    }
}
