//! Run summary types.

use crate::branches::ProbeReport;
use crate::discovery::OwnerMode;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Whether the owner resolved to an organization or a user.
    pub owner_mode: OwnerMode,

    /// Number of repositories returned by discovery.
    pub repositories_discovered: usize,

    /// Number of repositories left after filtering.
    pub repositories_selected: usize,

    /// Number of repositories containing the searched branch.
    ///
    /// `None` when no branch was searched.
    pub branch_matches: Option<usize>,

    /// Number of branch lookups that failed for a reason other than 404.
    pub probe_warnings: usize,
}

impl RunSummary {
    /// Creates a new summary from discovery and filter counts.
    #[must_use]
    pub fn new(owner_mode: OwnerMode, discovered: usize, selected: usize) -> Self {
        Self {
            owner_mode,
            repositories_discovered: discovered,
            repositories_selected: selected,
            ..Default::default()
        }
    }

    /// Updates the summary with a branch probing pass.
    pub fn record_probe(&mut self, report: &ProbeReport) {
        self.branch_matches = Some(report.matches.len());
        self.probe_warnings = report.warnings.len();
    }

    /// Returns true if any branch lookup failed.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.probe_warnings > 0
    }
}
