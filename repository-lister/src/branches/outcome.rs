//! Per-repository probe outcomes.

use super::BranchMatch;

/// Result of looking up the branch in one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The branch exists.
    Found(BranchMatch),

    /// GitHub answered 404: the branch does not exist.
    Missing,

    /// The lookup failed for another reason.
    Failed(ProbeWarning),
}

/// A branch lookup that failed for a reason other than "not found".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeWarning {
    /// Repository full name.
    pub repository: String,

    /// Error message.
    pub message: String,
}

/// Everything a probing pass produced.
#[derive(Debug, Clone, Default)]
pub struct ProbeReport {
    /// Repositories containing the branch, in probe order.
    pub matches: Vec<BranchMatch>,

    /// Repositories that could not be checked.
    pub warnings: Vec<ProbeWarning>,

    /// Repositories where the branch does not exist.
    pub missing: usize,
}

impl ProbeReport {
    /// Records one outcome.
    pub fn record(&mut self, outcome: ProbeOutcome) {
        match outcome {
            ProbeOutcome::Found(found) => self.matches.push(found),
            ProbeOutcome::Missing => self.missing += 1,
            ProbeOutcome::Failed(warning) => self.warnings.push(warning),
        }
    }
}

impl FromIterator<ProbeOutcome> for ProbeReport {
    fn from_iter<I: IntoIterator<Item = ProbeOutcome>>(iter: I) -> Self {
        let mut report = Self::default();
        for outcome in iter {
            report.record(outcome);
        }
        report
    }
}
