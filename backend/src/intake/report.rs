//! Per-submission outcome lines written by the intake run.

use serde::Serialize;

use crate::domain::{EnqueteId, Violations};

/// Outcome of one submission, serialised as one JSON line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionReport {
    /// The submission passed every rule and was stored.
    Saved {
        /// Zero-based position in the submissions file.
        index: usize,
        /// Identifier assigned by the store.
        id: EnqueteId,
    },
    /// The submission broke at least one rule.
    Rejected {
        /// Zero-based position in the submissions file.
        index: usize,
        /// Failed rules keyed by field.
        violations: Violations,
        /// Localised full messages, in field order.
        messages: Vec<String>,
    },
}

impl SubmissionReport {
    /// Position of the submission this report describes.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Saved { index, .. } | Self::Rejected { index, .. } => *index,
        }
    }

    /// Whether the submission was stored.
    #[must_use]
    pub const fn is_saved(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }
}

/// Totals for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IntakeSummary {
    /// Submissions stored.
    pub saved: usize,
    /// Submissions rejected by the rules.
    pub rejected: usize,
}

impl IntakeSummary {
    /// Count one report.
    pub const fn record(&mut self, report: &SubmissionReport) {
        if report.is_saved() {
            self.saved += 1;
        } else {
            self.rejected += 1;
        }
    }
}
