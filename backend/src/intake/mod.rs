//! Batch intake of food enquete submissions.
//!
//! An intake run reads a JSON array of submissions, saves each one through
//! [`EnqueteService`](crate::domain::EnqueteService) and writes one
//! [`SubmissionReport`] line per submission. Rejections are ordinary
//! outcomes; only configuration, I/O and store failures end a run early.

mod config;
mod report;
mod runner;
mod submissions;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ports::EnqueteRepositoryError;
use crate::outbound::locale::MessageCatalogError;

pub use config::{DEFAULT_LOCALE, IntakeSettings};
pub use report::{IntakeSummary, SubmissionReport};
pub use runner::run_intake;
pub use submissions::{load_submissions, parse_submissions};

/// Errors that end an intake run.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// No submissions file was configured.
    #[error("submissions path missing: set --submissions-path or ENQUETE_SUBMISSIONS_PATH")]
    MissingSubmissionsPath,
    /// The submissions file could not be read.
    #[error("failed to read submissions at {path}: {source}")]
    SubmissionsRead {
        /// Path to the submissions file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The submissions file is not a JSON array of enquetes.
    #[error("failed to parse submissions: {0}")]
    SubmissionsParse(#[source] serde_json::Error),
    /// The message catalogue could not be loaded.
    #[error(transparent)]
    Catalog(#[from] MessageCatalogError),
    /// The store failed while handling a submission.
    #[error("store failed on submission {index}: {source}")]
    Repository {
        /// Zero-based position of the submission being handled.
        index: usize,
        /// Underlying repository error.
        #[source]
        source: EnqueteRepositoryError,
    },
    /// A report could not be encoded or written.
    #[error("failed to write report: {0}")]
    Output(#[source] io::Error),
}
