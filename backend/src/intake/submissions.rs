//! Loading of the submissions file.

use std::io;
use std::path::Path;

use cap_std::{ambient_authority, fs::Dir};

use crate::domain::FoodEnquete;

use super::IntakeError;

/// Parse a JSON array of submissions.
///
/// Unknown keys are rejected so misspelt answers fail loudly instead of
/// reaching the rules as blanks.
///
/// # Errors
///
/// Returns [`IntakeError::SubmissionsParse`] when `contents` is not an array
/// of enquete objects.
pub fn parse_submissions(contents: &str) -> Result<Vec<FoodEnquete>, IntakeError> {
    serde_json::from_str(contents).map_err(IntakeError::SubmissionsParse)
}

/// Read and parse the submissions file at `path`.
///
/// # Errors
///
/// Returns [`IntakeError::SubmissionsRead`] when the file cannot be opened or
/// read, and [`IntakeError::SubmissionsParse`] when its contents are not a
/// JSON array of enquetes.
pub fn load_submissions(path: &Path) -> Result<Vec<FoodEnquete>, IntakeError> {
    let read_error = |source: io::Error| IntakeError::SubmissionsRead {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "submissions path must be a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let contents = dir.read_to_string(Path::new(file_name)).map_err(read_error)?;
    parse_submissions(&contents)
}
