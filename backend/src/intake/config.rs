//! Intake configuration loaded via OrthoConfig.

use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use super::IntakeError;

/// Locale used when none is configured.
pub const DEFAULT_LOCALE: &str = "ja";

/// Configuration values for one intake run.
///
/// Every field can come from the command line (`--submissions-path`), the
/// environment (`ENQUETE_SUBMISSIONS_PATH`) or a configuration file.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ENQUETE")]
pub struct IntakeSettings {
    /// JSON file holding an array of submissions.
    pub submissions_path: Option<PathBuf>,
    /// Message catalogue locale for rejection messages.
    #[ortho_config(default = "ja".to_owned())]
    pub locale: String,
    /// PostgreSQL URL; the in-memory store is used when absent.
    pub database_url: Option<String>,
}

impl IntakeSettings {
    /// Return the submissions file path.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::MissingSubmissionsPath`] when no path was
    /// configured.
    pub fn submissions_path(&self) -> Result<&Path, IntakeError> {
        self.submissions_path
            .as_deref()
            .ok_or(IntakeError::MissingSubmissionsPath)
    }

    /// Return the configured locale; a blank value falls back to [`DEFAULT_LOCALE`].
    #[must_use]
    pub fn locale(&self) -> &str {
        match self.locale.trim() {
            "" => DEFAULT_LOCALE,
            locale => locale,
        }
    }

    /// Return the database URL when one is configured and not blank.
    #[must_use]
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for intake configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 3] = [
        "ENQUETE_SUBMISSIONS_PATH",
        "ENQUETE_LOCALE",
        "ENQUETE_DATABASE_URL",
    ];

    fn load(args: &[&str]) -> IntakeSettings {
        let argv = std::iter::once("enquete-intake")
            .chain(args.iter().copied())
            .map(OsString::from);
        IntakeSettings::load_from_iter(argv).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load(&[]);
        assert_eq!(settings.locale, DEFAULT_LOCALE);
        assert_eq!(settings.locale(), DEFAULT_LOCALE);
        assert!(settings.submissions_path.is_none());
        assert!(settings.database_url().is_none());
        assert!(matches!(
            settings.submissions_path(),
            Err(IntakeError::MissingSubmissionsPath)
        ));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("ENQUETE_SUBMISSIONS_PATH", Some("/tmp/submissions.json".to_owned())),
            ("ENQUETE_LOCALE", Some("en".to_owned())),
            (
                "ENQUETE_DATABASE_URL",
                Some("postgres://localhost/enquete".to_owned()),
            ),
        ]);

        let settings = load(&[]);
        assert_eq!(
            settings.submissions_path().expect("path configured"),
            Path::new("/tmp/submissions.json")
        );
        assert_eq!(settings.locale(), "en");
        assert_eq!(settings.database_url(), Some("postgres://localhost/enquete"));
    }

    #[rstest]
    fn command_line_flags_are_read() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load(&["--submissions-path", "answers.json", "--locale", "en"]);
        assert_eq!(
            settings.submissions_path().expect("path configured"),
            Path::new("answers.json")
        );
        assert_eq!(settings.locale(), "en");
    }

    #[rstest]
    fn blank_values_fall_back() {
        let _guard = lock_env([
            ("ENQUETE_SUBMISSIONS_PATH", None::<String>),
            ("ENQUETE_LOCALE", Some("  ".to_owned())),
            ("ENQUETE_DATABASE_URL", Some(String::new())),
        ]);

        let settings = load(&[]);
        assert_eq!(settings.locale(), DEFAULT_LOCALE);
        assert!(settings.database_url().is_none());
    }
}
