//! Message catalogues bundled with the binary.
//!
//! Each supported locale ships as a nested JSON document under `locales/`.
//! Loading flattens the document into dotted keys, so
//! `{"errors": {"messages": {"blank": "…"}}}` becomes `errors.messages.blank`.

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

use crate::domain::ports::MessageCatalog;

const JA: &str = include_str!("../../../locales/ja.json");
const EN: &str = include_str!("../../../locales/en.json");

/// Locale codes with a bundled catalogue.
pub const SUPPORTED_LOCALES: &[&str] = &["ja", "en"];

/// Errors raised while loading a catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageCatalogError {
    /// No catalogue is bundled for the requested locale.
    #[error("no message catalogue bundled for locale `{locale}`")]
    UnknownLocale {
        /// Requested locale code.
        locale: String,
    },
    /// The catalogue document is malformed.
    #[error("message catalogue `{locale}` is malformed: {message}")]
    Parse {
        /// Locale whose document failed to load.
        locale: String,
        /// Parser or shape error detail.
        message: String,
    },
}

/// Catalogue backed by a flattened JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundledMessageCatalog {
    locale: String,
    messages: BTreeMap<String, String>,
}

impl BundledMessageCatalog {
    /// Load the bundled catalogue for `locale`.
    ///
    /// # Errors
    ///
    /// Returns [`MessageCatalogError::UnknownLocale`] for locales outside
    /// [`SUPPORTED_LOCALES`], and [`MessageCatalogError::Parse`] when the
    /// bundled document is malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use enquete_backend::domain::ports::MessageCatalog;
    /// use enquete_backend::outbound::locale::BundledMessageCatalog;
    ///
    /// let catalog = BundledMessageCatalog::for_locale("ja")?;
    /// assert_eq!(catalog.lookup("attributes.food_enquete.name"), Some("お名前"));
    /// # Ok::<(), enquete_backend::outbound::locale::MessageCatalogError>(())
    /// ```
    pub fn for_locale(locale: &str) -> Result<Self, MessageCatalogError> {
        let document = match locale {
            "ja" => JA,
            "en" => EN,
            other => {
                return Err(MessageCatalogError::UnknownLocale {
                    locale: other.to_owned(),
                });
            }
        };
        Self::from_json(locale, document)
    }

    /// Build a catalogue from a nested JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`MessageCatalogError::Parse`] when `document` is not JSON,
    /// its root is not an object, or a leaf is not a string.
    pub fn from_json(locale: &str, document: &str) -> Result<Self, MessageCatalogError> {
        let parse_error = |message: String| MessageCatalogError::Parse {
            locale: locale.to_owned(),
            message,
        };

        let root: Value =
            serde_json::from_str(document).map_err(|err| parse_error(err.to_string()))?;
        let Value::Object(entries) = root else {
            return Err(parse_error("root must be an object".to_owned()));
        };

        let mut messages = BTreeMap::new();
        for (key, value) in entries {
            flatten(key, value, &mut messages).map_err(parse_error)?;
        }
        Ok(Self {
            locale: locale.to_owned(),
            messages,
        })
    }

    /// Number of keys in the catalogue.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the catalogue holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

fn flatten(
    prefix: String,
    value: Value,
    messages: &mut BTreeMap<String, String>,
) -> Result<(), String> {
    match value {
        Value::String(text) => {
            messages.insert(prefix, text);
            Ok(())
        }
        Value::Object(children) => {
            for (key, child) in children {
                flatten(format!("{prefix}.{key}"), child, messages)?;
            }
            Ok(())
        }
        _ => Err(format!("`{prefix}` must be a string or an object")),
    }
}

impl MessageCatalog for BundledMessageCatalog {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }
}
