//! Food enquete record model.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::common_display::CommonDisplay;
use super::eligibility;

/// Validation errors returned by [`EnqueteId::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnqueteIdValidationError {
    /// Identifiers are assigned from 1 upwards.
    NotPositive {
        /// Rejected raw value.
        value: i64,
    },
}

impl fmt::Display for EnqueteIdValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPositive { value } => {
                write!(f, "enquete id must be positive, got {value}")
            }
        }
    }
}

impl std::error::Error for EnqueteIdValidationError {}

/// Identifier assigned by the persistence adapter when an enquete is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct EnqueteId(i64);

impl EnqueteId {
    /// Validate and construct an [`EnqueteId`].
    ///
    /// # Examples
    /// ```
    /// use enquete_backend::domain::EnqueteId;
    ///
    /// let id = EnqueteId::new(1).expect("valid id");
    /// assert_eq!(id.get(), 1);
    /// assert!(EnqueteId::new(0).is_err());
    /// ```
    pub const fn new(value: i64) -> Result<Self, EnqueteIdValidationError> {
        if value < 1 {
            return Err(EnqueteIdValidationError::NotPositive { value });
        }
        Ok(Self(value))
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for EnqueteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<EnqueteId> for i64 {
    fn from(value: EnqueteId) -> Self {
        value.0
    }
}

impl TryFrom<i64> for EnqueteId {
    type Error = EnqueteIdValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// One survey response.
///
/// Every field starts unset. Assign fields, run the rule set through
/// [`crate::domain::EnqueteService::validate`], and only save when no
/// violations are reported.
///
/// ## Invariants
/// - A record with a blank `name` or `mail` never validates.
/// - `request` is optional and never reported as blank.
/// - `score` outside `1..=3` is not a violation; it displays as unknown.
///
/// Serialised with `snake_case` keys; absent keys stay unset and unknown
/// keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FoodEnquete {
    /// Respondent name.
    pub name: Option<String>,
    /// Respondent mail address, unique across stored enquetes.
    pub mail: Option<String>,
    /// Respondent age in years.
    pub age: Option<i32>,
    /// Dish catalogue identifier.
    pub food_id: Option<i32>,
    /// Satisfaction score: 1 bad, 2 normal, 3 good.
    pub score: Option<i32>,
    /// Free-form comments.
    pub request: Option<String>,
    /// Gift catalogue identifier.
    pub present_id: Option<i32>,
}

impl FoodEnquete {
    /// Create an enquete with every field unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the respondent may receive adult-only gifts.
    ///
    /// An unset age is never adult.
    #[must_use]
    pub fn respondent_is_adult(&self) -> bool {
        self.age.is_some_and(eligibility::is_adult)
    }
}

impl CommonDisplay for FoodEnquete {
    fn score(&self) -> Option<i32> {
        self.score
    }
}

/// An enquete that has been accepted by the store.
///
/// Serialises as the record's fields plus `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredEnquete {
    id: EnqueteId,
    #[serde(flatten)]
    enquete: FoodEnquete,
}

impl StoredEnquete {
    /// Pair a store-assigned identifier with the saved record.
    #[must_use]
    pub const fn new(id: EnqueteId, enquete: FoodEnquete) -> Self {
        Self { id, enquete }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> EnqueteId {
        self.id
    }

    /// Saved field values.
    #[must_use]
    pub const fn enquete(&self) -> &FoodEnquete {
        &self.enquete
    }

    /// Split into identifier and record.
    #[must_use]
    pub fn into_parts(self) -> (EnqueteId, FoodEnquete) {
        (self.id, self.enquete)
    }
}

impl CommonDisplay for StoredEnquete {
    fn score(&self) -> Option<i32> {
        self.enquete.score
    }
}
