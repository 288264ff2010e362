//! Age-gated gift eligibility.
//!
//! The all-you-can-drink beer gift is reserved for adults. Other gifts are
//! open to every respondent.

use super::enquete::FoodEnquete;
use super::validation::{Field, RuleContext, Violation, ViolationKind};

/// Gift catalogue identifier of the all-you-can-drink beer reward.
pub const GIFT_ALCOHOL_ID: i32 = 1;

/// Age from which a respondent counts as an adult.
pub const ADULT_AGE: i32 = 20;

/// Whether `age` is at least [`ADULT_AGE`].
///
/// # Examples
/// ```
/// use enquete_backend::domain::is_adult;
///
/// assert!(!is_adult(19));
/// assert!(is_adult(20));
/// ```
#[must_use]
pub const fn is_adult(age: i32) -> bool {
    age >= ADULT_AGE
}

/// Reject the alcohol gift for respondents who are not adults.
///
/// An unset age counts as not adult; the age presence rule reports the
/// missing value on its own.
pub(crate) fn present_eligibility(
    enquete: &FoodEnquete,
    _context: &RuleContext,
) -> Option<Violation> {
    let wants_alcohol = enquete.present_id == Some(GIFT_ALCOHOL_ID);
    (wants_alcohol && !enquete.respondent_is_adult())
        .then(|| Violation::new(Field::PresentId, ViolationKind::CannotPresentToMinor))
}
