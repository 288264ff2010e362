//! Field-level validation rules for [`FoodEnquete`].
//!
//! Validation is an ordered list of independent rule functions. Each rule
//! inspects the candidate record plus a [`RuleContext`] snapshot of the store
//! and reports at most one [`Violation`]. Rules never perform I/O; the
//! service reads the store once and passes the answer in through the context.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::eligibility;
use super::enquete::FoodEnquete;

/// Record attribute a violation is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// `name`
    Name,
    /// `mail`
    Mail,
    /// `age`
    Age,
    /// `food_id`
    FoodId,
    /// `score`
    Score,
    /// `request`
    Request,
    /// `present_id`
    PresentId,
}

impl Field {
    /// Attribute name as it appears on the record.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Mail => "mail",
            Self::Age => "age",
            Self::FoodId => "food_id",
            Self::Score => "score",
            Self::Request => "request",
            Self::PresentId => "present_id",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of rule failure. Serialised as the message catalogue key suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Required value is missing or whitespace-only.
    Blank,
    /// Value does not match the expected format.
    Invalid,
    /// Value collides with an already stored enquete.
    Taken,
    /// Adult-only gift chosen by a respondent under [`eligibility::ADULT_AGE`].
    CannotPresentToMinor,
}

impl ViolationKind {
    /// Message key for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::Invalid => "invalid",
            Self::Taken => "taken",
            Self::CannotPresentToMinor => "cannot_present_to_minor",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed rule on one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Violation {
    /// Offending attribute.
    pub field: Field,
    /// Rule that failed.
    pub kind: ViolationKind,
}

impl Violation {
    /// Pair a field with the rule it failed.
    #[must_use]
    pub const fn new(field: Field, kind: ViolationKind) -> Self {
        Self { field, kind }
    }
}

/// Violations grouped by field, in field order, each list in rule order.
///
/// An empty set means the record is valid.
///
/// # Examples
/// ```
/// use enquete_backend::domain::{Field, Violation, ViolationKind, Violations};
///
/// let violations: Violations = [Violation::new(Field::Name, ViolationKind::Blank)]
///     .into_iter()
///     .collect();
/// assert!(violations.contains(Field::Name, ViolationKind::Blank));
/// assert!(violations.on(Field::Request).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Violations(BTreeMap<Field, Vec<ViolationKind>>);

impl Violations {
    /// Empty violation set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation.
    pub fn push(&mut self, violation: Violation) {
        self.0.entry(violation.field).or_default().push(violation.kind);
    }

    /// Kinds reported for `field`, empty when the field passed.
    #[must_use]
    pub fn on(&self, field: Field) -> &[ViolationKind] {
        self.0.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether `field` failed with `kind`.
    #[must_use]
    pub fn contains(&self, field: Field, kind: ViolationKind) -> bool {
        self.on(field).contains(&kind)
    }

    /// Whether every rule passed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of violations across all fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Iterate violations in field order.
    pub fn iter(&self) -> impl Iterator<Item = Violation> + '_ {
        self.0
            .iter()
            .flat_map(|(field, kinds)| kinds.iter().map(|kind| Violation::new(*field, *kind)))
    }
}

impl FromIterator<Violation> for Violations {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        let mut violations = Self::new();
        for violation in iter {
            violations.push(violation);
        }
        violations
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for violation in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{}: {}", violation.field, violation.kind)?;
        }
        Ok(())
    }
}

/// Snapshot of store state consulted by the rules.
///
/// Built from a single read; holding one reserves nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuleContext {
    mail_taken: bool,
}

impl RuleContext {
    /// Context carrying the result of the mail existence lookup.
    #[must_use]
    pub const fn new(mail_taken: bool) -> Self {
        Self { mail_taken }
    }

    /// Context for a store holding no records.
    #[must_use]
    pub const fn detached() -> Self {
        Self::new(false)
    }

    /// Whether a stored enquete already uses the candidate's mail.
    #[must_use]
    pub const fn mail_taken(&self) -> bool {
        self.mail_taken
    }
}

/// Single validation rule.
pub type Rule = fn(&FoodEnquete, &RuleContext) -> Option<Violation>;

/// Rules in evaluation order.
pub const RULES: &[Rule] = &[
    name_presence,
    mail_presence,
    mail_format,
    mail_uniqueness,
    age_presence,
    food_presence,
    eligibility::present_eligibility,
];

/// Evaluate every rule against `enquete`.
///
/// Pure: the same record and context always yield the same violations.
#[must_use]
pub fn evaluate(enquete: &FoodEnquete, context: &RuleContext) -> Violations {
    RULES
        .iter()
        .filter_map(|rule| rule(enquete, context))
        .collect()
}

static MAIL_RE: OnceLock<Regex> = OnceLock::new();

fn mail_regex() -> &'static Regex {
    MAIL_RE.get_or_init(|| {
        // ASCII classes only; `\w`, `\d` and case folding are Unicode-aware here.
        let pattern = r"^[A-Za-z0-9_+\-.]+@[A-Za-z0-9\-.]+\.[A-Za-z]+$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("mail regex failed to compile: {error}"))
    })
}

/// Whether `mail` matches the local-part `@` dotted-domain grammar.
///
/// # Examples
/// ```
/// use enquete_backend::domain::validation::is_valid_mail;
///
/// assert!(is_valid_mail("taro.tanaka@example.com"));
/// assert!(!is_valid_mail("taro.tanaka"));
/// ```
#[must_use]
pub fn is_valid_mail(mail: &str) -> bool {
    mail_regex().is_match(mail)
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|text| text.trim().is_empty())
}

fn blank_unless(field: Field, present: bool) -> Option<Violation> {
    (!present).then_some(Violation::new(field, ViolationKind::Blank))
}

fn name_presence(enquete: &FoodEnquete, _context: &RuleContext) -> Option<Violation> {
    blank_unless(Field::Name, !is_blank(enquete.name.as_deref()))
}

fn mail_presence(enquete: &FoodEnquete, _context: &RuleContext) -> Option<Violation> {
    blank_unless(Field::Mail, !is_blank(enquete.mail.as_deref()))
}

fn mail_format(enquete: &FoodEnquete, _context: &RuleContext) -> Option<Violation> {
    let mail = enquete
        .mail
        .as_deref()
        .filter(|mail| !mail.trim().is_empty())?;
    (!is_valid_mail(mail)).then_some(Violation::new(Field::Mail, ViolationKind::Invalid))
}

fn mail_uniqueness(enquete: &FoodEnquete, context: &RuleContext) -> Option<Violation> {
    let grammar_valid = enquete.mail.as_deref().is_some_and(is_valid_mail);
    (grammar_valid && context.mail_taken())
        .then_some(Violation::new(Field::Mail, ViolationKind::Taken))
}

fn age_presence(enquete: &FoodEnquete, _context: &RuleContext) -> Option<Violation> {
    blank_unless(Field::Age, enquete.age.is_some())
}

fn food_presence(enquete: &FoodEnquete, _context: &RuleContext) -> Option<Violation> {
    blank_unless(Field::FoodId, enquete.food_id.is_some())
}
