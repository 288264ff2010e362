//! Rendering of violations and score labels through a [`MessageCatalog`].
//!
//! Catalogue key layout:
//!
//! - `errors.format`: full message template with `{attribute}` and
//!   `{message}` placeholders.
//! - `errors.messages.<kind>`: generic text for a violation kind.
//! - `errors.models.food_enquete.<field>.<kind>`: text overriding the
//!   generic one for one field.
//! - `attributes.food_enquete.<field>`: human attribute label.
//! - `common.score.<label>`: satisfaction label text.

use super::common_display::ScoreLabel;
use super::ports::MessageCatalog;
use super::validation::{Field, Violation, Violations};

/// Key of the full message template.
pub const FORMAT_KEY: &str = "errors.format";

const DEFAULT_FORMAT: &str = "{attribute} {message}";

/// Catalogue key of the human label for `field`.
#[must_use]
pub fn attribute_key(field: Field) -> String {
    format!("attributes.food_enquete.{}", field.as_str())
}

/// Catalogue key holding the text for `violation`.
///
/// Prefers the field-specific override and falls back to the generic text
/// for the violation kind.
#[must_use]
pub fn message_key<C>(catalog: &C, violation: Violation) -> String
where
    C: MessageCatalog + ?Sized,
{
    let specific = format!(
        "errors.models.food_enquete.{}.{}",
        violation.field.as_str(),
        violation.kind.as_str()
    );
    if catalog.lookup(&specific).is_some() {
        return specific;
    }
    format!("errors.messages.{}", violation.kind.as_str())
}

/// Human-readable message for one violation.
#[must_use]
pub fn full_message<C>(catalog: &C, violation: Violation) -> String
where
    C: MessageCatalog + ?Sized,
{
    let attribute_key = attribute_key(violation.field);
    let message_key = message_key(catalog, violation);
    let template = catalog.lookup(FORMAT_KEY).unwrap_or(DEFAULT_FORMAT);

    fill_template(
        template,
        catalog.translate(&attribute_key),
        catalog.translate(&message_key),
    )
}

/// Substitute both placeholders in one left-to-right pass, so text inserted
/// for one placeholder is never rescanned.
fn fill_template(template: &str, attribute: &str, message: &str) -> String {
    let placeholders = [("{attribute}", attribute), ("{message}", message)];
    let mut filled = String::with_capacity(template.len() + attribute.len() + message.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let (head, tail) = rest.split_at(start);
        filled.push_str(head);
        let (text, after) = placeholders
            .iter()
            .find_map(|&(token, value)| tail.strip_prefix(token).map(|after| (value, after)))
            .unwrap_or_else(|| tail.split_at(1));
        filled.push_str(text);
        rest = after;
    }
    filled.push_str(rest);
    filled
}

/// Human-readable messages for every violation, in field order.
#[must_use]
pub fn full_messages<C>(catalog: &C, violations: &Violations) -> Vec<String>
where
    C: MessageCatalog + ?Sized,
{
    violations
        .iter()
        .map(|violation| full_message(catalog, violation))
        .collect()
}

/// Localised text for a satisfaction label.
#[must_use]
pub fn score_text<C>(catalog: &C, label: ScoreLabel) -> String
where
    C: MessageCatalog + ?Sized,
{
    catalog.translate(label.key()).to_owned()
}
