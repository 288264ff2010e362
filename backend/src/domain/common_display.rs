//! Display computations shared by every record type that shows prices or a
//! satisfaction score.
//!
//! Both computations are pure. Record types opt in by implementing
//! [`CommonDisplay`]; the provided methods delegate to the free functions so
//! the formula lives in one place.

use serde::{Deserialize, Serialize};

/// Consumption tax rate expressed as an exact fraction.
///
/// Rates are applied with integer arithmetic and floored, so a price never
/// picks up a rounding yen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxRate {
    percent: i64,
}

impl TaxRate {
    /// Build a rate from a whole percentage.
    #[must_use]
    pub const fn percent(percent: i64) -> Self {
        Self { percent }
    }

    /// Percentage points added on top of the base price.
    #[must_use]
    pub const fn as_percent(self) -> i64 {
        self.percent
    }

    /// Apply the rate to `base_price`, flooring the result.
    ///
    /// # Examples
    /// ```
    /// use enquete_backend::domain::TaxRate;
    ///
    /// assert_eq!(TaxRate::percent(10).apply(101), 111);
    /// ```
    #[must_use]
    pub const fn apply(self, base_price: i64) -> i64 {
        base_price
            .saturating_mul(100 + self.percent)
            .div_euclid(100)
    }
}

/// Rate in force for enquete pricing.
pub const TAX_RATE: TaxRate = TaxRate::percent(8);

/// Tax-inclusive price for `base_price` at [`TAX_RATE`], floored.
///
/// # Examples
/// ```
/// use enquete_backend::domain::tax_included_price;
///
/// assert_eq!(tax_included_price(100), 108);
/// assert_eq!(tax_included_price(101), 109);
/// ```
#[must_use]
pub const fn tax_included_price(base_price: i64) -> i64 {
    TAX_RATE.apply(base_price)
}

/// Satisfaction label derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreLabel {
    /// Score 1.
    Bad,
    /// Score 2.
    Normal,
    /// Score 3.
    Good,
    /// Unset or out of range.
    Unknown,
}

impl ScoreLabel {
    /// Map a score onto its label. Total over every input.
    #[must_use]
    pub const fn from_score(score: Option<i32>) -> Self {
        match score {
            Some(1) => Self::Bad,
            Some(2) => Self::Normal,
            Some(3) => Self::Good,
            _ => Self::Unknown,
        }
    }

    /// Stable identifier used in serialised reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bad => "bad",
            Self::Normal => "normal",
            Self::Good => "good",
            Self::Unknown => "unknown",
        }
    }

    /// Message catalogue key for the label text.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Bad => "common.score.bad",
            Self::Normal => "common.score.normal",
            Self::Good => "common.score.good",
            Self::Unknown => "common.score.unknown",
        }
    }
}

/// Shared display capability for record types carrying a score and prices.
pub trait CommonDisplay {
    /// Raw satisfaction score, if one was recorded.
    fn score(&self) -> Option<i32>;

    /// Tax-inclusive price for `base_price`.
    fn tax_included_price(&self, base_price: i64) -> i64 {
        tax_included_price(base_price)
    }

    /// Satisfaction label for the recorded score.
    fn view_score(&self) -> ScoreLabel {
        ScoreLabel::from_score(self.score())
    }
}


#[cfg(test)]
mod tests {
    //! Unit tests for tax and score computations.

    use super::*;
    use rstest::rstest;

    struct Scored(Option<i32>);

    impl CommonDisplay for Scored {
        fn score(&self) -> Option<i32> {
            self.0
        }
    }

    #[rstest]
    #[case(100, 108)]
    #[case(101, 109)]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(13, 14)]
    #[case(-101, -110)]
    fn tax_included_price_floors(#[case] base: i64, #[case] expected: i64) {
        assert_eq!(tax_included_price(base), expected);
    }

    #[rstest]
    fn tax_rate_is_eight_percent() {
        assert_eq!(TAX_RATE.as_percent(), 8);
    }

    #[rstest]
    #[case(Some(1), ScoreLabel::Bad)]
    #[case(Some(2), ScoreLabel::Normal)]
    #[case(Some(3), ScoreLabel::Good)]
    #[case(Some(0), ScoreLabel::Unknown)]
    #[case(Some(4), ScoreLabel::Unknown)]
    #[case(Some(-1), ScoreLabel::Unknown)]
    #[case(Some(i32::MAX), ScoreLabel::Unknown)]
    #[case(None, ScoreLabel::Unknown)]
    fn score_label_is_total(#[case] score: Option<i32>, #[case] expected: ScoreLabel) {
        assert_eq!(ScoreLabel::from_score(score), expected);
    }

    #[rstest]
    fn score_label_keys_are_namespaced() {
        assert_eq!(ScoreLabel::Good.key(), "common.score.good");
        assert_eq!(ScoreLabel::Unknown.as_str(), "unknown");
    }

    #[rstest]
    fn shared_scenarios_hold_for_any_implementer() {
        shared_scenarios::assert_price_display(&Scored(None));
        shared_scenarios::assert_score_display(Scored);
    }
}
