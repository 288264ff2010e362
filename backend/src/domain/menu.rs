//! Dish and gift catalogues referenced by `food_id` and `present_id`.
//!
//! The catalogues resolve identifiers to display names. Validation never
//! consults them: an unknown identifier simply has no display name.

use serde::Serialize;

use super::common_display::tax_included_price;
use super::eligibility::GIFT_ALCOHOL_ID;

/// A dish respondents can rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dish {
    /// Catalogue identifier stored in `food_id`.
    pub id: i32,
    /// Display name.
    pub name: &'static str,
    /// Menu price before tax, in yen.
    pub base_price: i64,
}

impl Dish {
    /// Menu price including tax, floored to whole yen.
    #[must_use]
    pub const fn price_with_tax(&self) -> i64 {
        tax_included_price(self.base_price)
    }
}

/// A gift respondents can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Gift {
    /// Catalogue identifier stored in `present_id`.
    pub id: i32,
    /// Display name.
    pub name: &'static str,
}

impl Gift {
    /// Whether only adults may choose this gift.
    #[must_use]
    pub const fn adults_only(&self) -> bool {
        self.id == GIFT_ALCOHOL_ID
    }
}

/// Dishes on the menu, in identifier order.
pub const DISHES: &[Dish] = &[
    Dish {
        id: 1,
        name: "オムライス",
        base_price: 800,
    },
    Dish {
        id: 2,
        name: "やきそば",
        base_price: 650,
    },
    Dish {
        id: 3,
        name: "ラーメン",
        base_price: 780,
    },
];

/// Gifts on offer, in identifier order.
pub const GIFTS: &[Gift] = &[
    Gift {
        id: GIFT_ALCOHOL_ID,
        name: "ビール飲み放題",
    },
    Gift {
        id: 2,
        name: "ソフトドリンク飲み放題",
    },
    Gift {
        id: 3,
        name: "デザート無料券",
    },
];

/// Look up a dish by `food_id`.
#[must_use]
pub fn dish(id: i32) -> Option<&'static Dish> {
    DISHES.iter().find(|dish| dish.id == id)
}

/// Look up a gift by `present_id`.
#[must_use]
pub fn gift(id: i32) -> Option<&'static Gift> {
    GIFTS.iter().find(|gift| gift.id == id)
}
