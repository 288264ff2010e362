//! Behavioural tests for the tax and satisfaction display shared by record types.

use enquete_backend::domain::menu::{self, DISHES};
use enquete_backend::domain::{
    CommonDisplay, EnqueteId, FoodEnquete, ScoreLabel, StoredEnquete, tax_included_price,
};
use rstest::rstest;

fn stored(score: Option<i32>) -> StoredEnquete {
    StoredEnquete::new(
        EnqueteId::new(1).expect("valid id"),
        FoodEnquete {
            score,
            ..FoodEnquete::new()
        },
    )
}

#[rstest]
#[case(100, 108)]
#[case(101, 109)]
#[case(650, 702)]
fn both_record_types_floor_the_tax_included_price(#[case] base: i64, #[case] expected: i64) {
    assert_eq!(FoodEnquete::new().tax_included_price(base), expected);
    assert_eq!(stored(None).tax_included_price(base), expected);
    assert_eq!(tax_included_price(base), expected);
}

#[rstest]
#[case(Some(1), "bad")]
#[case(Some(2), "normal")]
#[case(Some(3), "good")]
#[case(Some(0), "unknown")]
#[case(Some(4), "unknown")]
#[case(None, "unknown")]
fn both_record_types_label_the_score(#[case] score: Option<i32>, #[case] expected: &str) {
    let enquete = FoodEnquete {
        score,
        ..FoodEnquete::new()
    };

    assert_eq!(enquete.view_score().as_str(), expected);
    assert_eq!(stored(score).view_score().as_str(), expected);
}

#[rstest]
fn menu_prices_use_the_same_rounding() {
    for dish in DISHES {
        assert_eq!(dish.price_with_tax(), tax_included_price(dish.base_price));
    }
    assert_eq!(menu::dish(2).map(|dish| dish.name), Some("やきそば"));
    assert_eq!(ScoreLabel::from_score(Some(3)), ScoreLabel::Good);
}
