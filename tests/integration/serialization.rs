//! Violations serialized for reports (requires the `serde` feature).

use super::common::{expect_violation, PROVIDED, REQUIRES_PROVIDED};
use contract::{requires, Category};
use serde_json::json;

#[test]
fn test_violation_serializes_category_and_message() {
    let violation = expect_violation(|| requires(false, PROVIDED));
    let value = serde_json::to_value(&violation).unwrap();
    assert_eq!(
        value,
        json!({
            "category": "requires",
            "message": REQUIRES_PROVIDED,
        })
    );
}

#[test]
fn test_category_serializes_as_snake_case_name() {
    for category in Category::ALL {
        let value = serde_json::to_value(category).unwrap();
        assert_eq!(value, json!(category.name()));
    }
}
