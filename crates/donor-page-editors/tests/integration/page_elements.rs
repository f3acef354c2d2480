//! Integration tests for checking stored page elements.

use donor_page_core::{ElementKind, Interval, PageElement};
use donor_page_editors::{check_element, EditorContext, Field};
use serde_json::json;

fn element(value: serde_json::Value) -> PageElement {
    PageElement::from_value(value).unwrap().unwrap()
}

#[test]
fn test_legacy_amount_element_reported_changed() {
    let report = check_element(
        element(json!({
            "type": "DAmount",
            "uuid": "amount-1",
            "content": {"allowOther": true, "options": {"one_time": [10, 25]}}
        })),
        &EditorContext::with_intervals([Interval::OneTime]),
    );
    assert_eq!(report.uuid(), "amount-1");
    assert_eq!(report.kind(), ElementKind::Amount);
    assert!(report.changed);
    assert!(report.ready);

    let stored = report.element.to_value().unwrap();
    assert_eq!(stored["content"]["options"]["one_time"], json!([10, 25, "other"]));
    assert_eq!(stored["content"]["defaults"]["one_time"], json!(10));
    assert!(stored["content"].get("allowOther").is_none());
}

#[test]
fn test_incomplete_swag_element_not_ready() {
    let report = check_element(
        element(json!({"type": "DSwag", "uuid": "swag-1", "content": {"swagThreshold": 50}})),
        &EditorContext::default(),
    );
    assert!(!report.ready);
    assert!(!report.changed);
    assert!(report.errors.has(Field::SwagName));
    assert!(report.errors.has(Field::NewOption));
    assert!(!report.errors.has(Field::Threshold));
}

#[test]
fn test_complete_swag_element_ready() {
    let report = check_element(
        element(json!({
            "type": "DSwag",
            "uuid": "swag-2",
            "content": {
                "swagThreshold": 50,
                "swags": [{"swagName": "Size", "swagOptions": ["S"]}]
            }
        })),
        &EditorContext::default(),
    );
    assert!(report.ready);
    assert!(report.errors.is_empty());
}
