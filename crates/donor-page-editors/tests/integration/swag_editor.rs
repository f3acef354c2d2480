//! Integration tests for the swag editor.

use donor_page_core::{Amount, SwagConfiguration};
use donor_page_editors::{Field, SwagEditor};
use serde_json::json;

use crate::common::{swag_content, TestHarness};

fn named_group_content() -> SwagConfiguration {
    swag_content(json!({
        "swags": [{"swagName": "Size", "swagOptions": ["Small"]}]
    }))
}

#[test]
fn test_threshold_text_scenario() {
    let mut harness = TestHarness::new();
    let mut editor = SwagEditor::load(named_group_content(), &harness.context, &mut harness.host);
    assert_eq!(harness.host.is_update_disabled(), Some(true));

    editor.set_threshold("abc", &mut harness.host);
    assert_eq!(
        editor.errors().get(Field::Threshold),
        Some("Must be a positive number with at most two decimal places")
    );
    assert_eq!(harness.host.is_update_disabled(), Some(true));

    editor.set_threshold("50.5", &mut harness.host);
    assert!(editor.errors().is_empty());
    assert_eq!(harness.host.is_update_disabled(), Some(false));
    assert_eq!(
        harness.host.last_content().unwrap().swag_threshold(),
        Amount::from_cents(5_050)
    );
    assert_eq!(harness.host.update_disabled, vec![true, false]);
}

#[test]
fn test_readiness_requires_all_three() {
    let mut harness = TestHarness::new();
    let mut editor =
        SwagEditor::load(SwagConfiguration::new(), &harness.context, &mut harness.host);

    editor.set_threshold("25", &mut harness.host);
    assert!(!editor.is_ready());
    editor.set_group_name("Color", &mut harness.host);
    assert!(!editor.is_ready());
    editor.add_option("Red", &mut harness.host);
    assert!(editor.is_ready());

    editor.remove_option("Red", &mut harness.host);
    assert!(!editor.is_ready());
    assert_eq!(harness.host.update_disabled, vec![true, false, true]);
}

#[test]
fn test_duplicate_option_after_normalization() {
    let mut harness = TestHarness::new();
    let content = swag_content(json!({
        "swagThreshold": 10,
        "swags": [{"swagName": "Size", "swagOptions": ["small "]}]
    }));
    let mut editor = SwagEditor::load(content, &harness.context, &mut harness.host);
    assert!(!editor.add_option("Small", &mut harness.host));
    assert_eq!(
        editor.errors().get(Field::NewOption),
        Some("This option has already been added")
    );
    assert!(harness.host.changes.is_empty());
}

#[test]
fn test_saved_content_shape() {
    let mut harness = TestHarness::with_nyt_comp();
    let mut editor =
        SwagEditor::load(SwagConfiguration::new(), &harness.context, &mut harness.host);
    editor.set_threshold("240", &mut harness.host);
    editor.set_group_name("  Tote color ", &mut harness.host);
    editor.set_new_option_text("Navy");
    editor.add_new_option(&mut harness.host);
    editor.set_offer_nyt_comp(true, &mut harness.host);
    editor.set_opt_out_default(true, &mut harness.host);

    let saved = serde_json::to_value(editor.into_content()).unwrap();
    assert_eq!(
        saved,
        json!({
            "swagThreshold": 240,
            "swags": [{"swagName": "Tote color", "swagOptions": ["Navy"]}],
            "optOutDefault": true,
            "offerNytComp": true
        })
    );
}

#[test]
fn test_extra_groups_preserved() {
    let mut harness = TestHarness::new();
    let content = swag_content(json!({
        "swagThreshold": 10,
        "swags": [
            {"swagName": "Size", "swagOptions": ["S"]},
            {"swagName": "Color", "swagOptions": ["Red"]}
        ]
    }));
    let mut editor = SwagEditor::load(content, &harness.context, &mut harness.host);
    editor.add_option("M", &mut harness.host);
    let saved = harness.host.last_content().unwrap();
    assert_eq!(saved.swags().len(), 2);
    assert_eq!(saved.swags()[0].swag_options.options(), ["S", "M"]);
    assert_eq!(saved.swags()[1].swag_name, "Color");
}
