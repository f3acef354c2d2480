//! Integration tests for the amount editor.

use donor_page_core::{AmountConfiguration, Interval};
use donor_page_editors::{AmountEditor, Field};
use proptest::prelude::*;
use serde_json::json;

use crate::common::{amount_content, amt, TestHarness};

#[test]
fn test_add_then_remove_default_scenario() {
    let mut harness = TestHarness::with_intervals(&[Interval::OneTime]);
    let content = amount_content(json!({
        "options": {"one_time": [100, 200, 300]},
        "defaults": {"one_time": 200}
    }));
    let mut editor = AmountEditor::load(content, &harness.context, &mut harness.host);

    assert!(editor.add(Interval::OneTime, amt(150), &mut harness.host));
    assert_eq!(
        serde_json::to_value(harness.host.last_content().unwrap()).unwrap()["options"]["one_time"],
        json!([100, 150, 200, 300])
    );

    assert!(editor.remove(Interval::OneTime, amt(200), &mut harness.host));
    let saved = serde_json::to_value(harness.host.last_content().unwrap()).unwrap();
    assert_eq!(saved["options"]["one_time"], json!([100, 150, 300]));
    assert_eq!(saved["defaults"]["one_time"], json!(100));
    assert_eq!(harness.host.changes.len(), 2);
}

#[test]
fn test_legacy_content_migrated_once_on_load() {
    let mut harness = TestHarness::with_intervals(&[Interval::OneTime]);
    let legacy = amount_content(json!({
        "allowOther": true,
        "options": {"one_time": [1, 2, 3]},
        "defaults": {"one_time": 1}
    }));

    let editor = AmountEditor::load(legacy, &harness.context, &mut harness.host);
    assert_eq!(harness.host.changes.len(), 1);
    let migrated = harness.host.last_content().unwrap().clone();
    assert!(!migrated.has_legacy_fields());
    assert_eq!(
        serde_json::to_value(&migrated).unwrap()["options"]["one_time"],
        json!([1, 2, 3, "other"])
    );
    assert_eq!(editor.content(), &migrated);

    // Reopening the migrated content is a no-op.
    let mut reopened = TestHarness::with_intervals(&[Interval::OneTime]);
    let _ = AmountEditor::load(migrated, &reopened.context, &mut reopened.host);
    assert!(reopened.host.changes.is_empty());
}

#[test]
fn test_stale_default_repaired_on_load() {
    let mut harness = TestHarness::with_intervals(&[Interval::OneTime, Interval::Yearly]);
    let content = amount_content(json!({
        "options": {"one_time": [10, 20], "year": [120, 240]},
        "defaults": {"one_time": 20, "year": 500}
    }));
    let editor = AmountEditor::load(content, &harness.context, &mut harness.host);
    assert_eq!(editor.default_for(Interval::OneTime), Some(amt(20)));
    assert_eq!(editor.default_for(Interval::Yearly), Some(amt(120)));
    assert_eq!(harness.host.changes.len(), 1);
}

#[test]
fn test_update_never_disabled() {
    let mut harness = TestHarness::new();
    let mut editor = AmountEditor::load(
        AmountConfiguration::new(),
        &harness.context,
        &mut harness.host,
    );
    editor.set_new_amount_text(Interval::Monthly, "oops");
    editor.add_new_amount(Interval::Monthly, &mut harness.host);
    assert!(editor.errors().has(Field::Amounts(Interval::Monthly)));
    assert_eq!(harness.host.update_disabled, vec![false]);
}

#[derive(Debug, Clone)]
enum Action {
    Add(u64),
    Remove(u64),
    Default(u64),
    Other(bool),
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (1u64..40).prop_map(Action::Add),
        (1u64..40).prop_map(Action::Remove),
        (1u64..40).prop_map(Action::Default),
        any::<bool>().prop_map(Action::Other),
    ]
}

proptest! {
    #[test]
    fn test_editor_invariants_hold(actions in proptest::collection::vec(action(), 0..30)) {
        let mut harness = TestHarness::with_intervals(&[Interval::OneTime]);
        let content = amount_content(json!({"options": {"one_time": [5]}}));
        let mut editor = AmountEditor::load(content, &harness.context, &mut harness.host);

        for action in actions {
            match action {
                Action::Add(u) => { editor.add(Interval::OneTime, amt(u), &mut harness.host); }
                Action::Remove(u) => { editor.remove(Interval::OneTime, amt(u), &mut harness.host); }
                Action::Default(u) => { editor.set_default(Interval::OneTime, amt(u), &mut harness.host); }
                Action::Other(b) => { editor.set_include_other(Interval::OneTime, b, &mut harness.host); }
            }
            let options = editor.options(Interval::OneTime);
            prop_assert!(options.is_normalized());
            prop_assert!(options.amount_count() >= 1);
            let default = editor.default_for(Interval::OneTime).unwrap();
            prop_assert!(options.contains(default));
        }

        if let Some(last) = harness.host.last_content() {
            prop_assert_eq!(last, editor.content());
        }
    }

    #[test]
    fn test_editor_never_empties_stored_duplicates(
        stored in proptest::collection::vec(1u64..6, 1..6),
        actions in proptest::collection::vec(action(), 0..30),
    ) {
        let mut harness = TestHarness::with_intervals(&[Interval::OneTime]);
        let content = amount_content(json!({"options": {"one_time": stored}}));
        let mut editor = AmountEditor::load(content, &harness.context, &mut harness.host);

        for action in actions {
            match action {
                Action::Add(u) => { editor.add(Interval::OneTime, amt(u), &mut harness.host); }
                Action::Remove(u) => { editor.remove(Interval::OneTime, amt(u), &mut harness.host); }
                Action::Default(u) => { editor.set_default(Interval::OneTime, amt(u), &mut harness.host); }
                Action::Other(b) => { editor.set_include_other(Interval::OneTime, b, &mut harness.host); }
            }
            let options = editor.options(Interval::OneTime);
            prop_assert!(options.normalized().amount_count() >= 1);
            let default = editor.default_for(Interval::OneTime).unwrap();
            prop_assert!(options.contains(default));
        }
    }
}
