//! Common test utilities for editor integration tests.

use donor_page_core::{Amount, AmountConfiguration, Interval, SwagConfiguration};
use donor_page_editors::{EditorContext, PagePreview, RecordingHost};

/// Host and context for one editor session.
pub struct TestHarness<C> {
    /// Records every callback from the editor
    pub host: RecordingHost<C>,
    /// Context passed to `load`
    pub context: EditorContext,
}

impl<C> TestHarness<C> {
    /// Creates a harness with all intervals enabled.
    pub fn new() -> Self {
        Self {
            host: RecordingHost::new(),
            context: EditorContext::default(),
        }
    }

    /// Creates a harness with only `intervals` enabled.
    pub fn with_intervals(intervals: &[Interval]) -> Self {
        Self {
            host: RecordingHost::new(),
            context: EditorContext::with_intervals(intervals.iter().copied()),
        }
    }

    /// Creates a harness whose page offers the complimentary subscription.
    pub fn with_nyt_comp() -> Self {
        let mut harness = Self::new();
        harness.context.page_preview = PagePreview {
            offer_nyt_comp: true,
        };
        harness
    }
}

/// Whole-unit amount.
pub fn amt(units: u64) -> Amount {
    Amount::from_units(units).expect("positive amount")
}

/// Amount content parsed from JSON.
pub fn amount_content(json: serde_json::Value) -> AmountConfiguration {
    serde_json::from_value(json).expect("valid amount content")
}

/// Swag content parsed from JSON.
pub fn swag_content(json: serde_json::Value) -> SwagConfiguration {
    serde_json::from_value(json).expect("valid swag content")
}
