//! Interface between editors and the page builder that hosts them.

use donor_page_core::{EditorLimits, Interval};

/// Callbacks a page builder provides to an element editor.
///
/// `C` is the element content type the editor works on.
pub trait EditorHost<C> {
    /// Receives a complete replacement for the element content.
    fn on_change_element_content(&mut self, content: C);

    /// Enables or disables the host's "Update" action.
    fn set_update_disabled(&mut self, disabled: bool);
}

/// Page-level flags that gate optional editor controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagePreview {
    /// The organization offers a complimentary subscription benefit.
    pub offer_nyt_comp: bool,
}

/// Everything an editor receives from the host besides the content itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorContext {
    /// Intervals enabled on the page, in display order.
    pub contribution_intervals: Vec<Interval>,
    /// Page flags.
    pub page_preview: PagePreview,
    /// Validation limits for free-text input.
    pub limits: EditorLimits,
}

impl Default for EditorContext {
    fn default() -> Self {
        Self {
            contribution_intervals: Interval::ALL.to_vec(),
            page_preview: PagePreview::default(),
            limits: EditorLimits::default(),
        }
    }
}

impl EditorContext {
    /// Creates a context with the given intervals and default flags and limits.
    pub fn with_intervals(intervals: impl IntoIterator<Item = Interval>) -> Self {
        let mut contribution_intervals: Vec<Interval> = Vec::new();
        for interval in intervals {
            if !contribution_intervals.contains(&interval) {
                contribution_intervals.push(interval);
            }
        }
        Self {
            contribution_intervals,
            ..Self::default()
        }
    }
}

/// Forwards save-readiness to the host only when it changes.
#[derive(Debug, Clone, Default)]
pub struct UpdateGate {
    last: Option<bool>,
}

impl UpdateGate {
    /// Reports `disabled` to `host` unless it was the last value reported.
    pub fn report<C, H: EditorHost<C>>(&mut self, disabled: bool, host: &mut H) {
        if self.last == Some(disabled) {
            return;
        }
        tracing::debug!(disabled, "Update action availability changed");
        self.last = Some(disabled);
        host.set_update_disabled(disabled);
    }

    /// The last value reported, if any.
    pub fn last(&self) -> Option<bool> {
        self.last
    }
}

/// A host that records every callback. Useful for tests and offline checks.
#[derive(Debug, Clone)]
pub struct RecordingHost<C> {
    /// Every content object received, oldest first.
    pub changes: Vec<C>,
    /// Every save-readiness report received, oldest first.
    pub update_disabled: Vec<bool>,
}

impl<C> Default for RecordingHost<C> {
    fn default() -> Self {
        Self {
            changes: Vec::new(),
            update_disabled: Vec::new(),
        }
    }
}

impl<C> RecordingHost<C> {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent content received.
    pub fn last_content(&self) -> Option<&C> {
        self.changes.last()
    }

    /// The most recent save-readiness report.
    pub fn is_update_disabled(&self) -> Option<bool> {
        self.update_disabled.last().copied()
    }
}

impl<C> EditorHost<C> for RecordingHost<C> {
    fn on_change_element_content(&mut self, content: C) {
        self.changes.push(content);
    }

    fn set_update_disabled(&mut self, disabled: bool) {
        self.update_disabled.push(disabled);
    }
}
