//! Editor controller for the "Amount" element.
//!
//! One [`NumericOptionSet`] per enabled interval, each with add, remove,
//! set-default, and an independent "include other" toggle. Content is
//! migrated and its defaults repaired on load, and defaults are repaired
//! again after every mutation.

use std::collections::BTreeMap;

use donor_page_core::{
    migrate, Amount, AmountConfiguration, Interval, NumericOptionSet, OptionError,
};

use crate::field::{Field, FieldErrors};
use crate::host::{EditorContext, EditorHost, UpdateGate};

/// Controller for an amount element.
///
/// Holds a snapshot of the host's content plus transient input: the
/// "new amount" text per interval and the current field errors.
#[derive(Debug, Clone)]
pub struct AmountEditor {
    content: AmountConfiguration,
    intervals: Vec<Interval>,
    drafts: BTreeMap<Interval, String>,
    errors: FieldErrors,
    gate: UpdateGate,
}

impl AmountEditor {
    /// Opens an editor on `content`.
    ///
    /// Legacy content is migrated and stale defaults are repaired; if either
    /// changes anything, the host receives the result immediately.
    pub fn load<H>(content: AmountConfiguration, context: &EditorContext, host: &mut H) -> Self
    where
        H: EditorHost<AmountConfiguration>,
    {
        let migrated = migrate(&content);
        let was_migrated = migrated.is_some();
        let loaded = migrated.unwrap_or(content);
        let repaired = loaded.repair_defaults(&context.contribution_intervals);
        let changed = was_migrated || repaired != loaded;

        let mut editor = Self {
            content: repaired,
            intervals: context.contribution_intervals.clone(),
            drafts: BTreeMap::new(),
            errors: FieldErrors::new(),
            gate: UpdateGate::default(),
        };
        if changed {
            host.on_change_element_content(editor.content.clone());
        }
        editor.gate.report(editor.is_update_disabled(), host);
        editor
    }

    /// The current content snapshot.
    pub fn content(&self) -> &AmountConfiguration {
        &self.content
    }

    /// Consumes the editor, returning the content to hand back on save.
    pub fn into_content(self) -> AmountConfiguration {
        self.content
    }

    /// Enabled intervals in display order.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Returns `true` if `interval` is enabled on the page.
    pub fn is_enabled(&self, interval: Interval) -> bool {
        self.intervals.contains(&interval)
    }

    /// The options for `interval`; empty if none are stored yet.
    pub fn options(&self, interval: Interval) -> NumericOptionSet {
        self.content.options(interval).cloned().unwrap_or_default()
    }

    /// The default amount for `interval`.
    pub fn default_for(&self, interval: Interval) -> Option<Amount> {
        self.content.default_for(interval)
    }

    /// Whether the remove control for `interval` should be enabled.
    pub fn can_remove(&self, interval: Interval) -> bool {
        self.options(interval).can_remove()
    }

    /// The "new amount" text for `interval`.
    pub fn new_amount_text(&self, interval: Interval) -> &str {
        self.drafts.get(&interval).map(String::as_str).unwrap_or_default()
    }

    /// Current field errors.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Amount content is always savable once loaded.
    pub fn is_update_disabled(&self) -> bool {
        false
    }

    /// Records a keystroke in the "new amount" input.
    pub fn set_new_amount_text(&mut self, interval: Interval, text: impl Into<String>) {
        self.drafts.insert(interval, text.into());
        self.errors.clear(Field::Amounts(interval));
    }

    /// Parses the "new amount" text for `interval` and adds it.
    ///
    /// The input is cleared only when the amount was added.
    pub fn add_new_amount<H>(&mut self, interval: Interval, host: &mut H) -> bool
    where
        H: EditorHost<AmountConfiguration>,
    {
        let parsed = self.new_amount_text(interval).parse::<Amount>();
        let added = match parsed {
            Ok(amount) => self.add(interval, amount, host),
            Err(err) => {
                self.reject(Field::Amounts(interval), err);
                false
            }
        };
        if added {
            self.drafts.remove(&interval);
        }
        added
    }

    /// Adds `amount` to `interval`.
    pub fn add<H>(&mut self, interval: Interval, amount: Amount, host: &mut H) -> bool
    where
        H: EditorHost<AmountConfiguration>,
    {
        if !self.check_enabled(interval) {
            return false;
        }
        match self.options(interval).add(amount) {
            Ok(options) => {
                self.errors.clear(Field::Amounts(interval));
                let next = self.content.with_options(interval, options);
                self.commit(next, host);
                true
            }
            Err(err) => {
                self.reject(Field::Amounts(interval), err);
                false
            }
        }
    }

    /// Removes `amount` from `interval`. The last fixed amount stays.
    pub fn remove<H>(&mut self, interval: Interval, amount: Amount, host: &mut H) -> bool
    where
        H: EditorHost<AmountConfiguration>,
    {
        if !self.check_enabled(interval) {
            return false;
        }
        match self.options(interval).remove(amount) {
            Ok(options) => {
                self.errors.clear(Field::Amounts(interval));
                let next = self.content.with_options(interval, options);
                self.commit(next, host);
                true
            }
            Err(err) => {
                self.reject(Field::Amounts(interval), err);
                false
            }
        }
    }

    /// Makes `amount` the default for `interval`. It must already be offered.
    pub fn set_default<H>(&mut self, interval: Interval, amount: Amount, host: &mut H) -> bool
    where
        H: EditorHost<AmountConfiguration>,
    {
        if !self.check_enabled(interval) {
            return false;
        }
        if !self.options(interval).contains(amount) {
            self.reject(Field::DefaultAmount(interval), OptionError::AmountNotFound);
            return false;
        }
        self.errors.clear(Field::DefaultAmount(interval));
        let next = self.content.with_default(interval, Some(amount));
        self.commit(next, host);
        true
    }

    /// Adds or removes the `"other"` sentinel for `interval` only.
    ///
    /// The sentinel cannot be added to an interval with no fixed amounts.
    pub fn set_include_other<H>(&mut self, interval: Interval, include: bool, host: &mut H) -> bool
    where
        H: EditorHost<AmountConfiguration>,
    {
        if !self.check_enabled(interval) {
            return false;
        }
        let current = self.options(interval);
        if include && current.amount_count() == 0 {
            self.reject(Field::Amounts(interval), OptionError::LastAmount);
            return false;
        }
        let options = current.with_other(include);
        let next = self.content.with_options(interval, options);
        self.commit(next, host);
        true
    }

    fn check_enabled(&self, interval: Interval) -> bool {
        let enabled = self.is_enabled(interval);
        if !enabled {
            tracing::warn!(interval = %interval, "Ignoring edit to an interval not enabled on the page");
        }
        enabled
    }

    fn reject(&mut self, field: Field, err: OptionError) {
        if err.is_silent() {
            return;
        }
        tracing::debug!(field = %field, error = %err, "Amount input rejected");
        self.errors.set(field, err.to_string());
    }

    fn commit<H>(&mut self, next: AmountConfiguration, host: &mut H)
    where
        H: EditorHost<AmountConfiguration>,
    {
        let next = next.repair_defaults(&self.intervals);
        if next == self.content {
            return;
        }
        tracing::debug!("Amount content changed");
        self.content = next;
        host.on_change_element_content(self.content.clone());
        self.gate.report(self.is_update_disabled(), host);
    }
}
