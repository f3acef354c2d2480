//! Editor controller for the "Swag" (benefit) element.
//!
//! Only the first swag group is editable. The threshold and group name are
//! held as [`Draft`]s so partially typed input survives validation, and
//! save-readiness is recomputed after every input.

use donor_page_core::{
    Amount, EditorLimits, OptionError, SwagConfiguration, SwagGroup, TextOptionSet,
};

use crate::draft::Draft;
use crate::field::{Field, FieldErrors};
use crate::host::{EditorContext, EditorHost, UpdateGate};

const NAME_REQUIRED: &str = "Swag name is required";
const OPTION_REQUIRED: &str = "At least one option is required";

/// Controller for a swag element.
#[derive(Debug, Clone)]
pub struct SwagEditor {
    content: SwagConfiguration,
    limits: EditorLimits,
    nyt_comp_offered: bool,
    threshold: Draft<Amount>,
    name: Draft<String>,
    new_option: String,
    errors: FieldErrors,
    gate: UpdateGate,
}

impl SwagEditor {
    /// Opens an editor on `content` and reports initial save-readiness.
    pub fn load<H>(content: SwagConfiguration, context: &EditorContext, host: &mut H) -> Self
    where
        H: EditorHost<SwagConfiguration>,
    {
        let mut threshold = Draft::from_committed(content.swag_threshold(), Amount::to_string);
        let mut errors = FieldErrors::new();
        if let Some(text) = content.unparsed_threshold()
            && let Err(err) = threshold.input(text, str::parse::<Amount>)
        {
            tracing::debug!(error = %err, "Stored swag threshold is not a valid amount");
            errors.set(Field::Threshold, err.to_string());
        }
        let stored_name = content
            .active_group()
            .map(|group| group.swag_name.trim().to_string())
            .filter(|name| !name.is_empty());
        let name = Draft::from_committed(stored_name, String::clone);

        let mut editor = Self {
            content,
            limits: context.limits.clone(),
            nyt_comp_offered: context.page_preview.offer_nyt_comp,
            threshold,
            name,
            new_option: String::new(),
            errors,
            gate: UpdateGate::default(),
        };
        editor.refresh(host);
        editor
    }

    /// The current content snapshot.
    pub fn content(&self) -> &SwagConfiguration {
        &self.content
    }

    /// Consumes the editor, returning the content to hand back on save.
    pub fn into_content(self) -> SwagConfiguration {
        self.content
    }

    /// The threshold input as typed.
    pub fn threshold_text(&self) -> &str {
        self.threshold.text()
    }

    /// The group name input as typed.
    pub fn group_name_text(&self) -> &str {
        self.name.text()
    }

    /// The "new option" input as typed.
    pub fn new_option_text(&self) -> &str {
        &self.new_option
    }

    /// Options of the active group.
    pub fn options(&self) -> TextOptionSet {
        self.active_group().swag_options
    }

    /// Whether the complimentary subscription checkbox should be shown.
    pub fn is_nyt_comp_offered(&self) -> bool {
        self.nyt_comp_offered
    }

    /// Current field errors.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Returns `true` when the threshold, group name, and options are all
    /// valid.
    pub fn is_ready(&self) -> bool {
        self.threshold_is_valid() && self.name_is_valid() && !self.options().is_empty()
    }

    /// The inverse of [`is_ready`](Self::is_ready), as reported to the host.
    pub fn is_update_disabled(&self) -> bool {
        !self.is_ready()
    }

    /// Records threshold input, committing it when it parses.
    pub fn set_threshold<H>(&mut self, text: impl Into<String>, host: &mut H) -> bool
    where
        H: EditorHost<SwagConfiguration>,
    {
        let committed = match self.threshold.input(text, str::parse::<Amount>) {
            Ok(amount) => {
                self.errors.clear(Field::Threshold);
                let next = self.content.with_threshold(Some(amount));
                self.commit(next, host);
                true
            }
            Err(err) => {
                self.reject(Field::Threshold, err);
                false
            }
        };
        self.refresh(host);
        committed
    }

    /// Records group name input.
    ///
    /// Any non-blank name is committed right away. Length and reserved
    /// character problems only produce a field error and block saving.
    pub fn set_group_name<H>(&mut self, text: impl Into<String>, host: &mut H) -> bool
    where
        H: EditorHost<SwagConfiguration>,
    {
        let parsed = self.name.input(text, |t| match t.trim() {
            "" => Err(OptionError::Empty),
            trimmed => Ok(trimmed.to_string()),
        });
        let committed = match parsed {
            Ok(name) => {
                self.check_name();
                let group = SwagGroup {
                    swag_name: name,
                    ..self.active_group()
                };
                let next = self.content.with_active_group(group);
                self.commit(next, host);
                true
            }
            Err(_) => {
                self.errors.set(Field::SwagName, NAME_REQUIRED);
                false
            }
        };
        self.refresh(host);
        committed
    }

    /// Records a keystroke in the "new option" input.
    pub fn set_new_option_text(&mut self, text: impl Into<String>) {
        self.new_option = text.into();
        self.errors.clear(Field::NewOption);
    }

    /// Adds the "new option" text, clearing the input on success.
    pub fn add_new_option<H>(&mut self, host: &mut H) -> bool
    where
        H: EditorHost<SwagConfiguration>,
    {
        let text = std::mem::take(&mut self.new_option);
        let added = self.add_option(&text, host);
        if !added {
            self.new_option = text;
        }
        added
    }

    /// Adds `value` to the active group.
    pub fn add_option<H>(&mut self, value: &str, host: &mut H) -> bool
    where
        H: EditorHost<SwagConfiguration>,
    {
        let mut group = self.active_group();
        let added = match group.swag_options.add_with(value, &self.limits) {
            Ok(options) => {
                self.errors.clear(Field::NewOption);
                group.swag_options = options;
                let next = self.content.with_active_group(group);
                self.commit(next, host);
                true
            }
            Err(err) => {
                self.reject(Field::NewOption, err);
                false
            }
        };
        self.refresh(host);
        added
    }

    /// Removes the option exactly equal to `value`.
    pub fn remove_option<H>(&mut self, value: &str, host: &mut H) -> bool
    where
        H: EditorHost<SwagConfiguration>,
    {
        let mut group = self.active_group();
        let removed = match group.swag_options.remove(value) {
            Ok(options) => {
                group.swag_options = options;
                let next = self.content.with_active_group(group);
                self.commit(next, host);
                true
            }
            Err(err) => {
                tracing::debug!(option = value, error = %err, "Swag option not removed");
                false
            }
        };
        self.refresh(host);
        removed
    }

    /// Sets whether contributors are opted out of benefits by default.
    pub fn set_opt_out_default<H>(&mut self, opt_out: bool, host: &mut H)
    where
        H: EditorHost<SwagConfiguration>,
    {
        let next = self.content.with_opt_out_default(opt_out);
        self.commit(next, host);
    }

    /// Sets the complimentary subscription flag. Ignored unless the page
    /// offers it.
    pub fn set_offer_nyt_comp<H>(&mut self, offer: bool, host: &mut H) -> bool
    where
        H: EditorHost<SwagConfiguration>,
    {
        if !self.nyt_comp_offered {
            tracing::warn!("Complimentary subscription is not offered on this page");
            return false;
        }
        let next = self.content.with_offer_nyt_comp(Some(offer));
        self.commit(next, host);
        true
    }

    /// Fills in field errors for every invalid field, including ones the
    /// user has not touched yet.
    pub fn validate_all(&mut self) {
        if !self.threshold_is_valid() {
            let err = self
                .threshold
                .text()
                .parse::<Amount>()
                .err()
                .unwrap_or(OptionError::InvalidAmount);
            self.errors.set(Field::Threshold, err.to_string());
        }
        if self.name.text().trim().is_empty() {
            self.errors.set(Field::SwagName, NAME_REQUIRED);
        } else {
            self.check_name();
        }
        if self.options().is_empty() && !self.errors.has(Field::NewOption) {
            self.errors.set(Field::NewOption, OPTION_REQUIRED);
        }
    }

    fn active_group(&self) -> SwagGroup {
        self.content.active_group().cloned().unwrap_or_default()
    }

    fn threshold_is_valid(&self) -> bool {
        self.threshold.is_in_sync() && self.threshold.committed().is_some()
    }

    fn name_is_valid(&self) -> bool {
        self.name.is_in_sync()
            && self
                .limits
                .check_label(self.name.text(), self.limits.max_swag_name_length)
                .is_ok()
    }

    fn check_name(&mut self) {
        match self
            .limits
            .check_label(self.name.text(), self.limits.max_swag_name_length)
        {
            Ok(_) => self.errors.clear(Field::SwagName),
            Err(OptionError::Empty) => self.errors.set(Field::SwagName, NAME_REQUIRED),
            Err(err) => self.errors.set(Field::SwagName, err.to_string()),
        }
    }

    fn reject(&mut self, field: Field, err: OptionError) {
        if err.is_silent() {
            return;
        }
        tracing::debug!(field = %field, error = %err, "Swag input rejected");
        self.errors.set(field, err.to_string());
    }

    fn commit<H>(&mut self, next: SwagConfiguration, host: &mut H)
    where
        H: EditorHost<SwagConfiguration>,
    {
        if next == self.content {
            return;
        }
        tracing::debug!("Swag content changed");
        self.content = next;
        host.on_change_element_content(self.content.clone());
    }

    fn refresh<H>(&mut self, host: &mut H)
    where
        H: EditorHost<SwagConfiguration>,
    {
        let disabled = self.is_update_disabled();
        self.gate.report(disabled, host);
    }
}
