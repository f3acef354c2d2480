//! Content of a "Swag" (benefit) page element.

use serde::{Deserialize, Serialize};

use crate::options::TextOptionSet;
use crate::types::Amount;

/// A selectable benefit dimension, e.g. a shirt size, with its choices.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwagGroup {
    /// Display name of the group.
    #[serde(default)]
    pub swag_name: String,
    /// Choices offered in the group.
    #[serde(default)]
    pub swag_options: TextOptionSet,
}

impl SwagGroup {
    /// Creates a group with no options.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            swag_name: name.into(),
            swag_options: TextOptionSet::new(),
        }
    }
}

/// A stored threshold. Values that are not a valid amount are kept verbatim
/// so the element still opens and the editor can show the problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
enum StoredThreshold {
    Amount(Amount),
    Unparsed(serde_json::Value),
}

/// Benefit configuration for a contribution page.
///
/// The list of groups may hold several entries in stored data, but only the
/// first one is edited.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwagConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    swag_threshold: Option<StoredThreshold>,

    #[serde(default)]
    swags: Vec<SwagGroup>,

    #[serde(default)]
    opt_out_default: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    offer_nyt_comp: Option<bool>,
}

impl SwagConfiguration {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimum qualifying yearly amount.
    ///
    /// `None` when the stored value is absent or not a valid amount.
    pub fn swag_threshold(&self) -> Option<Amount> {
        match self.swag_threshold {
            Some(StoredThreshold::Amount(amount)) => Some(amount),
            _ => None,
        }
    }

    /// The stored threshold as text, when it is present but not a valid
    /// amount.
    pub fn unparsed_threshold(&self) -> Option<String> {
        match &self.swag_threshold {
            Some(StoredThreshold::Unparsed(serde_json::Value::String(text))) => {
                Some(text.clone())
            }
            Some(StoredThreshold::Unparsed(value)) => Some(value.to_string()),
            _ => None,
        }
    }

    /// All stored groups.
    pub fn swags(&self) -> &[SwagGroup] {
        &self.swags
    }

    /// The group that the editor works on.
    pub fn active_group(&self) -> Option<&SwagGroup> {
        self.swags.first()
    }

    /// Whether contributors are opted out of benefits by default.
    pub fn opt_out_default(&self) -> bool {
        self.opt_out_default
    }

    /// Whether the complimentary subscription benefit is offered.
    pub fn offer_nyt_comp(&self) -> Option<bool> {
        self.offer_nyt_comp
    }

    /// Returns a copy with the threshold replaced.
    pub fn with_threshold(&self, threshold: Option<Amount>) -> Self {
        Self {
            swag_threshold: threshold.map(StoredThreshold::Amount),
            ..self.clone()
        }
    }

    /// Returns a copy with the active group replaced, or added if there is none.
    /// Any further stored groups are kept.
    pub fn with_active_group(&self, group: SwagGroup) -> Self {
        let mut next = self.clone();
        match next.swags.first_mut() {
            Some(active) => *active = group,
            None => next.swags.push(group),
        }
        next
    }

    /// Returns a copy with the opt-out flag replaced.
    pub fn with_opt_out_default(&self, opt_out: bool) -> Self {
        Self {
            opt_out_default: opt_out,
            ..self.clone()
        }
    }

    /// Returns a copy with the complimentary subscription flag replaced.
    pub fn with_offer_nyt_comp(&self, offer: Option<bool>) -> Self {
        Self {
            offer_nyt_comp: offer,
            ..self.clone()
        }
    }
}
