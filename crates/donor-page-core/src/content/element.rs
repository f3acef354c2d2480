//! Page element envelope as stored by the page builder.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{AmountConfiguration, SwagConfiguration};
use crate::error::{Error, Result};

/// A placed element whose content this crate understands.
///
/// Serialized as `{"type": "DAmount", "uuid": "...", "content": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PageElement {
    /// Amount selection element.
    #[serde(rename = "DAmount")]
    Amount {
        /// Element identifier assigned by the page builder.
        uuid: String,
        /// Element content.
        #[serde(default)]
        content: AmountConfiguration,
    },

    /// Benefit selection element.
    #[serde(rename = "DSwag")]
    Swag {
        /// Element identifier assigned by the page builder.
        uuid: String,
        /// Element content.
        #[serde(default)]
        content: SwagConfiguration,
    },
}

/// The kind of a [`PageElement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// `DAmount`
    Amount,
    /// `DSwag`
    Swag,
}

impl ElementKind {
    /// Returns the stored `type` tag.
    pub fn tag(&self) -> &'static str {
        match self {
            ElementKind::Amount => "DAmount",
            ElementKind::Swag => "DSwag",
        }
    }

    /// Looks up a kind by its stored `type` tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "DAmount" => Some(ElementKind::Amount),
            "DSwag" => Some(ElementKind::Swag),
            _ => None,
        }
    }
}

impl PageElement {
    /// Returns the element identifier.
    pub fn uuid(&self) -> &str {
        match self {
            PageElement::Amount { uuid, .. } | PageElement::Swag { uuid, .. } => uuid,
        }
    }

    /// Returns the element kind.
    pub fn kind(&self) -> ElementKind {
        match self {
            PageElement::Amount { .. } => ElementKind::Amount,
            PageElement::Swag { .. } => ElementKind::Swag,
        }
    }

    /// Decodes a stored element.
    ///
    /// Elements of other types (rich text, frequency, and so on) are not an
    /// error: they yield `Ok(None)` so callers can pass them through.
    pub fn from_value(value: Value) -> Result<Option<Self>> {
        let tag = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::validation_field("type", "element has no type tag"))?;
        if ElementKind::from_tag(tag).is_none() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_value(value)?))
    }

    /// Encodes the element for storage.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}
