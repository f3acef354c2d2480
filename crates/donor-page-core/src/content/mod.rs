//! Element content objects exchanged with the page builder.
//!
//! The host owns these values. Editors never modify one in place; they build
//! a replacement and hand it back.

mod amount;
mod element;
mod swag;

pub use amount::AmountConfiguration;
pub use element::{ElementKind, PageElement};
pub use swag::{SwagConfiguration, SwagGroup};
