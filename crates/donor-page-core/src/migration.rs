//! Legacy `allowOther` migration.
//!
//! Older amount content carried a single `allowOther` flag for the whole
//! element. The current format records the `"other"` sentinel per interval.
//! [`migrate`] rewrites the old form into the new one and is applied once at
//! the load boundary; nothing else in the workspace looks at the legacy flag.
//!
//! The rewrite is one-way and idempotent:
//!
//! ```
//! use donor_page_core::{migrate, AmountConfiguration, Interval};
//!
//! let legacy: AmountConfiguration = serde_json::from_str(
//!     r#"{"allowOther": true, "options": {"one_time": [1, 2, 3]}}"#,
//! ).unwrap();
//! let current = migrate(&legacy).unwrap();
//! assert!(current.options(Interval::OneTime).unwrap().includes_other());
//! assert!(migrate(&current).is_none());
//! ```

use crate::content::{AmountConfiguration, PageElement};

/// Rewrites legacy amount content.
///
/// Returns `None` when there is nothing to migrate. When `allowOther` is
/// true, every interval's options gain the `"other"` sentinel; in all cases
/// the flag is removed.
pub fn migrate(config: &AmountConfiguration) -> Option<AmountConfiguration> {
    let allow_other = config.allow_other?;
    let mut next = config.clone();
    if allow_other {
        for interval in config.intervals() {
            if let Some(options) = config.options(interval) {
                next = next.with_options(interval, options.with_other(true));
            }
        }
    }
    next.allow_other = None;
    tracing::info!(allow_other, "Migrated legacy amount configuration");
    Some(next)
}

/// Applies [`migrate`] to an element's content.
///
/// Returns the element and whether it changed.
pub fn migrate_element(element: PageElement) -> (PageElement, bool) {
    match element {
        PageElement::Amount { uuid, content } => match migrate(&content) {
            Some(content) => {
                tracing::debug!(uuid = %uuid, "Element content migrated");
                (PageElement::Amount { uuid, content }, true)
            }
            None => (PageElement::Amount { uuid, content }, false),
        },
        other => (other, false),
    }
}
