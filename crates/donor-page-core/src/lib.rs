#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Donor Page Core Library
//!
//! Data model, option sets, and format migration for the contribution-page
//! element editors.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`config`]: Validation limits shared by the editors
//! - [`types`]: Intervals, amounts, and the `"other"` sentinel
//! - [`options`]: Numeric and text option sets
//! - [`content`]: Element content objects as persisted by the host
//! - [`migration`]: Legacy `allowOther` adapter

pub mod config;
pub mod content;
pub mod error;
pub mod migration;
pub mod options;
pub mod types;

// Re-exports for convenience
pub use config::EditorLimits;
pub use content::{AmountConfiguration, ElementKind, PageElement, SwagConfiguration, SwagGroup};
pub use error::{Error, Result};
pub use migration::{migrate, migrate_element};
pub use options::{NumericOptionSet, OptionError, TextOptionSet};
pub use types::{Amount, AmountOption, Interval};
