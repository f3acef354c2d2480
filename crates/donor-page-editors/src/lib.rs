#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Donor Page Editors
//!
//! Controllers that sit between a page builder and the configuration model
//! in `donor-page-core`.

pub mod amount_editor;
pub mod check;
pub mod draft;
pub mod field;
pub mod host;
pub mod swag_editor;

// Re-exports for convenience
pub use amount_editor::AmountEditor;
pub use check::{check_element, ElementReport};
pub use draft::Draft;
pub use field::{Field, FieldErrors};
pub use host::{EditorContext, EditorHost, PagePreview, RecordingHost, UpdateGate};
pub use swag_editor::SwagEditor;
