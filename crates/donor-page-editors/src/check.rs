//! Offline save-readiness check for stored page elements.
//!
//! Opens each element in its editor against a [`RecordingHost`], the same
//! way the page builder would, and reports what the editor concluded.

use donor_page_core::{ElementKind, PageElement};

use crate::amount_editor::AmountEditor;
use crate::field::FieldErrors;
use crate::host::{EditorContext, RecordingHost};
use crate::swag_editor::SwagEditor;

/// What opening one element in its editor produced.
#[derive(Debug, Clone)]
pub struct ElementReport {
    /// The element as the editor would hand it back (migrated and repaired).
    pub element: PageElement,
    /// Whether loading changed the content.
    pub changed: bool,
    /// Whether the host's "Update" action would be enabled.
    pub ready: bool,
    /// Every invalid field with its message.
    pub errors: FieldErrors,
}

impl ElementReport {
    /// The element identifier.
    pub fn uuid(&self) -> &str {
        self.element.uuid()
    }

    /// The element kind.
    pub fn kind(&self) -> ElementKind {
        self.element.kind()
    }
}

/// Opens `element` in its editor and reports the outcome.
pub fn check_element(element: PageElement, context: &EditorContext) -> ElementReport {
    match element {
        PageElement::Amount { uuid, content } => {
            let mut host = RecordingHost::new();
            let editor = AmountEditor::load(content, context, &mut host);
            ElementReport {
                changed: !host.changes.is_empty(),
                ready: !editor.is_update_disabled(),
                errors: editor.errors().clone(),
                element: PageElement::Amount {
                    uuid,
                    content: editor.into_content(),
                },
            }
        }
        PageElement::Swag { uuid, content } => {
            let mut host = RecordingHost::new();
            let mut editor = SwagEditor::load(content, context, &mut host);
            editor.validate_all();
            ElementReport {
                changed: !host.changes.is_empty(),
                ready: editor.is_ready(),
                errors: editor.errors().clone(),
                element: PageElement::Swag {
                    uuid,
                    content: editor.into_content(),
                },
            }
        }
    }
}
