//! Implementations of the `migrate` and `check` subcommands.
//!
//! Input documents may be a single element, a JSON array of elements, or a
//! page object carrying `elements` and `sidebar_elements` arrays. Elements
//! of types other than `DAmount` and `DSwag` pass through untouched.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{bail, Context, Result};
use donor_page_core::PageElement;
use donor_page_editors::{check_element, EditorContext, ElementReport};
use serde_json::Value;

const PAGE_ELEMENT_KEYS: [&str; 2] = ["elements", "sidebar_elements"];

/// Reads a JSON document from `path`.
pub fn read_document(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

fn element_slots(document: &mut Value) -> Result<Vec<&mut Value>> {
    if document.get("type").is_some() {
        return Ok(vec![document]);
    }
    match document {
        Value::Array(items) => Ok(items.iter_mut().collect()),
        Value::Object(page) => {
            let mut slots = Vec::new();
            for (key, value) in page.iter_mut() {
                if !PAGE_ELEMENT_KEYS.contains(&key.as_str()) {
                    continue;
                }
                let Value::Array(items) = value else {
                    bail!("`{key}` must be an array of elements");
                };
                slots.extend(items.iter_mut());
            }
            if slots.is_empty() {
                bail!("Document has no page elements");
            }
            Ok(slots)
        }
        _ => bail!("Expected an element, an array of elements, or a page object"),
    }
}

/// Opens every known element in `document` in its editor.
pub fn check_document(
    document: &mut Value,
    context: &EditorContext,
) -> Result<Vec<ElementReport>> {
    let mut reports = Vec::new();
    for slot in element_slots(document)? {
        let Some(element) = PageElement::from_value(slot.clone())? else {
            tracing::debug!(kind = ?slot.get("type"), "Skipping element");
            continue;
        };
        let report = check_element(element, context);
        *slot = report.element.to_value()?;
        reports.push(report);
    }
    Ok(reports)
}

/// Migrates every known element in `document` in place. Returns the number
/// of elements that changed.
pub fn migrate_document(document: &mut Value, context: &EditorContext) -> Result<usize> {
    let reports = check_document(document, context)?;
    let changed = reports.iter().filter(|report| report.changed).count();
    tracing::info!(elements = reports.len(), changed, "Migrated document");
    Ok(changed)
}

/// Renders reports as human-readable lines.
pub fn format_reports(reports: &[ElementReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let status = if report.ready { "ok" } else { "NOT SAVABLE" };
        let _ = writeln!(
            out,
            "{} {} [{}]{}",
            report.kind().tag(),
            report.uuid(),
            status,
            if report.changed { " (changed on load)" } else { "" }
        );
        for (field, message) in report.errors.iter() {
            let _ = writeln!(out, "  {field}: {message}");
        }
    }
    out
}
