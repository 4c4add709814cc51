//! Document import: structural validation, element re-identification,
//! and format migration.
//!
//! Import is all-or-nothing at the document level: a page missing its
//! `elements` array or a numeric `size` rejects the whole file, and no
//! partial document is ever committed. Within a structurally valid page,
//! recovery is per-element: an element of unknown `type` is skipped with
//! a warning rather than aborting the page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use labelforge_core::{Error, Result};

use crate::data::SampleData;
use crate::document::{GridSettings, Page};
use crate::model::{default_size, Element, ElementContent, ElementKind};
use crate::templates::Template;

/// Current document format version.
pub const FORMAT_VERSION: &str = "2.0";

/// Import provenance recorded alongside the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportMetadata {
    /// Version declared by the source file, "unknown" if absent.
    pub original_version: String,
    pub import_date: DateTime<Utc>,
}

/// A fully processed import, ready to become editor state.
#[derive(Debug, Clone)]
pub struct ImportedDocument {
    pub pages: Vec<Page>,
    pub metadata: ImportMetadata,
    pub sample_data: SampleData,
    pub templates: Vec<Template>,
}

/// Structural validation: `pages` must be a non-empty array, and every
/// page must carry an `elements` array and a `size` object with numeric
/// `width` and `height`. Any violation rejects the import in full.
pub fn validate_import(value: &Value) -> Result<()> {
    let pages = value
        .get("pages")
        .and_then(Value::as_array)
        .ok_or_else(|| invalid("missing pages array"))?;
    if pages.is_empty() {
        return Err(invalid("document has no pages"));
    }
    for (i, page) in pages.iter().enumerate() {
        if page.get("elements").and_then(Value::as_array).is_none() {
            return Err(invalid(format!("page {i} missing elements array")));
        }
        let size = page
            .get("size")
            .and_then(Value::as_object)
            .ok_or_else(|| invalid(format!("page {i} missing size")))?;
        for dim in ["width", "height"] {
            if size.get(dim).and_then(Value::as_f64).is_none() {
                return Err(invalid(format!("page {i} size.{dim} is not a number")));
            }
        }
    }
    Ok(())
}

/// Validates, migrates, and processes a document JSON value.
pub fn process_import(value: Value) -> Result<ImportedDocument> {
    let original_version = value
        .pointer("/metadata/version")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string();

    let value = migrate(value);
    validate_import(&value)?;

    let mut pages = Vec::new();
    for page_value in value.get("pages").and_then(Value::as_array).into_iter().flatten() {
        pages.push(process_page(page_value)?);
    }

    let sample_data = value
        .get("sampleData")
        .map(SampleData::from_json)
        .unwrap_or_default();

    let mut templates = Vec::new();
    for tpl_value in value.get("templates").and_then(Value::as_array).into_iter().flatten() {
        match serde_json::from_value::<Template>(tpl_value.clone()) {
            Ok(template) => templates.push(template),
            Err(err) => warn!(%err, "template in document skipped"),
        }
    }

    Ok(ImportedDocument {
        pages,
        metadata: ImportMetadata {
            original_version,
            import_date: Utc::now(),
        },
        sample_data,
        templates,
    })
}

/// Migrates older formats in place. Version 1.0 documents are bumped to
/// 2.0; element-level defaults (visible, locked, opacity) are backfilled
/// during deserialization.
pub fn migrate(mut value: Value) -> Value {
    let version = value
        .pointer("/metadata/version")
        .and_then(Value::as_str)
        .unwrap_or("1.0")
        .to_string();
    if version == "1.0" {
        if let Some(metadata) = value
            .as_object_mut()
            .and_then(|doc| doc.entry("metadata").or_insert_with(|| Value::Object(Default::default())).as_object_mut())
        {
            metadata.insert("version".to_string(), Value::String(FORMAT_VERSION.to_string()));
            metadata.insert("migratedFrom".to_string(), Value::String(version));
        }
    }
    value
}

fn process_page(value: &Value) -> Result<Page> {
    // Validation guarantees elements and size exist; elements are still
    // processed one by one so a single bad entry cannot sink the page.
    let element_values = value
        .get("elements")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    let mut elements = Vec::new();
    for element_value in &element_values {
        if let Some(element) = process_element(element_value)? {
            elements.push(element);
        }
    }

    let size = serde_json::from_value(value.get("size").cloned().unwrap_or(Value::Null))
        .map_err(|e| invalid(format!("bad page size: {e}")))?;
    let grid: GridSettings = value
        .get("grid")
        .cloned()
        .map(serde_json::from_value)
        .transpose()
        .map_err(|e| invalid(format!("bad grid settings: {e}")))?
        .unwrap_or_default();

    let mut page = Page::with_size(size);
    if let Some(background) = value.get("background").and_then(Value::as_str) {
        page.background = background.to_string();
    }
    page.grid = grid;
    page.elements = elements;
    Ok(page)
}

/// Processes one element. `Ok(None)` means "skip it" (unknown or
/// malformed type, never fatal for the page); a missing image source is
/// a hard error per the import contract.
fn process_element(value: &Value) -> Result<Option<Element>> {
    let Some(kind) = value.get("type").and_then(Value::as_str) else {
        warn!("element without a type skipped");
        return Ok(None);
    };
    if ElementKind::parse(kind).is_none() {
        warn!(kind, "unknown element type skipped");
        return Ok(None);
    }

    let element: Element = match serde_json::from_value(value.clone()) {
        Ok(element) => element,
        Err(err) => {
            warn!(kind, %err, "malformed element skipped");
            return Ok(None);
        }
    };

    Ok(Some(fix_element(element)?))
}

/// Post-parse repairs mirroring the import rules: fresh ids, dimension
/// backfill, QR minimum size, image source requirement. Recurses through
/// group children.
fn fix_element(mut element: Element) -> Result<Element> {
    let (default_w, default_h) = default_size(&element.content);
    if element.width <= 0.0 {
        element.width = default_w;
    }
    if element.height <= 0.0 {
        element.height = default_h;
    }

    match &mut element.content {
        ElementContent::Qrcode(qr) => {
            if qr.size < labelforge_core::constants::MIN_QRCODE_SIZE {
                qr.size = 100.0;
            }
            element.width = qr.size;
            element.height = qr.size;
        }
        ElementContent::Image(image) => {
            if image.src.is_empty() {
                return Err(invalid("image element missing source"));
            }
        }
        ElementContent::Group(group) => {
            let children = std::mem::take(&mut group.children);
            let mut fixed = Vec::with_capacity(children.len());
            for child in children {
                fixed.push(fix_element(child)?);
            }
            group.children = fixed;
        }
        _ => {}
    }

    Ok(element.with_fresh_ids())
}

fn invalid(reason: impl Into<String>) -> Error {
    Error::InvalidDocument {
        reason: reason.into(),
    }
}
