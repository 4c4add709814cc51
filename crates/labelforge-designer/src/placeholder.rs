//! Placeholder resolution: `{{dotted.path}}` tokens against a sample
//! data dictionary.
//!
//! An unresolvable token is not an error: it stays verbatim in the
//! output as a visible signal of missing data. Resolution applies
//! recursively into composite elements: table cells, group descendants,
//! and the value fields of barcodes and QR codes.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::data::{DataValue, SampleData};
use crate::model::{Element, ElementContent};

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(.*?)\}\}").expect("token pattern is valid"));

/// Substitutes every `{{path}}` token whose trimmed dotted path resolves
/// to a string leaf in `data`. Unresolved tokens (missing paths and
/// section paths) are left untouched.
pub fn resolve(text: &str, data: &SampleData) -> String {
    TOKEN
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let path = caps[1].trim();
            match data.get(path) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Trimmed token paths in `text`, deduplicated, first-occurrence order.
pub fn extract_tokens(text: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for caps in TOKEN.captures_iter(text) {
        let path = caps[1].trim().to_string();
        if !seen.contains(&path) {
            seen.push(path);
        }
    }
    seen
}

/// What a suggestion points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    /// A string leaf that resolves directly.
    Value,
    /// A nested section; its children resolve.
    Section,
}

/// One completion candidate for a partially typed placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub key: String,
    /// The leaf value, or empty for sections.
    pub value: String,
    pub kind: SuggestionKind,
}

/// Walks `data` collecting every key whose full dotted path contains
/// `partial` (case-insensitive), sorted lexicographically by key.
pub fn suggestions(partial: &str, data: &SampleData) -> Vec<Suggestion> {
    fn walk(
        node: &std::collections::BTreeMap<String, DataValue>,
        prefix: &str,
        needle: &str,
        out: &mut Vec<Suggestion>,
    ) {
        for (key, value) in node {
            let full = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            if full.to_lowercase().contains(needle) {
                out.push(match value {
                    DataValue::Text(text) => Suggestion {
                        key: full.clone(),
                        value: text.clone(),
                        kind: SuggestionKind::Value,
                    },
                    DataValue::Section(_) => Suggestion {
                        key: full.clone(),
                        value: String::new(),
                        kind: SuggestionKind::Section,
                    },
                });
            }
            if let DataValue::Section(section) = value {
                walk(section, &full, needle, out);
            }
        }
    }

    let needle = partial.to_lowercase();
    let mut out = Vec::new();
    walk(data.entries(), "", &needle, &mut out);
    out.sort_by(|a, b| a.key.cmp(&b.key));
    out
}

/// Returns a copy of `element` with every placeholder-bearing field
/// resolved against `data`. The element definition itself is never
/// mutated; resolution affects only the rendered/exported appearance.
pub fn resolve_element(element: &Element, data: &SampleData) -> Element {
    let mut resolved = element.clone();
    match &mut resolved.content {
        ElementContent::Text(text) => {
            text.text = resolve(&text.text, data);
        }
        ElementContent::Barcode(barcode) => {
            barcode.value = resolve(&barcode.value, data);
        }
        ElementContent::Qrcode(qr) => {
            qr.value = resolve(&qr.value, data);
        }
        ElementContent::Stamp(stamp) => {
            stamp.text = resolve(&stamp.text, data);
        }
        ElementContent::Table(table) => {
            for row in &mut table.rows {
                for cell in row {
                    *cell = resolve(cell, data);
                }
            }
        }
        ElementContent::Group(group) => {
            group.children = group
                .children
                .iter()
                .map(|child| resolve_element(child, data))
                .collect();
        }
        _ => {}
    }
    resolved
}

/// Every token used by an element, recursing through composites,
/// deduplicated in first-occurrence order.
pub fn element_tokens(element: &Element) -> Vec<String> {
    fn push_tokens(text: &str, out: &mut Vec<String>) {
        for token in extract_tokens(text) {
            if !out.contains(&token) {
                out.push(token);
            }
        }
    }

    fn collect(element: &Element, out: &mut Vec<String>) {
        match &element.content {
            ElementContent::Text(text) => push_tokens(&text.text, out),
            ElementContent::Barcode(barcode) => push_tokens(&barcode.value, out),
            ElementContent::Qrcode(qr) => push_tokens(&qr.value, out),
            ElementContent::Stamp(stamp) => push_tokens(&stamp.text, out),
            ElementContent::Table(table) => {
                for row in &table.rows {
                    for cell in row {
                        push_tokens(cell, out);
                    }
                }
            }
            ElementContent::Group(group) => {
                for child in &group.children {
                    collect(child, out);
                }
            }
            _ => {}
        }
    }

    let mut out = Vec::new();
    collect(element, &mut out);
    out
}
