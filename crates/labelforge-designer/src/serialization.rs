//! Save/load for designer documents.
//!
//! Implements the versioned document file format: JSON with metadata,
//! pages, optional sample data, and embedded templates.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::data::SampleData;
use crate::document::{EditorState, Page};
use crate::import::FORMAT_VERSION;
use crate::templates::{Template, TemplateLibrary};

/// Document metadata block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
}

/// Complete document file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFile {
    pub version: String,
    pub metadata: DocumentMetadata,
    pub pages: Vec<Page>,
    #[serde(default, skip_serializing_if = "SampleData::is_empty")]
    pub sample_data: SampleData,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub templates: Vec<Template>,
}

impl DocumentFile {
    /// Creates an empty single-page document file.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: FORMAT_VERSION.to_string(),
            metadata: DocumentMetadata {
                name: name.into(),
                created: now,
                modified: now,
                author: String::new(),
                description: String::new(),
            },
            pages: vec![Page::new()],
            sample_data: SampleData::default(),
            templates: Vec::new(),
        }
    }

    /// Captures the persistable parts of the editor state.
    pub fn from_state(name: impl Into<String>, state: &EditorState) -> Self {
        let mut file = Self::new(name);
        file.pages = state.pages.clone();
        file.sample_data = state.sample_data.clone();
        file.templates = state
            .templates
            .iter()
            .filter(|t| !t.author.eq_ignore_ascii_case("system"))
            .cloned()
            .collect();
        file
    }

    /// Rebuilds editor state from a loaded file. Stock templates are
    /// always available; file templates register on top of them.
    pub fn into_state(self) -> EditorState {
        let mut state = EditorState::new();
        if !self.pages.is_empty() {
            state.pages = self.pages;
            state.current_page = 0;
        }
        if !self.sample_data.is_empty() {
            state.sample_data = self.sample_data;
        }
        let mut library = TemplateLibrary::builtin();
        for template in self.templates {
            if let Err(err) = library.add(template) {
                warn!("document template not registered: {err}");
            }
        }
        state.templates = library;
        state
    }

    /// Saves the document as pretty JSON.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize document")?;
        std::fs::write(path.as_ref(), json).context("Failed to write document file")?;
        Ok(())
    }

    /// Loads a document, stamping the modification time.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read document file")?;
        let mut document: DocumentFile =
            serde_json::from_str(&content).context("Failed to parse document file")?;
        document.metadata.modified = Utc::now();
        Ok(document)
    }
}
