use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::data::SampleData;
use crate::model::Element;
use crate::templates::TemplateLibrary;

use super::Page;

/// An uploaded image asset referenced by image elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAsset {
    pub id: String,
    pub name: String,
    /// Source URL or data URL.
    pub src: String,
    pub width: f64,
    pub height: f64,
    pub uploaded_at: DateTime<Utc>,
}

/// Page margins for label-sheet layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub fn uniform(v: f64) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }
}

/// Configuration for laying a design out as an n×m label sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelGrid {
    pub enabled: bool,
    pub rows: u32,
    pub columns: u32,
    pub row_gap: f64,
    pub column_gap: f64,
    pub margins: Margins,
}

impl Default for LabelGrid {
    fn default() -> Self {
        Self {
            enabled: false,
            rows: 3,
            columns: 3,
            row_gap: 10.0,
            column_gap: 10.0,
            margins: Margins::uniform(20.0),
        }
    }
}

/// The complete editor state owned by a [`super::DocumentStore`].
///
/// Invariants upheld by the reducer: at least one page always exists,
/// `current_page` always indexes a valid page, and the selection only
/// ever refers to ids the current page held when it was set.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub pages: Vec<Page>,
    pub current_page: usize,
    /// Selected element ids, scoped to the current page.
    pub selection: Vec<String>,
    /// Deep copies of previously copied elements; survives page
    /// switches.
    pub clipboard: Vec<Element>,
    pub zoom: f64,
    pub pan: (f64, f64),
    /// Preview mode disables all editing interactions.
    pub preview: bool,
    pub label_grid: LabelGrid,
    pub sample_data: SampleData,
    pub templates: TemplateLibrary,
    pub images: Vec<ImageAsset>,
}

impl EditorState {
    /// A fresh single-page document.
    pub fn new() -> Self {
        Self {
            pages: vec![Page::new()],
            current_page: 0,
            selection: Vec::new(),
            clipboard: Vec::new(),
            zoom: 1.0,
            pan: (0.0, 0.0),
            preview: false,
            label_grid: LabelGrid::default(),
            sample_data: SampleData::merged(),
            templates: TemplateLibrary::builtin(),
            images: Vec::new(),
        }
    }

    /// The current page.
    pub fn page(&self) -> &Page {
        &self.pages[self.current_page]
    }

    /// The current page, mutably.
    pub fn page_mut(&mut self) -> &mut Page {
        let index = self.current_page;
        &mut self.pages[index]
    }

    /// Selected elements of the current page, in z-order.
    pub fn selected_elements(&self) -> Vec<&Element> {
        self.page()
            .elements
            .iter()
            .filter(|el| self.selection.iter().any(|id| *id == el.id))
            .collect()
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
