use serde::{Deserialize, Serialize};

use labelforge_core::Size;

use crate::data::SampleData;
use crate::model::{Element, ElementContent};
use crate::selection::{AlignMode, Axis};
use crate::templates::Template;

use super::state::{ImageAsset, LabelGrid};

/// Configuration for a newly added page. Unset fields use the A4
/// defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageConfig {
    pub size: Option<Size>,
    pub background: Option<String>,
}

/// A partial update merged onto an existing element.
///
/// Common attributes patch individually; the variant payload, when
/// present, replaces the element's payload wholesale and must be of the
/// same variant (a mismatched payload leaves the element's content
/// untouched). Neither `id` nor `type` can ever change through a patch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rotation: Option<f64>,
    pub opacity: Option<f64>,
    pub visible: Option<bool>,
    pub locked: Option<bool>,
    pub content: Option<ElementContent>,
}

impl ElementPatch {
    /// A patch moving the element to (x, y).
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    /// A patch resizing the element to (width, height).
    pub fn size(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    /// A patch replacing the variant payload.
    pub fn content(content: ElementContent) -> Self {
        Self {
            content: Some(content),
            ..Self::default()
        }
    }
}

/// Actions dispatched to the [`super::DocumentStore`].
///
/// Every action applies to the current page unless stated otherwise.
/// Invalid payloads (unknown ids, out-of-range indices, non-permutation
/// orders) are silent no-ops; dispatch never fails.
#[derive(Debug, Clone)]
pub enum Action {
    /// Appends an element to the current page (topmost z-order). The
    /// element is assigned a fresh id; variant defaults come from
    /// [`Element::new`].
    AddElement(Element),
    /// Merges a partial update onto the element with `id`. No-op if the
    /// id is not on the current page. Width/height below the variant
    /// minimum are rejected and the prior bounds retained.
    UpdateElement { id: String, patch: ElementPatch },
    /// Removes the given elements and purges them from the selection.
    DeleteElements(Vec<String>),
    /// Replaces the selection with the given id set. The store trusts
    /// callers to pass only current-page ids; membership is not
    /// validated here.
    SelectElements(Vec<String>),
    /// Selects every element on the current page.
    SelectAll,
    ClearSelection,
    AddPage(PageConfig),
    /// Refused while only one page remains.
    DeletePage(usize),
    /// Switches the current page and clears the selection. Out-of-range
    /// indices are no-ops.
    SetCurrentPage(usize),
    /// Reorders pages; `order` must be a permutation of `0..pages.len()`.
    /// The current page follows the page it pointed at.
    ReorderPages(Vec<usize>),
    SetPageBackground(String),
    SetPageSize(Size),
    /// Clamped to `[0.1, 5.0]`.
    SetZoom(f64),
    SetPanOffset(f64, f64),
    /// Flips preview mode and clears the selection.
    TogglePreview,
    ToggleGrid,
    ToggleSnap,
    SetGridSize(f64),
    /// Deep-copies the given current-page elements to the clipboard.
    CopyElements(Vec<String>),
    /// Pastes clipboard contents with fresh ids, offset by (+20, +20);
    /// the pasted elements become the selection.
    PasteElements,
    /// Replaces ≥2 elements with one group element whose children are
    /// translated into group-local coordinates.
    GroupElements(Vec<String>),
    /// Dissolves groups back into siblings at page coordinates; the
    /// exact inverse of `GroupElements`.
    UngroupElements(Vec<String>),
    AlignSelection(AlignMode),
    DistributeSelection(Axis),
    BringToFront(Vec<String>),
    SendToBack(Vec<String>),
    BringForward(String),
    SendBackward(String),
    /// Replaces the current page's elements with fresh copies of the
    /// template's elements and adopts its page size and background.
    ApplyTemplate(Template),
    RegisterTemplate(Template),
    RemoveTemplate(String),
    RegisterImage(ImageAsset),
    RemoveImage(String),
    SetSampleData(SampleData),
    SetLabelGrid(LabelGrid),
    /// Snapshots `{pages, current_page}`. Callers decide granularity,
    /// typically once per discrete user gesture, not per drag frame.
    SaveHistory,
    /// No-op at the history boundaries.
    Undo,
    /// No-op at the history boundaries.
    Redo,
}
