//! # LabelForge Designer
//!
//! The document and state engine behind the LabelForge page designer:
//! a canvas workspace for composing invoices, shipping labels, receipts,
//! badges, and certificates from typed visual elements.
//!
//! ## Core Components
//!
//! ### Document Model
//! - **Elements**: text, shapes, tables, barcodes, QR codes, images,
//!   stamps, and rigid groups: a tagged union with per-variant defaults
//!   and minimum sizes
//! - **Pages**: ordered element lists (z-order), background, size, grid
//! - **Store**: a dispatch-based reducer owning the whole editor state
//!
//! ### Editing
//! - **Selection**: multi-select, alignment, distribution, marquee
//!   containment, z-order moves
//! - **Clipboard**: deep copies, fresh ids on paste, fixed offset
//! - **Grouping**: group/ungroup as exact inverses
//! - **History**: snapshot-based undo/redo with redo-branch pruning
//!
//! ### Data & Interchange
//! - **Placeholders**: `{{dotted.path}}` tokens resolved against sample
//!   data dictionaries; unresolved tokens stay visible
//! - **Templates**: stock and imported designs applied onto pages
//! - **Import/Export**: validated JSON documents and standalone
//!   templates
//!
//! ## Architecture
//!
//! ```text
//! DocumentStore (dispatch/state)
//!   ├── Pages (elements in z-order)
//!   ├── Selection & clipboard
//!   └── History (snapshots)
//!
//! Consumers (renderer, export pipeline, panels)
//!   └── Placeholder resolver × sample data
//! ```
//!
//! The store is synchronous and single-owner: each dispatch applies
//! atomically, and consumers read one fully-materialized state. Export
//! renderers iterate pages and elements in z-order and resolve
//! placeholder-bearing fields through [`placeholder`].

pub mod data;
pub mod document;
pub mod history;
pub mod import;
pub mod model;
pub mod placeholder;
pub mod selection;
pub mod serialization;
pub mod templates;

pub use data::{Category, SampleData};
pub use document::{
    Action, DocumentStore, EditorState, ElementPatch, GridSettings, ImageAsset, LabelGrid, Page,
    PageConfig,
};
pub use history::{History, Snapshot};
pub use import::{process_import, validate_import, ImportedDocument};
pub use model::{
    group_bounds, Element, ElementContent, ElementKind, TextAlign,
};
pub use placeholder::{extract_tokens, resolve, resolve_element, suggestions, Suggestion};
pub use selection::{
    align_elements, distribute_elements, elements_in_area, selection_bounds, AlignMode, Axis,
};
pub use serialization::{DocumentFile, DocumentMetadata};
pub use templates::{
    apply_template, export_template, import_template, validate_template, Template, TemplateLibrary,
};
