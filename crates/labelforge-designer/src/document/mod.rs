//! The document state store: pages, editor state, actions, and the
//! dispatch reducer.
//!
//! One [`DocumentStore`] owns the whole editor state. Consumers hold a
//! reference to the store (never ambient globals), mutate it exclusively
//! through [`DocumentStore::dispatch`], and read derived state through
//! [`DocumentStore::state`]. Each dispatch applies atomically and
//! produces one fully-materialized next state; invalid payloads are
//! silent no-ops.

mod actions;
mod page;
mod state;
mod store;

pub use actions::{Action, ElementPatch, PageConfig};
pub use page::{GridSettings, Page};
pub use state::{EditorState, ImageAsset, LabelGrid, Margins};
pub use store::DocumentStore;
