//! # LabelForge
//!
//! A document and state engine for designing invoices, shipping labels,
//! receipts, badges, and certificates.
//!
//! ## Architecture
//!
//! LabelForge is organized as a workspace:
//!
//! 1. **labelforge-core** - Errors, geometry, identifiers, constants
//! 2. **labelforge-designer** - Element model, document store,
//!    selection/grouping, history, placeholders, templates, import
//! 3. **labelforge** - This crate: logging setup and the CLI binary

pub use labelforge_designer as designer;

pub use labelforge_core::{Bounds, Error, Result, Size};
pub use labelforge_designer::{
    Action, Category, DocumentFile, DocumentStore, EditorState, Element, ElementKind,
    ElementPatch, Page, SampleData, Template, TemplateLibrary,
};

/// Initializes the tracing subscriber. Defaults to INFO; override with
/// `RUST_LOG`.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(env_filter)
        .try_init()?;

    Ok(())
}
