//! # LabelForge Core
//!
//! Core types and utilities shared across the LabelForge workspace.
//! Provides the fundamental abstractions for errors, geometry, identifiers,
//! and editor-wide constants.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod id;

pub use error::{Error, Result};
pub use geometry::{Bounds, Size};
pub use id::generate_id;
