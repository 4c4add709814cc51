//! Identifier generation for documents, pages, elements, and assets.

use uuid::Uuid;

/// Generates a fresh opaque identifier with the given prefix, e.g.
/// `el-9f8b4c...`. Identifiers are unique per process and collision-free
/// across imports.
pub fn generate_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}
