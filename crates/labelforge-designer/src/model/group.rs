use serde::{Deserialize, Serialize};

use super::Element;

/// A rigid group of elements. Child coordinates are relative to the
/// group origin; the group frame is fixed when the group is created and
/// only changes through explicit resize.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupElement {
    #[serde(default)]
    pub children: Vec<Element>,
}

impl GroupElement {
    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
