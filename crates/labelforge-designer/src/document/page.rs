use serde::{Deserialize, Serialize};

use labelforge_core::{constants, generate_id, Size};

use crate::model::{Element, ElementContent};

fn default_grid_size() -> f64 {
    constants::GRID_SIZE
}

fn default_flag() -> bool {
    true
}

/// Per-page grid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSettings {
    #[serde(default = "default_grid_size")]
    pub size: f64,
    #[serde(default = "default_flag")]
    pub visible: bool,
    #[serde(default = "default_flag")]
    pub snap: bool,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            size: constants::GRID_SIZE,
            visible: true,
            snap: true,
        }
    }
}

/// One exportable canvas. Element order is z-order: later entries render
/// on top.
fn fresh_page_id() -> String {
    generate_id("page")
}

fn default_background() -> String {
    constants::PAGE_BACKGROUND.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default = "fresh_page_id")]
    pub id: String,
    pub elements: Vec<Element>,
    #[serde(default = "default_background")]
    pub background: String,
    pub size: Size,
    #[serde(default)]
    pub grid: GridSettings,
}

impl Page {
    /// Creates an empty A4 page.
    pub fn new() -> Self {
        Self::with_size(Size::new(constants::PAGE_WIDTH, constants::PAGE_HEIGHT))
    }

    /// Creates an empty page of the given size.
    pub fn with_size(size: Size) -> Self {
        Self {
            id: generate_id("page"),
            elements: Vec::new(),
            background: constants::PAGE_BACKGROUND.to_string(),
            size,
            grid: GridSettings::default(),
        }
    }

    /// Looks up a top-level element by id.
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|el| el.id == id)
    }

    /// Mutable lookup of a top-level element by id.
    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|el| el.id == id)
    }

    /// Z-order position of a top-level element.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.elements.iter().position(|el| el.id == id)
    }

    /// True if the id exists anywhere on the page, including inside
    /// groups. Ids must be unique across this flattened pool.
    pub fn contains_id(&self, id: &str) -> bool {
        fn walk(elements: &[Element], id: &str) -> bool {
            elements.iter().any(|el| {
                el.id == id
                    || matches!(&el.content, ElementContent::Group(g) if walk(&g.children, id))
            })
        }
        walk(&self.elements, id)
    }

    /// Ids of all top-level elements in z-order.
    pub fn element_ids(&self) -> Vec<String> {
        self.elements.iter().map(|el| el.id.clone()).collect()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}
