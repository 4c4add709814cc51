use serde::{Deserialize, Serialize};

/// Outline shape of a stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StampShape {
    #[default]
    Rectangle,
    Ellipse,
}

/// A rubber-stamp overlay ("PAID", "APPROVED", ...). The stamp text may
/// carry placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StampElement {
    pub text: String,
    #[serde(default)]
    pub shape: StampShape,
    pub background_color: String,
    pub text_color: String,
    pub border_width: f64,
    #[serde(default = "default_corner_radius")]
    pub corner_radius: f64,
    pub font_size: f64,
    pub font_family: String,
}

fn default_corner_radius() -> f64 {
    5.0
}

impl Default for StampElement {
    fn default() -> Self {
        Self {
            text: "STAMP".to_string(),
            shape: StampShape::Rectangle,
            background_color: "#ff0000".to_string(),
            text_color: "#ffffff".to_string(),
            border_width: 2.0,
            corner_radius: default_corner_radius(),
            font_size: 14.0,
            font_family: "Arial".to_string(),
        }
    }
}
