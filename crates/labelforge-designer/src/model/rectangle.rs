use serde::{Deserialize, Serialize};

/// A filled/stroked rectangle, optionally with rounded corners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectangleElement {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
    #[serde(default)]
    pub corner_radius: f64,
}

impl Default for RectangleElement {
    fn default() -> Self {
        Self {
            fill: "#ffffff".to_string(),
            stroke: "#000000".to_string(),
            stroke_width: 1.0,
            corner_radius: 0.0,
        }
    }
}
