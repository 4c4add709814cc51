use serde::{Deserialize, Serialize};

/// A circle. The frame width/height track the diameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleElement {
    pub radius: f64,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
}

impl Default for CircleElement {
    fn default() -> Self {
        Self {
            radius: 50.0,
            fill: "#ffffff".to_string(),
            stroke: "#000000".to_string(),
            stroke_width: 1.0,
        }
    }
}
