use serde::{Deserialize, Serialize};

/// A regular polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonElement {
    pub sides: u32,
    pub radius: f64,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
}

impl Default for PolygonElement {
    fn default() -> Self {
        Self {
            sides: 6,
            radius: 50.0,
            fill: "#ffffff".to_string(),
            stroke: "#000000".to_string(),
            stroke_width: 1.0,
        }
    }
}
