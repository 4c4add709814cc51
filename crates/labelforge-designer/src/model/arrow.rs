use serde::{Deserialize, Serialize};

/// An arrow along the frame diagonal with a triangular head.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowElement {
    pub pointer_length: f64,
    pub pointer_width: f64,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
}

impl Default for ArrowElement {
    fn default() -> Self {
        Self {
            pointer_length: 10.0,
            pointer_width: 10.0,
            fill: "#000000".to_string(),
            stroke: "#000000".to_string(),
            stroke_width: 2.0,
        }
    }
}
