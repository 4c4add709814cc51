use serde::{Deserialize, Serialize};

/// A star with alternating inner/outer vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarElement {
    /// Number of outer points.
    pub points: u32,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
}

impl Default for StarElement {
    fn default() -> Self {
        Self {
            points: 5,
            inner_radius: 30.0,
            outer_radius: 50.0,
            fill: "#ffff00".to_string(),
            stroke: "#000000".to_string(),
            stroke_width: 1.0,
        }
    }
}
