use serde::{Deserialize, Serialize};

/// Stroke cap for line ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

/// A straight line from the frame's top-left to its bottom-right. A
/// degenerate frame on one axis is valid (horizontal/vertical lines).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineElement {
    pub stroke: String,
    pub stroke_width: f64,
    #[serde(default)]
    pub line_cap: LineCap,
}

impl Default for LineElement {
    fn default() -> Self {
        Self {
            stroke: "#000000".to_string(),
            stroke_width: 2.0,
            line_cap: LineCap::Round,
        }
    }
}
