use serde::{Deserialize, Serialize};

use super::TextAlign;

/// A block of text. The `text` field may carry `{{dotted.path}}`
/// placeholders resolved at render/export time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    pub text: String,
    pub font_size: f64,
    pub font_family: String,
    pub fill: String,
    #[serde(default)]
    pub align: TextAlign,
}

impl Default for TextElement {
    fn default() -> Self {
        Self {
            text: "Sample Text".to_string(),
            font_size: 16.0,
            font_family: "Arial".to_string(),
            fill: "#000000".to_string(),
            align: TextAlign::Left,
        }
    }
}
