use serde::{Deserialize, Serialize};

/// How an image scales within its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFit {
    #[default]
    Contain,
    Cover,
    Stretch,
}

/// A raster image referenced by source URL or data URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageElement {
    pub src: String,
    #[serde(default)]
    pub fit: ImageFit,
}

impl Default for ImageElement {
    fn default() -> Self {
        Self {
            src: String::new(),
            fit: ImageFit::Contain,
        }
    }
}
