use serde::{Deserialize, Serialize};

/// A QR code. Square: `size` drives both bounds dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCodeElement {
    pub value: String,
    pub size: f64,
}

impl Default for QrCodeElement {
    fn default() -> Self {
        Self {
            value: "{{invoice.number}}".to_string(),
            size: 100.0,
        }
    }
}
