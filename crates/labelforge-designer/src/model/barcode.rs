use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Supported linear barcode symbologies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarcodeFormat {
    #[default]
    Code128,
    Code39,
    Ean13,
    Ean8,
    Upc,
}

impl BarcodeFormat {
    /// Format as its wire-format name.
    pub fn as_str(&self) -> &'static str {
        match self {
            BarcodeFormat::Code128 => "CODE128",
            BarcodeFormat::Code39 => "CODE39",
            BarcodeFormat::Ean13 => "EAN13",
            BarcodeFormat::Ean8 => "EAN8",
            BarcodeFormat::Upc => "UPC",
        }
    }

    /// Parses a wire-format name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "CODE128" => Some(BarcodeFormat::Code128),
            "CODE39" => Some(BarcodeFormat::Code39),
            "EAN13" => Some(BarcodeFormat::Ean13),
            "EAN8" => Some(BarcodeFormat::Ean8),
            "UPC" => Some(BarcodeFormat::Upc),
            _ => None,
        }
    }
}

impl Serialize for BarcodeFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// Unknown symbologies in documents fall back to CODE128 rather than
// rejecting the element.
impl<'de> Deserialize<'de> for BarcodeFormat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(BarcodeFormat::parse(&s).unwrap_or_default())
    }
}

/// A linear barcode. The encoded `value` may carry placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarcodeElement {
    pub value: String,
    #[serde(default)]
    pub format: BarcodeFormat,
}

impl Default for BarcodeElement {
    fn default() -> Self {
        Self {
            value: "{{product.sku}}".to_string(),
            format: BarcodeFormat::Code128,
        }
    }
}
