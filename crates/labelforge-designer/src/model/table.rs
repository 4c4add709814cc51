use serde::{Deserialize, Serialize};

use super::TextAlign;

/// A table column header with its layout width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableColumn {
    pub header: String,
    pub width: f64,
    #[serde(default)]
    pub align: TextAlign,
}

impl TableColumn {
    pub fn new(header: impl Into<String>, width: f64) -> Self {
        Self {
            header: header.into(),
            width,
            align: TextAlign::Left,
        }
    }
}

/// A data table. Every cell string may carry placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableElement {
    pub columns: Vec<TableColumn>,
    /// Row-major cell contents. Rows shorter than the column list render
    /// with trailing empty cells.
    pub rows: Vec<Vec<String>>,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default = "default_header_fill")]
    pub header_fill: String,
}

fn default_font_size() -> f64 {
    12.0
}

fn default_header_fill() -> String {
    "#f0f0f0".to_string()
}

impl TableElement {
    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Appends an empty row matching the column count.
    pub fn push_empty_row(&mut self) {
        self.rows.push(vec![String::new(); self.columns.len()]);
    }
}

impl Default for TableElement {
    fn default() -> Self {
        Self {
            columns: vec![
                TableColumn::new("Product", 200.0),
                TableColumn::new("Quantity", 100.0),
                TableColumn::new("Price", 100.0),
            ],
            rows: vec![vec![
                "{{product.name}}".to_string(),
                "{{product.quantity}}".to_string(),
                "{{product.price}}".to_string(),
            ]],
            font_size: default_font_size(),
            header_fill: default_header_fill(),
        }
    }
}
