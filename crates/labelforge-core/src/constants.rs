//! Editor-wide constants: page geometry, zoom limits, grid defaults, and
//! per-variant minimum element sizes.

/// Default page width in CSS pixels (A4 at 96 DPI).
pub const PAGE_WIDTH: f64 = 794.0;

/// Default page height in CSS pixels (A4 at 96 DPI).
pub const PAGE_HEIGHT: f64 = 1123.0;

/// Default page background color.
pub const PAGE_BACKGROUND: &str = "#ffffff";

/// Minimum zoom factor.
pub const ZOOM_MIN: f64 = 0.1;

/// Maximum zoom factor.
pub const ZOOM_MAX: f64 = 5.0;

/// Default grid cell size.
pub const GRID_SIZE: f64 = 10.0;

/// Offset applied to pasted elements so copies never land exactly on their
/// source.
pub const PASTE_OFFSET: f64 = 20.0;

/// Maximum number of history snapshots retained before the oldest is
/// evicted.
pub const HISTORY_DEPTH: usize = 50;

/// Minimum width/height for text and simple shape elements.
pub const MIN_SHAPE_SIZE: f64 = 5.0;

/// Minimum table dimensions.
pub const MIN_TABLE_WIDTH: f64 = 100.0;
pub const MIN_TABLE_HEIGHT: f64 = 50.0;

/// Minimum barcode dimensions.
pub const MIN_BARCODE_WIDTH: f64 = 50.0;
pub const MIN_BARCODE_HEIGHT: f64 = 20.0;

/// Minimum QR code edge length.
pub const MIN_QRCODE_SIZE: f64 = 20.0;

/// Minimum stamp dimensions.
pub const MIN_STAMP_WIDTH: f64 = 50.0;
pub const MIN_STAMP_HEIGHT: f64 = 30.0;
