//! The element model: typed variants, defaults, and geometry queries.
//!
//! Every placeable object on a page is an [`Element`]: a common frame
//! (position, size, rotation, opacity, visibility, lock flag) plus a
//! variant payload tagged by `type`. The tag names match the document
//! JSON format (`"text"`, `"rectangle"`, ..., `"group"`).

use serde::{Deserialize, Serialize};

use labelforge_core::{constants, generate_id, Bounds};

mod arrow;
mod barcode;
mod circle;
mod group;
mod image;
mod line;
mod polygon;
mod qrcode;
mod rectangle;
mod stamp;
mod star;
mod table;
mod text;

pub use arrow::ArrowElement;
pub use barcode::{BarcodeElement, BarcodeFormat};
pub use circle::CircleElement;
pub use group::GroupElement;
pub use image::ImageElement;
pub use line::{LineCap, LineElement};
pub use polygon::PolygonElement;
pub use qrcode::QrCodeElement;
pub use rectangle::RectangleElement;
pub use stamp::{StampElement, StampShape};
pub use star::StarElement;
pub use table::{TableColumn, TableElement};
pub use text::TextElement;

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Element variant discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Rectangle,
    Circle,
    Line,
    Polygon,
    Star,
    Arrow,
    Table,
    Image,
    Barcode,
    Qrcode,
    Stamp,
    Group,
}

impl ElementKind {
    /// Kind as its wire-format tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::Rectangle => "rectangle",
            ElementKind::Circle => "circle",
            ElementKind::Line => "line",
            ElementKind::Polygon => "polygon",
            ElementKind::Star => "star",
            ElementKind::Arrow => "arrow",
            ElementKind::Table => "table",
            ElementKind::Image => "image",
            ElementKind::Barcode => "barcode",
            ElementKind::Qrcode => "qrcode",
            ElementKind::Stamp => "stamp",
            ElementKind::Group => "group",
        }
    }

    /// Parses a wire-format tag.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "text" => Some(ElementKind::Text),
            "rectangle" => Some(ElementKind::Rectangle),
            "circle" => Some(ElementKind::Circle),
            "line" => Some(ElementKind::Line),
            "polygon" => Some(ElementKind::Polygon),
            "star" => Some(ElementKind::Star),
            "arrow" => Some(ElementKind::Arrow),
            "table" => Some(ElementKind::Table),
            "image" => Some(ElementKind::Image),
            "barcode" => Some(ElementKind::Barcode),
            "qrcode" => Some(ElementKind::Qrcode),
            "stamp" => Some(ElementKind::Stamp),
            "group" => Some(ElementKind::Group),
            _ => None,
        }
    }
}

/// Variant payload of an element, tagged by `type` in the wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementContent {
    Text(TextElement),
    Rectangle(RectangleElement),
    Circle(CircleElement),
    Line(LineElement),
    Polygon(PolygonElement),
    Star(StarElement),
    Arrow(ArrowElement),
    Table(TableElement),
    Image(ImageElement),
    Barcode(BarcodeElement),
    Qrcode(QrCodeElement),
    Stamp(StampElement),
    Group(GroupElement),
}

impl ElementContent {
    /// The discriminant for this payload.
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementContent::Text(_) => ElementKind::Text,
            ElementContent::Rectangle(_) => ElementKind::Rectangle,
            ElementContent::Circle(_) => ElementKind::Circle,
            ElementContent::Line(_) => ElementKind::Line,
            ElementContent::Polygon(_) => ElementKind::Polygon,
            ElementContent::Star(_) => ElementKind::Star,
            ElementContent::Arrow(_) => ElementKind::Arrow,
            ElementContent::Table(_) => ElementKind::Table,
            ElementContent::Image(_) => ElementKind::Image,
            ElementContent::Barcode(_) => ElementKind::Barcode,
            ElementContent::Qrcode(_) => ElementKind::Qrcode,
            ElementContent::Stamp(_) => ElementKind::Stamp,
            ElementContent::Group(_) => ElementKind::Group,
        }
    }

    /// Default payload for a variant.
    pub fn defaults(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Text => ElementContent::Text(TextElement::default()),
            ElementKind::Rectangle => ElementContent::Rectangle(RectangleElement::default()),
            ElementKind::Circle => ElementContent::Circle(CircleElement::default()),
            ElementKind::Line => ElementContent::Line(LineElement::default()),
            ElementKind::Polygon => ElementContent::Polygon(PolygonElement::default()),
            ElementKind::Star => ElementContent::Star(StarElement::default()),
            ElementKind::Arrow => ElementContent::Arrow(ArrowElement::default()),
            ElementKind::Table => ElementContent::Table(TableElement::default()),
            ElementKind::Image => ElementContent::Image(ImageElement::default()),
            ElementKind::Barcode => ElementContent::Barcode(BarcodeElement::default()),
            ElementKind::Qrcode => ElementContent::Qrcode(QrCodeElement::default()),
            ElementKind::Stamp => ElementContent::Stamp(StampElement::default()),
            ElementKind::Group => ElementContent::Group(GroupElement::default()),
        }
    }
}

fn default_opacity() -> f64 {
    1.0
}

fn default_visible() -> bool {
    true
}

fn fresh_element_id() -> String {
    generate_id("el")
}

/// A placeable design object: common frame plus variant payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Unique within the owning document, immutable after creation.
    /// Elements arriving without an id (imports, templates) get a fresh
    /// one.
    #[serde(default = "fresh_element_id")]
    pub id: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    /// Zero means "not stated": imports backfill the variant default.
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    /// Rotation in degrees.
    #[serde(default)]
    pub rotation: f64,
    /// Opacity in `[0, 1]`.
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Locked elements are not draggable or transformable in the editor.
    #[serde(default)]
    pub locked: bool,
    #[serde(flatten)]
    pub content: ElementContent,
}

impl Element {
    /// Creates an element of the given kind at (x, y) with variant
    /// defaults and a fresh id.
    pub fn new(kind: ElementKind, x: f64, y: f64) -> Self {
        let content = ElementContent::defaults(kind);
        let (width, height) = default_size(&content);
        Self {
            id: generate_id("el"),
            x,
            y,
            width,
            height,
            rotation: 0.0,
            opacity: 1.0,
            visible: true,
            locked: false,
            content,
        }
    }

    /// The variant discriminant.
    pub fn kind(&self) -> ElementKind {
        self.content.kind()
    }

    /// Display name for layer panels and logs.
    pub fn display_name(&self) -> &'static str {
        match self.kind() {
            ElementKind::Text => "Text",
            ElementKind::Rectangle => "Rectangle",
            ElementKind::Circle => "Circle",
            ElementKind::Line => "Line",
            ElementKind::Polygon => "Polygon",
            ElementKind::Star => "Star",
            ElementKind::Arrow => "Arrow",
            ElementKind::Table => "Table",
            ElementKind::Image => "Image",
            ElementKind::Barcode => "Barcode",
            ElementKind::Qrcode => "QR Code",
            ElementKind::Stamp => "Stamp",
            ElementKind::Group => "Group",
        }
    }

    /// Axis-aligned bounds from the stored frame. QR codes are square and
    /// sized by their `size` field; groups report the frame fixed at
    /// group-creation time, never a recomputation from children.
    pub fn bounds(&self) -> Bounds {
        if let ElementContent::Qrcode(qr) = &self.content {
            return Bounds::new(self.x, self.y, qr.size, qr.size);
        }
        Bounds::new(self.x, self.y, self.width, self.height)
    }

    /// Minimum (width, height) for this variant. Resizes below the
    /// minimum are rejected by the store.
    pub fn min_size(&self) -> (f64, f64) {
        min_size(self.kind())
    }

    /// AABB overlap test between two elements.
    pub fn intersects(&self, other: &Element) -> bool {
        self.bounds().intersects(&other.bounds())
    }

    /// Moves the element by (dx, dy).
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Deep copy with fresh ids, recursing through group children. Used
    /// by paste, template application, and import.
    pub fn with_fresh_ids(&self) -> Element {
        let mut copy = self.clone();
        copy.id = generate_id("el");
        if let ElementContent::Group(group) = &mut copy.content {
            group.children = group.children.iter().map(|c| c.with_fresh_ids()).collect();
        }
        copy
    }
}

/// Minimum (width, height) per variant.
pub fn min_size(kind: ElementKind) -> (f64, f64) {
    match kind {
        ElementKind::Table => (constants::MIN_TABLE_WIDTH, constants::MIN_TABLE_HEIGHT),
        ElementKind::Barcode => (constants::MIN_BARCODE_WIDTH, constants::MIN_BARCODE_HEIGHT),
        ElementKind::Qrcode => (constants::MIN_QRCODE_SIZE, constants::MIN_QRCODE_SIZE),
        ElementKind::Stamp => (constants::MIN_STAMP_WIDTH, constants::MIN_STAMP_HEIGHT),
        // Lines may be degenerate on one axis.
        ElementKind::Line => (0.0, 0.0),
        // Group frames are fixed at creation time.
        ElementKind::Group => (0.0, 0.0),
        _ => (constants::MIN_SHAPE_SIZE, constants::MIN_SHAPE_SIZE),
    }
}

/// The minimal axis-aligned box covering all given elements; zero bounds
/// for an empty slice. Used at group-creation time and for fit
/// calculations.
pub fn group_bounds(elements: &[Element]) -> Bounds {
    let mut iter = elements.iter();
    let first = match iter.next() {
        Some(el) => el.bounds(),
        None => return Bounds::zero(),
    };
    iter.fold(first, |acc, el| acc.union(&el.bounds()))
}

/// Default frame size for a variant payload, used at creation time and
/// to backfill imported elements that omit their dimensions.
pub fn default_size(content: &ElementContent) -> (f64, f64) {
    match content {
        ElementContent::Text(_) => (200.0, 30.0),
        ElementContent::Rectangle(_) => (100.0, 100.0),
        ElementContent::Circle(c) => (c.radius * 2.0, c.radius * 2.0),
        ElementContent::Line(_) => (100.0, 0.0),
        ElementContent::Polygon(p) => (p.radius * 2.0, p.radius * 2.0),
        ElementContent::Star(s) => (s.outer_radius * 2.0, s.outer_radius * 2.0),
        ElementContent::Arrow(a) => (100.0, a.pointer_width),
        ElementContent::Table(_) => (400.0, 200.0),
        ElementContent::Image(_) => (200.0, 200.0),
        ElementContent::Barcode(_) => (200.0, 50.0),
        ElementContent::Qrcode(q) => (q.size, q.size),
        ElementContent::Stamp(_) => (120.0, 60.0),
        ElementContent::Group(_) => (0.0, 0.0),
    }
}
