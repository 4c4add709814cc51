//! Axis-aligned geometry primitives used throughout the document model.

use serde::{Deserialize, Serialize};

/// A width/height pair, e.g. a page size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Creates a new size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned bounding box anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Creates a new bounding box.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A zero-area box at the origin.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Right edge (`x + width`).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Horizontal center.
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Vertical center.
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// AABB overlap test. Strict separation on either axis means no
    /// intersection; touching edges count as intersecting.
    pub fn intersects(&self, other: &Bounds) -> bool {
        !(self.right() < other.x
            || self.x > other.right()
            || self.bottom() < other.y
            || self.y > other.bottom())
    }

    /// True if `other` lies entirely within this box (the marquee
    /// predicate: containment, not mere overlap).
    pub fn contains(&self, other: &Bounds) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// The minimal box covering both operands.
    pub fn union(&self, other: &Bounds) -> Bounds {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Bounds::new(x, y, right - x, bottom - y)
    }
}
