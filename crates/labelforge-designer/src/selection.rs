//! Selection and arrangement engine: alignment, distribution, and the
//! marquee containment query.
//!
//! All functions here are pure: they take element slices and return
//! repositioned copies, leaving dispatch and ownership to the store.

use serde::{Deserialize, Serialize};

use labelforge_core::Bounds;

use crate::model::{group_bounds, Element};

/// Alignment target within the selection's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignMode {
    Left,
    Right,
    /// Horizontal centers.
    Center,
    Top,
    Bottom,
    /// Vertical centers.
    Middle,
}

/// Distribution axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Repositions each element so its edge or center matches the selection
/// bounding box's edge or center. Fewer than two elements are returned
/// unchanged.
pub fn align_elements(elements: &[Element], mode: AlignMode) -> Vec<Element> {
    if elements.len() < 2 {
        return elements.to_vec();
    }

    let frame = group_bounds(elements);
    elements
        .iter()
        .map(|element| {
            let bounds = element.bounds();
            let mut moved = element.clone();
            match mode {
                AlignMode::Left => moved.x = frame.x,
                AlignMode::Right => moved.x = frame.right() - bounds.width,
                AlignMode::Center => moved.x = frame.x + (frame.width - bounds.width) / 2.0,
                AlignMode::Top => moved.y = frame.y,
                AlignMode::Bottom => moved.y = frame.bottom() - bounds.height,
                AlignMode::Middle => moved.y = frame.y + (frame.height - bounds.height) / 2.0,
            }
            moved
        })
        .collect()
}

/// Spaces elements uniformly along the given axis: sorts by leading
/// coordinate, computes the even gap from the span minus the occupied
/// size, and repositions sequentially from the first element. Fewer than
/// three elements are returned unchanged.
pub fn distribute_elements(elements: &[Element], axis: Axis) -> Vec<Element> {
    if elements.len() < 3 {
        return elements.to_vec();
    }

    let mut sorted: Vec<Element> = elements.to_vec();
    sorted.sort_by(|a, b| {
        let (ka, kb) = match axis {
            Axis::Horizontal => (a.x, b.x),
            Axis::Vertical => (a.y, b.y),
        };
        ka.partial_cmp(&kb).unwrap_or(std::cmp::Ordering::Equal)
    });

    let frame = group_bounds(&sorted);
    let (span, occupied) = match axis {
        Axis::Horizontal => (
            frame.width,
            sorted.iter().map(|el| el.bounds().width).sum::<f64>(),
        ),
        Axis::Vertical => (
            frame.height,
            sorted.iter().map(|el| el.bounds().height).sum::<f64>(),
        ),
    };
    let gap = (span - occupied) / (sorted.len() - 1) as f64;

    let mut cursor = match axis {
        Axis::Horizontal => frame.x,
        Axis::Vertical => frame.y,
    };
    for element in &mut sorted {
        let bounds = element.bounds();
        match axis {
            Axis::Horizontal => {
                element.x = cursor;
                cursor += bounds.width + gap;
            }
            Axis::Vertical => {
                element.y = cursor;
                cursor += bounds.height + gap;
            }
        }
    }
    sorted
}

/// Elements whose bounds lie entirely within `area`, the marquee
/// selection predicate. Partial overlap is not enough.
pub fn elements_in_area<'a>(elements: &'a [Element], area: &Bounds) -> Vec<&'a Element> {
    elements
        .iter()
        .filter(|el| area.contains(&el.bounds()))
        .collect()
}

/// The bounding box of the given elements, or `None` when empty.
pub fn selection_bounds(elements: &[Element]) -> Option<Bounds> {
    if elements.is_empty() {
        None
    } else {
        Some(group_bounds(elements))
    }
}
