use labelforge_core::Bounds;
use labelforge_designer::model::{group_bounds, Element, ElementKind};
use labelforge_designer::selection::{
    align_elements, distribute_elements, elements_in_area, selection_bounds, AlignMode, Axis,
};

fn rect(x: f64, y: f64, width: f64, height: f64) -> Element {
    let mut el = Element::new(ElementKind::Rectangle, x, y);
    el.width = width;
    el.height = height;
    el
}

#[test]
fn align_left_moves_both_to_the_frame_edge() {
    let elements = vec![rect(10.0, 0.0, 50.0, 10.0), rect(100.0, 0.0, 20.0, 10.0)];
    let aligned = align_elements(&elements, AlignMode::Left);
    assert_eq!(aligned[0].x, 10.0);
    assert_eq!(aligned[1].x, 10.0);
}

#[test]
fn align_right_matches_right_edges() {
    let elements = vec![rect(10.0, 0.0, 50.0, 10.0), rect(100.0, 0.0, 20.0, 10.0)];
    let aligned = align_elements(&elements, AlignMode::Right);
    assert_eq!(aligned[0].x + aligned[0].width, 120.0);
    assert_eq!(aligned[1].x + aligned[1].width, 120.0);
}

#[test]
fn align_center_matches_horizontal_centers() {
    let elements = vec![rect(0.0, 0.0, 40.0, 10.0), rect(60.0, 0.0, 20.0, 10.0)];
    let aligned = align_elements(&elements, AlignMode::Center);
    // Frame spans 0..80, center 40.
    assert_eq!(aligned[0].x + aligned[0].width / 2.0, 40.0);
    assert_eq!(aligned[1].x + aligned[1].width / 2.0, 40.0);
}

#[test]
fn align_top_bottom_middle_move_y_only() {
    let elements = vec![rect(0.0, 10.0, 10.0, 40.0), rect(30.0, 70.0, 10.0, 20.0)];

    let top = align_elements(&elements, AlignMode::Top);
    assert_eq!(top[0].y, 10.0);
    assert_eq!(top[1].y, 10.0);
    assert_eq!(top[1].x, 30.0);

    let bottom = align_elements(&elements, AlignMode::Bottom);
    assert_eq!(bottom[0].y + bottom[0].height, 90.0);
    assert_eq!(bottom[1].y + bottom[1].height, 90.0);

    let middle = align_elements(&elements, AlignMode::Middle);
    assert_eq!(middle[0].y + middle[0].height / 2.0, 50.0);
    assert_eq!(middle[1].y + middle[1].height / 2.0, 50.0);
}

#[test]
fn align_needs_at_least_two_elements() {
    let elements = vec![rect(25.0, 25.0, 10.0, 10.0)];
    let aligned = align_elements(&elements, AlignMode::Left);
    assert_eq!(aligned[0].x, 25.0);
}

#[test]
fn distribute_spaces_uniformly() {
    // Three 10-wide elements spanning 0..100: the middle one lands at 45.
    let elements = vec![
        rect(0.0, 0.0, 10.0, 10.0),
        rect(40.0, 0.0, 10.0, 10.0),
        rect(90.0, 0.0, 10.0, 10.0),
    ];
    let spread = distribute_elements(&elements, Axis::Horizontal);
    assert_eq!(spread[0].x, 0.0);
    assert_eq!(spread[1].x, 45.0);
    assert_eq!(spread[2].x, 90.0);

    let gap_one = spread[1].x - (spread[0].x + spread[0].width);
    let gap_two = spread[2].x - (spread[1].x + spread[1].width);
    assert_eq!(gap_one, gap_two);
}

#[test]
fn distribute_sorts_by_leading_coordinate_first() {
    let elements = vec![
        rect(90.0, 0.0, 10.0, 10.0),
        rect(0.0, 0.0, 10.0, 10.0),
        rect(40.0, 0.0, 10.0, 10.0),
    ];
    let spread = distribute_elements(&elements, Axis::Horizontal);
    let xs: Vec<f64> = spread.iter().map(|el| el.x).collect();
    assert_eq!(xs, vec![0.0, 45.0, 90.0]);
}

#[test]
fn distribute_vertically() {
    let elements = vec![
        rect(0.0, 0.0, 10.0, 20.0),
        rect(0.0, 30.0, 10.0, 20.0),
        rect(0.0, 80.0, 10.0, 20.0),
    ];
    let spread = distribute_elements(&elements, Axis::Vertical);
    // Span 0..100, occupied 60, gap 20.
    assert_eq!(spread[0].y, 0.0);
    assert_eq!(spread[1].y, 40.0);
    assert_eq!(spread[2].y, 80.0);
}

#[test]
fn distribute_needs_at_least_three_elements() {
    let elements = vec![rect(0.0, 0.0, 10.0, 10.0), rect(50.0, 0.0, 10.0, 10.0)];
    let spread = distribute_elements(&elements, Axis::Horizontal);
    assert_eq!(spread[0].x, 0.0);
    assert_eq!(spread[1].x, 50.0);
}

#[test]
fn marquee_requires_full_containment() {
    let contained = rect(1.0, 1.0, 10.0, 10.0);
    let overlapping = rect(5.0, 5.0, 20.0, 20.0);
    let outside = rect(50.0, 50.0, 5.0, 5.0);
    let elements = vec![contained.clone(), overlapping, outside];

    let area = Bounds::new(0.0, 0.0, 20.0, 20.0);
    let hits = elements_in_area(&elements, &area);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, contained.id);
}

#[test]
fn intersects_uses_strict_separation() {
    let a = rect(0.0, 0.0, 10.0, 10.0);
    let b = rect(5.0, 5.0, 10.0, 10.0);
    let c = rect(10.0, 0.0, 10.0, 10.0);
    let d = rect(10.1, 0.0, 10.0, 10.0);

    assert!(a.intersects(&b));
    // Touching edges still intersect.
    assert!(a.intersects(&c));
    assert!(!a.intersects(&d));
}

#[test]
fn group_bounds_covers_all_elements() {
    let elements = vec![rect(10.0, 20.0, 30.0, 30.0), rect(60.0, 5.0, 20.0, 10.0)];
    let bounds = group_bounds(&elements);
    assert_eq!(bounds, Bounds::new(10.0, 5.0, 70.0, 45.0));
}

#[test]
fn group_bounds_of_nothing_is_zero() {
    assert_eq!(group_bounds(&[]), Bounds::zero());
}

#[test]
fn selection_bounds_is_none_when_empty() {
    assert!(selection_bounds(&[]).is_none());
    let elements = vec![rect(5.0, 5.0, 10.0, 10.0)];
    assert_eq!(
        selection_bounds(&elements),
        Some(Bounds::new(5.0, 5.0, 10.0, 10.0))
    );
}
