use super::*;
use kurbo::PathEl;

fn vertex_count(p: &BezPath) -> usize {
    p.elements()
        .iter()
        .filter(|el| matches!(el, PathEl::MoveTo(_) | PathEl::LineTo(_)))
        .count()
}

#[test]
fn star_alternates_radii_over_twice_the_spikes() {
    let c = Point::new(50.0, 50.0);
    let p = star(c, 10.0, 5.0, 5);
    assert_eq!(vertex_count(&p), 10);

    let mut radii = Vec::new();
    for el in p.elements() {
        if let PathEl::MoveTo(v) | PathEl::LineTo(v) = el {
            radii.push((*v - c).hypot());
        }
    }
    for (i, r) in radii.iter().enumerate() {
        let want = if i % 2 == 0 { 10.0 } else { 5.0 };
        assert!((r - want).abs() < 1e-9, "vertex {i}: {r}");
    }
    // First spike points down (sin 0, cos 0).
    assert_eq!(p.elements()[0], PathEl::MoveTo(Point::new(50.0, 60.0)));
}

#[test]
fn triangle_bounds_match_size() {
    let b = triangle(Point::new(20.0, 20.0), 8.0).bounding_box();
    assert_eq!(b, Rect::new(16.0, 16.0, 24.0, 24.0));
}

#[test]
fn drop_spans_apex_to_base() {
    let b = drop(Point::new(0.0, 0.0), 10.0).bounding_box();
    assert!((b.y0 + 10.0).abs() < 1e-9);
    assert!((b.y1 - 10.0).abs() < 1e-9);
    assert!((b.x0 + b.x1).abs() < 1e-9, "teardrop must be symmetric");
}

#[test]
fn annulus_excludes_its_hole() {
    let c = Point::new(100.0, 100.0);
    let ring = annulus(c, 40.0, 30.0);
    assert!(ring.contains(Point::new(135.0, 100.0)));
    assert!(ring.contains(Point::new(100.0, 65.0)));
    assert!(!ring.contains(c));
    assert!(!ring.contains(Point::new(145.0, 100.0)));
}

#[test]
fn upper_arc_cap_covers_only_the_top_half() {
    let c = Point::new(100.0, 100.0);
    let cap = arc_cap(c, 50.0, PI, PI);
    assert!(cap.contains(Point::new(100.0, 60.0)));
    assert!(!cap.contains(Point::new(100.0, 140.0)));
}

#[test]
fn ellipse_rotation_mirrors_under_reflection() {
    let left = ellipse(Point::new(80.0, 50.0), 20.0, 5.0, PI / 12.0);
    let right = ellipse(Point::new(120.0, 50.0), 20.0, 5.0, -PI / 12.0);
    let mirrored = mirror_x(&left, 100.0);
    let a = mirrored.bounding_box();
    let b = right.bounding_box();
    // Both are flattened approximations, so allow the flattening tolerance.
    assert!((a.x0 - b.x0).abs() < 2.0 * TOLERANCE);
    assert!((a.y0 - b.y0).abs() < 2.0 * TOLERANCE);
    assert!((a.x1 - b.x1).abs() < 2.0 * TOLERANCE);
    assert!((a.y1 - b.y1).abs() < 2.0 * TOLERANCE);
}

#[test]
fn negative_sizes_degenerate_without_panicking() {
    assert!(circle(Point::ZERO, -3.0).bounding_box().area().abs() < 1e-9);
    assert!(square(Point::ZERO, -3.0).bounding_box().area().abs() < 1e-9);
    let _ = star(Point::ZERO, -1.0, -0.5, 0);
}

#[test]
fn negative_sizes_collapse_particle_shapes() {
    let c = Point::new(10.0, 10.0);
    for path in [triangle(c, -8.0), drop(c, -8.0), star5(c, -8.0)] {
        let bbox = path.bounding_box();
        assert!(bbox.area().abs() < 1e-9, "{bbox:?}");
        assert!(path.area().abs() < 1e-9);
    }
    assert!(star(c, -4.0, 2.0, 5).bounding_box().width() <= 4.0);
}
