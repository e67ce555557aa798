//! Stateless path builders shared by the avatar features and the particle animator.
//!
//! Every builder returns a closed [`BezPath`] in pixel space (y down). Angles are in radians:
//! `0` points right and positive sweeps turn clockwise on screen.
//! Negative sizes yield degenerate paths rather than errors.

use std::f64::consts::{PI, TAU};

use kurbo::{Affine, BezPath, Circle, CircleSegment, Ellipse, Point, Rect, Shape, Vec2};

/// Flattening tolerance for conic sections, in pixels.
pub const TOLERANCE: f64 = 0.1;

/// Filled circle.
pub fn circle(center: Point, radius: f64) -> BezPath {
    Circle::new(center, radius.max(0.0)).to_path(TOLERANCE)
}

/// Filled ellipse with radii `(rx, ry)` rotated by `rotation` radians about its center.
pub fn ellipse(center: Point, rx: f64, ry: f64, rotation: f64) -> BezPath {
    Ellipse::new(center, Vec2::new(rx.max(0.0), ry.max(0.0)), rotation).to_path(TOLERANCE)
}

/// Ring between `inner` and `outer` radii.
pub fn annulus(center: Point, outer: f64, inner: f64) -> BezPath {
    let outer = outer.max(0.0);
    let inner = inner.clamp(0.0, outer);
    CircleSegment::new(center, outer, inner, 0.0, TAU).to_path(TOLERANCE)
}

/// Circular segment: the arc from `start` sweeping `sweep` radians, closed by its chord.
pub fn arc_cap(center: Point, radius: f64, start: f64, sweep: f64) -> BezPath {
    let mut p = arc_stroke(center, radius, start, sweep);
    p.close_path();
    p
}

/// Open circular arc, suitable for stroking.
pub fn arc_stroke(center: Point, radius: f64, start: f64, sweep: f64) -> BezPath {
    let radius = radius.max(0.0);
    let mut p = BezPath::new();
    p.move_to(point_on_circle(center, radius, start));
    append_arc(&mut p, center, radius, start, sweep);
    p
}

/// Append an arc to `path`, continuing from its current point.
///
/// The current point must already sit on the arc start. No connecting line is inserted, so
/// callers that need one add it explicitly.
pub fn append_arc(path: &mut BezPath, center: Point, radius: f64, start: f64, sweep: f64) {
    let arc = kurbo::Arc {
        center,
        radii: Vec2::new(radius, radius),
        start_angle: start,
        sweep_angle: sweep,
        x_rotation: 0.0,
    };
    path.extend(arc.append_iter(TOLERANCE));
}

/// Point at `angle` on the circle of `radius` around `center`.
pub fn point_on_circle(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Star with `spikes` points alternating between `outer` and `inner` radius.
///
/// Vertex `i` sits at `center + r * (sin(θ), cos(θ))` with `θ = π·i/spikes`, so the first spike
/// points straight down.
pub fn star(center: Point, outer: f64, inner: f64, spikes: u32) -> BezPath {
    let (outer, inner) = (outer.max(0.0), inner.max(0.0));
    let mut p = BezPath::new();
    let spikes = spikes.max(1);
    for i in 0..spikes * 2 {
        let r = if i % 2 == 0 { outer } else { inner };
        let angle = PI * f64::from(i) / f64::from(spikes);
        let v = Point::new(center.x + r * angle.sin(), center.y + r * angle.cos());
        if i == 0 {
            p.move_to(v);
        } else {
            p.line_to(v);
        }
    }
    p.close_path();
    p
}

/// Five-pointed star whose inner radius is half the outer one.
pub fn star5(center: Point, size: f64) -> BezPath {
    star(center, size, size / 2.0, 5)
}

/// Isosceles triangle, apex up, with base width and height equal to `size`.
pub fn triangle(center: Point, size: f64) -> BezPath {
    let h = size.max(0.0) / 2.0;
    let mut p = BezPath::new();
    p.move_to((center.x, center.y - h));
    p.line_to((center.x + h, center.y + h));
    p.line_to((center.x - h, center.y + h));
    p.close_path();
    p
}

/// Axis-aligned square of edge `size` centered on `center`.
pub fn square(center: Point, size: f64) -> BezPath {
    let h = size.max(0.0) / 2.0;
    Rect::new(center.x - h, center.y - h, center.x + h, center.y + h).to_path(TOLERANCE)
}

/// Teardrop: mirrored cubic curves from the apex `(x, y - size)` to the base `(x, y + size)`.
pub fn drop(center: Point, size: f64) -> BezPath {
    let Point { x, y } = center;
    let size = size.max(0.0);
    let mut p = BezPath::new();
    p.move_to((x, y - size));
    p.curve_to((x + size, y - size), (x + size, y), (x, y + size));
    p.curve_to((x - size, y), (x - size, y - size), (x, y - size));
    p.close_path();
    p
}

/// Straight segment, for stroking.
pub fn segment(a: Point, b: Point) -> BezPath {
    let mut p = BezPath::new();
    p.move_to(a);
    p.line_to(b);
    p
}

/// Reflect `path` across the vertical line `x = axis_x`.
pub fn mirror_x(path: &BezPath, axis_x: f64) -> BezPath {
    let mut out = path.clone();
    out.apply_affine(Affine::new([-1.0, 0.0, 0.0, 1.0, 2.0 * axis_x, 0.0]));
    out
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/primitives.rs"]
mod tests;
