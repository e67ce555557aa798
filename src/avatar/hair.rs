use std::f64::consts::PI;

use crate::avatar::layout::FaceLayout;
use crate::avatar::options::HairStyle;
use crate::foundation::color::Rgb8;
use crate::foundation::core::{BezPath, Rgba8};
use crate::render::surface::DrawSurface;
use crate::shapes::primitives::{annulus, append_arc, arc_cap, ellipse, mirror_x};

/// Hair ties are always this dark gray, whatever the hair color.
pub const TIE_COLOR: Rgba8 = Rgba8::opaque(0x33, 0x33, 0x33);

/// Which side of the head a hair pass draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HairLayer {
    /// Geometry hidden behind the head disk where they overlap.
    Back,
    /// Geometry drawn over the head, below the eyes.
    Front,
}

/// Draw the `layer` part of `style` in `color`.
pub fn draw_hair(
    surface: &mut dyn DrawSurface,
    style: HairStyle,
    color: Rgb8,
    layer: HairLayer,
    face: &FaceLayout,
) {
    let paint = color.to_rgba();
    match layer {
        HairLayer::Back => match style {
            HairStyle::Medium => surface.fill_path(&flowing_sides(face, 0.4, 0.25, 0.4), paint),
            HairStyle::Long => surface.fill_path(&flowing_sides(face, 0.45, 0.3, 0.5), paint),
            HairStyle::Short | HairStyle::Ponytail | HairStyle::Twintails => {}
        },
        HairLayer::Front => {
            surface.fill_path(&base_ring(face), paint);
            match style {
                HairStyle::Short | HairStyle::Medium => {
                    surface.fill_path(&top_cap(face), paint);
                }
                HairStyle::Long => {}
                HairStyle::Ponytail => {
                    surface.fill_path(&top_cap(face), paint);
                    surface.fill_path(&ponytail(face), paint);
                    let tie = ellipse(face.at(0.1, -0.05), face.w(0.03), face.w(0.06), PI / 4.0);
                    surface.fill_path(&tie, TIE_COLOR);
                }
                HairStyle::Twintails => {
                    surface.fill_path(&top_cap(face), paint);
                    let left = twintail_left(face);
                    surface.fill_path(&left, paint);
                    surface.fill_path(&mirror_x(&left, face.center.x), paint);

                    let left_tie =
                        ellipse(face.at(-0.25, -0.05), face.w(0.03), face.w(0.06), PI / 4.0);
                    surface.fill_path(&left_tie, TIE_COLOR);
                    surface.fill_path(&mirror_x(&left_tie, face.center.x), TIE_COLOR);
                }
            }
        }
    }
}

/// Thin ring hugging the head silhouette.
fn base_ring(face: &FaceLayout) -> BezPath {
    annulus(face.center, face.w(0.36), face.head_radius())
}

/// Half disk over the forehead, its chord slightly above the face center.
fn top_cap(face: &FaceLayout) -> BezPath {
    arc_cap(face.at(0.0, -0.05), face.w(0.36), PI, PI)
}

/// Side locks falling from the temples, closed over the crown.
///
/// `ctrl` is the horizontal bulge of the curves, `(end_x, end_y)` where the tips land.
fn flowing_sides(face: &FaceLayout, ctrl: f64, end_x: f64, end_y: f64) -> BezPath {
    let mut p = BezPath::new();
    p.move_to(face.at(-0.36, 0.0));
    p.quad_to(face.at(-ctrl, 0.3), face.at(-end_x, end_y));
    p.line_to(face.at(end_x, end_y));
    p.quad_to(face.at(ctrl, 0.3), face.at(0.36, 0.0));
    append_arc(&mut p, face.center, face.w(0.36), 0.0, -PI);
    p.close_path();
    p
}

fn ponytail(face: &FaceLayout) -> BezPath {
    let mut p = BezPath::new();
    p.move_to(face.at(0.0, -0.2));
    p.quad_to(face.at(0.2, -0.1), face.at(0.3, 0.3));
    p.quad_to(face.at(0.25, 0.35), face.at(0.2, 0.3));
    p.quad_to(face.at(0.1, -0.05), face.at(0.0, -0.15));
    p.close_path();
    p
}

fn twintail_left(face: &FaceLayout) -> BezPath {
    let mut p = BezPath::new();
    p.move_to(face.at(-0.2, -0.15));
    p.quad_to(face.at(-0.35, 0.0), face.at(-0.3, 0.3));
    p.quad_to(face.at(-0.35, 0.35), face.at(-0.4, 0.3));
    p.quad_to(face.at(-0.45, 0.0), face.at(-0.25, -0.15));
    p.close_path();
    p
}

#[cfg(test)]
#[path = "../../tests/unit/avatar/hair.rs"]
mod tests;
