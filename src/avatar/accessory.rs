//! Accessory overlays, drawn after every facial feature so they can occlude eyes and mouth.
//!
//! Glasses follow the classic two-lens frame. Eyepatch, mask and headphones use simple
//! placeholder geometry anchored to the same eye and mouth coordinates as the face.

use std::f64::consts::PI;

use crate::avatar::layout::FaceLayout;
use crate::avatar::options::Accessory;
use crate::foundation::core::{Point, Rect, Rgba8};
use crate::render::surface::DrawSurface;
use crate::shapes::primitives::{arc_stroke, ellipse, mirror_x, segment, TOLERANCE};
use kurbo::{RoundedRect, Shape};

/// Frame color for glasses.
pub const FRAME_COLOR: Rgba8 = Rgba8::BLACK;
/// Eyepatch and strap color.
pub const PATCH_COLOR: Rgba8 = Rgba8::opaque(0x21, 0x25, 0x29);
/// Mask fabric color.
pub const MASK_COLOR: Rgba8 = Rgba8::opaque(0xF1, 0xF3, 0xF5);
/// Mask pleats and ear loops.
pub const MASK_TRIM_COLOR: Rgba8 = Rgba8::opaque(0xAD, 0xB5, 0xBD);
/// Headband color.
pub const BAND_COLOR: Rgba8 = Rgba8::opaque(0x34, 0x3A, 0x40);
/// Ear cup color.
pub const CUP_COLOR: Rgba8 = Rgba8::opaque(0x49, 0x50, 0x57);

/// Draw `accessory`. [`Accessory::None`] draws nothing.
pub fn draw_accessory(surface: &mut dyn DrawSurface, accessory: Accessory, face: &FaceLayout) {
    match accessory {
        Accessory::None => {}
        Accessory::Glasses => glasses(surface, face),
        Accessory::Eyepatch => eyepatch(surface, face),
        Accessory::Mask => mask(surface, face),
        Accessory::Headphones => headphones(surface, face),
    }
}

fn glasses(surface: &mut dyn DrawSurface, face: &FaceLayout) {
    let line = face.w(0.008);
    let eye = face.left_eye();
    let (rx, ry) = (face.w(0.09), face.w(0.11));
    let cx = face.center.x;

    let lens = ellipse(eye, rx, ry, 0.0);
    surface.stroke_path(&lens, line, FRAME_COLOR);
    surface.stroke_path(&mirror_x(&lens, cx), line, FRAME_COLOR);

    let bridge = segment(
        Point::new(eye.x + rx, eye.y),
        Point::new(face.right_eye().x - rx, eye.y),
    );
    surface.stroke_path(&bridge, line, FRAME_COLOR);

    let temple = segment(
        Point::new(eye.x - rx, eye.y),
        Point::new(cx - face.head_radius(), eye.y - face.w(0.02)),
    );
    surface.stroke_path(&temple, line, FRAME_COLOR);
    surface.stroke_path(&mirror_x(&temple, cx), line, FRAME_COLOR);
}

fn eyepatch(surface: &mut dyn DrawSurface, face: &FaceLayout) {
    let eye = face.left_eye();
    let strap = face.w(0.012);
    surface.stroke_path(
        &segment(Point::new(face.center.x - face.head_radius(), eye.y), eye),
        strap,
        PATCH_COLOR,
    );
    surface.stroke_path(&segment(eye, face.at(0.3, -0.19)), strap, PATCH_COLOR);
    // Large enough to hide the widest eye style.
    surface.fill_path(&ellipse(eye, face.w(0.1), face.w(0.12), 0.0), PATCH_COLOR);
}

fn mask(surface: &mut dyn DrawSurface, face: &FaceLayout) {
    let top_left = face.at(-0.24, 0.06);
    let bottom_right = face.at(0.24, 0.3);
    let body = RoundedRect::from_rect(Rect::from_points(top_left, bottom_right), face.w(0.06));

    let trim = face.w(0.008);
    let loop_left = segment(
        Point::new(top_left.x, top_left.y + face.w(0.03)),
        Point::new(face.center.x - face.head_radius(), face.center.y),
    );
    surface.stroke_path(&loop_left, trim, MASK_TRIM_COLOR);
    surface.stroke_path(&mirror_x(&loop_left, face.center.x), trim, MASK_TRIM_COLOR);

    surface.fill_path(&body.to_path(TOLERANCE), MASK_COLOR);
    for fy in [0.14, 0.2] {
        let pleat = segment(face.at(-0.2, fy), face.at(0.2, fy));
        surface.stroke_path(&pleat, trim, MASK_TRIM_COLOR);
    }
}

fn headphones(surface: &mut dyn DrawSurface, face: &FaceLayout) {
    let band = arc_stroke(face.center, face.w(0.4), PI, PI);
    surface.stroke_path(&band, face.w(0.04), BAND_COLOR);

    let (half_w, half_h) = (face.w(0.04), face.w(0.09));
    let cup_center = face.at(-0.37, 0.0);
    let cup = RoundedRect::new(
        cup_center.x - half_w,
        cup_center.y - half_h,
        cup_center.x + half_w,
        cup_center.y + half_h,
        face.w(0.03),
    )
    .to_path(TOLERANCE);
    surface.fill_path(&cup, CUP_COLOR);
    surface.fill_path(&mirror_x(&cup, face.center.x), CUP_COLOR);
}

#[cfg(test)]
#[path = "../../tests/unit/avatar/accessory.rs"]
mod tests;
