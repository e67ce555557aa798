use std::f64::consts::PI;

use crate::avatar::layout::FaceLayout;
use crate::avatar::options::MouthStyle;
use crate::foundation::core::{BezPath, Point, Rgba8};
use crate::render::surface::DrawSurface;
use crate::shapes::primitives::{arc_stroke, segment};

/// Mouth line color.
pub const MOUTH_COLOR: Rgba8 = Rgba8::BLACK;

/// Draw the mouth as a single stroke, `0.01·width` wide.
pub fn draw_mouth(surface: &mut dyn DrawSurface, style: MouthStyle, face: &FaceLayout) {
    surface.stroke_path(&mouth_path(style, face), face.w(0.01), MOUTH_COLOR);
}

fn mouth_path(style: MouthStyle, face: &FaceLayout) -> BezPath {
    let cx = face.center.x;
    let y = face.mouth_y();
    match style {
        // Angles grow clockwise on screen, so this arc bulges downward.
        MouthStyle::Smile => arc_stroke(Point::new(cx, y), face.w(0.12), 0.1, PI - 0.2),
        MouthStyle::Neutral => segment(
            Point::new(cx - face.w(0.1), y),
            Point::new(cx + face.w(0.1), y),
        ),
        MouthStyle::Smirk => {
            let mut p = BezPath::new();
            p.move_to((cx - face.w(0.1), y));
            p.quad_to((cx, y - face.w(0.05)), (cx + face.w(0.1), y - face.w(0.02)));
            p
        }
    }
}
