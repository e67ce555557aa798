use std::f64::consts::PI;

use crate::avatar::layout::FaceLayout;
use crate::avatar::options::EyeStyle;
use crate::foundation::color::Rgb8;
use crate::foundation::core::{BezPath, Point, Rgba8};
use crate::render::surface::DrawSurface;
use crate::shapes::primitives::{ellipse, mirror_x};

/// Eyebrows are always this dark gray, whatever the eye color.
pub const BROW_COLOR: Rgba8 = Rgba8::opaque(0x33, 0x33, 0x33);

/// Per-style eye measurements, as fractions of the canvas width.
#[derive(Clone, Copy, Debug)]
struct EyeShape {
    sclera: (f64, f64),
    sclera_tilt: f64,
    iris: (f64, f64),
    pupil: (f64, f64),
    /// `(dx toward the face center, dy upward, radius)`.
    highlight: Option<(f64, f64, f64)>,
}

fn eye_shape(style: EyeStyle) -> EyeShape {
    match style {
        EyeStyle::Round => EyeShape {
            sclera: (0.06, 0.08),
            sclera_tilt: 0.0,
            iris: (0.03, 0.03),
            pupil: (0.015, 0.015),
            highlight: Some((0.015, 0.01, 0.008)),
        },
        EyeStyle::Almond => EyeShape {
            sclera: (0.07, 0.05),
            sclera_tilt: PI / 6.0,
            iris: (0.025, 0.025),
            pupil: (0.012, 0.012),
            highlight: Some((0.01, 0.005, 0.006)),
        },
        EyeStyle::Narrow => EyeShape {
            sclera: (0.08, 0.03),
            sclera_tilt: 0.0,
            iris: (0.04, 0.02),
            pupil: (0.02, 0.01),
            highlight: None,
        },
        EyeStyle::Wide => EyeShape {
            sclera: (0.08, 0.1),
            sclera_tilt: 0.0,
            iris: (0.04, 0.04),
            pupil: (0.02, 0.02),
            highlight: Some((0.02, 0.01, 0.01)),
        },
    }
}

/// Draw both eyes in `style` with `color` irises, then both eyebrows.
///
/// The right eye is the left eye reflected across the face center, so tilts and highlight
/// offsets mirror automatically.
pub fn draw_eyes(surface: &mut dyn DrawSurface, style: EyeStyle, color: Rgb8, face: &FaceLayout) {
    let iris = color.to_rgba();
    let left = left_eye_layers(eye_shape(style), iris, face);
    for (path, paint) in &left {
        surface.fill_path(path, *paint);
    }
    for (path, paint) in &left {
        surface.fill_path(&mirror_x(path, face.center.x), *paint);
    }

    let brow_center = Point::new(face.left_eye().x, face.eye_y() - face.w(0.08));
    let brow = ellipse(brow_center, face.w(0.08), face.w(0.02), PI / 12.0);
    surface.fill_path(&brow, BROW_COLOR);
    surface.fill_path(&mirror_x(&brow, face.center.x), BROW_COLOR);
}

/// Sclera, iris, pupil and highlight of the viewer's left eye, bottom to top.
fn left_eye_layers(shape: EyeShape, iris: Rgba8, face: &FaceLayout) -> Vec<(BezPath, Rgba8)> {
    let c = face.left_eye();
    let mut layers = vec![
        (
            ellipse(
                c,
                face.w(shape.sclera.0),
                face.w(shape.sclera.1),
                shape.sclera_tilt,
            ),
            Rgba8::WHITE,
        ),
        (
            ellipse(c, face.w(shape.iris.0), face.w(shape.iris.1), 0.0),
            iris,
        ),
        (
            ellipse(c, face.w(shape.pupil.0), face.w(shape.pupil.1), 0.0),
            Rgba8::BLACK,
        ),
    ];
    if let Some((dx, dy, r)) = shape.highlight {
        let spot = Point::new(c.x + face.w(dx), c.y - face.w(dy));
        layers.push((ellipse(spot, face.w(r), face.w(r), 0.0), Rgba8::WHITE));
    }
    layers
}

#[cfg(test)]
#[path = "../../tests/unit/avatar/eyes.rs"]
mod tests;
