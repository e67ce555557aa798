use crate::avatar::layout::FaceLayout;
use crate::avatar::options::MAX_BLUSH;
use crate::foundation::core::{Point, Rgba8};
use crate::render::surface::DrawSurface;
use crate::shapes::primitives::circle;

/// Blush hue; intensity only changes its alpha.
pub const BLUSH_COLOR: Rgba8 = Rgba8::opaque(255, 150, 150);

/// Cheek centers `(left, right)`.
pub fn cheek_centers(face: &FaceLayout) -> (Point, Point) {
    (face.at(-0.15, 0.05), face.at(0.15, 0.05))
}

/// Draw both cheeks with opacity `intensity / 100`. Zero draws nothing.
pub fn draw_blush(surface: &mut dyn DrawSurface, intensity: u8, face: &FaceLayout) {
    if intensity == 0 {
        return;
    }
    let paint = BLUSH_COLOR.with_opacity(f64::from(intensity) / f64::from(MAX_BLUSH));
    let (left, right) = cheek_centers(face);
    let r = face.w(0.08);
    surface.fill_path(&circle(left, r), paint);
    surface.fill_path(&circle(right, r), paint);
}
