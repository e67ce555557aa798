use crate::foundation::core::{BezPath, Canvas, Rect, Rgba8};
use crate::foundation::math::unpremultiply;
use kurbo::Shape;

/// Pipeline stage announced to a surface before the stage issues its draw calls.
///
/// Raster surfaces ignore stages; recording surfaces use them to attribute draw calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    /// Surface reset.
    Clear,
    /// Full-canvas background fill.
    Background,
    /// Hair geometry that sits behind the head.
    HairBack,
    /// Head disk.
    Head,
    /// Hair geometry drawn over the head.
    HairFront,
    /// Eyes and eyebrows.
    Eyes,
    /// Mouth stroke.
    Mouth,
    /// Cheek blush.
    Blush,
    /// Accessory overlay.
    Accessory,
    /// Mood particles.
    Particles,
}

/// Immediate-mode drawing target.
///
/// Later calls paint over earlier ones (painter's algorithm); this is how features occlude each
/// other. Colors are straight alpha and passed through untouched.
pub trait DrawSurface {
    /// Dimensions of the raster behind this surface.
    fn canvas(&self) -> Canvas;

    /// Discard everything drawn so far and reset the surface to `color`.
    fn clear(&mut self, color: Rgba8);

    /// Fill `path` (non-zero winding) with `paint`.
    fn fill_path(&mut self, path: &BezPath, paint: Rgba8);

    /// Stroke `path` with butt caps and miter joins at `width` pixels.
    fn stroke_path(&mut self, path: &BezPath, width: f64, paint: Rgba8);

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, paint: Rgba8) {
        self.fill_path(&rect.to_path(0.1), paint);
    }

    /// Announce the stage the following draw calls belong to.
    fn stage(&mut self, _stage: Stage) {}
}

/// A rendered raster as RGBA8 pixels.
///
/// Surfaces produce **premultiplied** pixels; the flag makes that explicit at API boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA8 value at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Copy of the pixel data with alpha premultiplication undone.
    pub fn to_straight_rgba(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            out.extend_from_slice(&unpremultiply([px[0], px[1], px[2], px[3]]));
        }
        out
    }
}
