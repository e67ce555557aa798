use crate::foundation::error::{ToonError, ToonResult};
use crate::foundation::math::mul_div255_u8;

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Largest edge a CPU surface can address (`vello_cpu` pixmaps are `u16`-sized).
pub const MAX_SURFACE_EDGE: u32 = u16::MAX as u32;

/// Largest RGBA8 buffer a surface may allocate (256 MiB, an 8192x8192 square).
pub const MAX_SURFACE_BYTES: u64 = 8192 * 8192 * 4;

/// Raster dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Default avatar canvas (400×400).
    pub const AVATAR: Canvas = Canvas {
        width: 400,
        height: 400,
    };

    /// Create a validated canvas with non-zero edges that fit a CPU surface.
    pub fn new(width: u32, height: u32) -> ToonResult<Self> {
        let c = Self { width, height };
        if !c.is_drawable() {
            return Err(ToonError::validation(format!(
                "canvas must be between 1x1 and {MAX_SURFACE_EDGE}x{MAX_SURFACE_EDGE} \
                 within {MAX_SURFACE_BYTES} bytes, got {width}x{height}"
            )));
        }
        Ok(c)
    }

    /// Square canvas with edge `size`.
    pub fn square(size: u32) -> ToonResult<Self> {
        Self::new(size, size)
    }

    /// Return `true` when a surface of this size can be allocated.
    pub fn is_drawable(self) -> bool {
        self.width > 0
            && self.height > 0
            && self.width <= MAX_SURFACE_EDGE
            && self.height <= MAX_SURFACE_EDGE
            && self.rgba_len() <= MAX_SURFACE_BYTES
    }

    /// Geometric center in pixel space.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Full-canvas rectangle.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }

    /// Number of bytes in a tightly packed RGBA8 buffer of this size.
    pub fn rgba_len(self) -> u64 {
        u64::from(self.width) * u64::from(self.height) * 4
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::AVATAR
    }
}

/// Straight-alpha RGBA8 paint color handed to surfaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (not premultiplied into r/g/b).
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba8 = Rgba8::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Rgba8 = Rgba8::opaque(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Rgba8 = Rgba8::opaque(255, 255, 255);

    /// Build a color from all four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same color with alpha scaled by `opacity` in `[0, 1]` (clamped, rounded).
    pub fn with_opacity(self, opacity: f64) -> Self {
        let op = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self {
            a: mul_div255_u8(self.a, op),
            ..self
        }
    }

    /// Return `true` when the color has no coverage.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
