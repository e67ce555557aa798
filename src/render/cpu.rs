use crate::foundation::core::{BezPath, Canvas, MAX_SURFACE_BYTES, Rgba8};
use crate::foundation::error::{ToonError, ToonResult};
use crate::render::surface::{DrawSurface, FrameRGBA};

/// CPU raster surface powered by `vello_cpu`.
///
/// Draw calls are recorded into a `vello_cpu::RenderContext` and rasterized on
/// [`CpuSurface::read_back`]. The context is reused across renders of the same size.
pub struct CpuSurface {
    canvas: Canvas,
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
}

impl std::fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuSurface")
            .field("canvas", &self.canvas)
            .finish_non_exhaustive()
    }
}

impl CpuSurface {
    /// Allocate a surface for `canvas`.
    ///
    /// Fails when either edge is zero, does not fit the rasterizer's `u16` addressing, or the
    /// pixel buffer would exceed [`MAX_SURFACE_BYTES`].
    pub fn new(canvas: Canvas) -> ToonResult<Self> {
        if canvas.width == 0 || canvas.height == 0 {
            return Err(ToonError::render("surface must be at least 1x1"));
        }
        if canvas.rgba_len() > MAX_SURFACE_BYTES {
            return Err(ToonError::render(format!(
                "surface {}x{} needs {} bytes, limit is {MAX_SURFACE_BYTES}",
                canvas.width,
                canvas.height,
                canvas.rgba_len()
            )));
        }
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| ToonError::render("surface width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| ToonError::render("surface height exceeds u16"))?;
        Ok(Self {
            canvas,
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
        })
    }

    /// Rasterize everything drawn since the last [`DrawSurface::clear`] and return the pixels.
    ///
    /// Pixels are premultiplied RGBA8.
    pub fn read_back(&mut self) -> FrameRGBA {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        FrameRGBA {
            width: self.canvas.width,
            height: self.canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    fn set_paint(&mut self, paint: Rgba8) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            paint.r, paint.g, paint.b, paint.a,
        ));
    }
}

impl DrawSurface for CpuSurface {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn clear(&mut self, color: Rgba8) {
        self.ctx.reset();
        if !color.is_transparent() {
            self.set_paint(color);
            self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(self.width),
                f64::from(self.height),
            ));
        }
    }

    fn fill_path(&mut self, path: &BezPath, paint: Rgba8) {
        if paint.is_transparent() {
            return;
        }
        self.set_paint(paint);
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    fn stroke_path(&mut self, path: &BezPath, width: f64, paint: Rgba8) {
        if paint.is_transparent() || width <= 0.0 {
            return;
        }
        self.set_paint(paint);
        self.ctx.set_stroke(
            vello_cpu::kurbo::Stroke::new(width)
                .with_caps(vello_cpu::kurbo::Cap::Butt)
                .with_join(vello_cpu::kurbo::Join::Miter),
        );
        self.ctx.stroke_path(&bezpath_to_cpu(path));
    }
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
