//! Avatar composition: the fixed z-order that turns [`AvatarOptions`] into draw calls.
//!
//! The pipeline is stateless. Each call clears the surface and replays every stage, so repeated
//! renders with the same options on the same surface produce the same pixels.

use crate::avatar::accessory::draw_accessory;
use crate::avatar::blush::draw_blush;
use crate::avatar::eyes::draw_eyes;
use crate::avatar::hair::{HairLayer, draw_hair};
use crate::avatar::layout::FaceLayout;
use crate::avatar::mouth::draw_mouth;
use crate::avatar::options::{Accessory, AvatarOptions};
use crate::foundation::core::{Canvas, Rgba8};
use crate::render::cpu::CpuSurface;
use crate::render::surface::{DrawSurface, FrameRGBA, Stage};
use crate::shapes::primitives::circle;

/// Background behind the head.
pub const BACKGROUND: Rgba8 = Rgba8::opaque(0xF8, 0xF9, 0xFA);

/// Outcome of [`render_avatar`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderStatus {
    /// Every stage ran.
    Drawn,
    /// No surface was available; nothing was drawn.
    SkippedNoSurface,
}

/// Render `opts` onto `surface`, or do nothing when there is no surface.
#[tracing::instrument(
    level = "debug",
    skip(surface, opts),
    fields(hair = %opts.hair_style, accessory = %opts.accessory)
)]
pub fn render_avatar(
    surface: Option<&mut dyn DrawSurface>,
    opts: &AvatarOptions,
) -> RenderStatus {
    match surface {
        Some(surface) if surface.canvas().is_drawable() => {
            draw_avatar(surface, opts);
            RenderStatus::Drawn
        }
        Some(_) => {
            tracing::debug!("surface has no drawable area; skipping avatar render");
            RenderStatus::SkippedNoSurface
        }
        None => {
            tracing::debug!("no surface; skipping avatar render");
            RenderStatus::SkippedNoSurface
        }
    }
}

/// Run every stage of the pipeline against `surface`.
pub fn draw_avatar(surface: &mut dyn DrawSurface, opts: &AvatarOptions) {
    let canvas = surface.canvas();
    let face = FaceLayout::for_canvas(canvas);

    surface.stage(Stage::Clear);
    surface.clear(Rgba8::TRANSPARENT);

    surface.stage(Stage::Background);
    surface.fill_rect(canvas.rect(), BACKGROUND);

    surface.stage(Stage::HairBack);
    draw_hair(surface, opts.hair_style, opts.hair_color, HairLayer::Back, &face);

    surface.stage(Stage::Head);
    surface.fill_path(&circle(face.center, face.head_radius()), opts.skin_tone.to_rgba());

    surface.stage(Stage::HairFront);
    draw_hair(surface, opts.hair_style, opts.hair_color, HairLayer::Front, &face);

    surface.stage(Stage::Eyes);
    draw_eyes(surface, opts.eye_style, opts.eye_color, &face);

    surface.stage(Stage::Mouth);
    draw_mouth(surface, opts.mouth_style, &face);

    if opts.blush_intensity > 0 {
        surface.stage(Stage::Blush);
        draw_blush(surface, opts.blush_intensity, &face);
    }

    if opts.accessory != Accessory::None {
        surface.stage(Stage::Accessory);
        draw_accessory(surface, opts.accessory, &face);
    }
}

/// Owns a CPU surface and renders avatars into frames.
///
/// A canvas the rasterizer cannot address leaves the renderer without a surface; every render
/// then returns `None`.
#[derive(Debug)]
pub struct AvatarRenderer {
    canvas: Canvas,
    surface: Option<CpuSurface>,
}

impl AvatarRenderer {
    /// Create a renderer for `canvas`.
    pub fn new(canvas: Canvas) -> Self {
        let surface = match CpuSurface::new(canvas) {
            Ok(s) => Some(s),
            Err(e) => {
                tracing::warn!(
                    width = canvas.width,
                    height = canvas.height,
                    "no avatar surface: {e}"
                );
                None
            }
        };
        Self { canvas, surface }
    }

    /// Canvas this renderer was created for.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Whether a surface was acquired.
    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    /// Render `opts` and read the pixels back.
    pub fn render(&mut self, opts: &AvatarOptions) -> Option<FrameRGBA> {
        let surface = self.surface.as_mut()?;
        let target: &mut dyn DrawSurface = surface;
        match render_avatar(Some(target), opts) {
            RenderStatus::Drawn => Some(surface.read_back()),
            RenderStatus::SkippedNoSurface => None,
        }
    }
}

impl Default for AvatarRenderer {
    fn default() -> Self {
        Self::new(Canvas::AVATAR)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/avatar/pipeline.rs"]
mod tests;
