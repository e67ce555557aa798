//! Frame loop driving a [`ParticleField`] into a [`FrameSink`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::Canvas;
use crate::foundation::error::ToonResult;
use crate::foundation::math::Rng64;
use crate::mood::kind::Mood;
use crate::mood::particles::ParticleField;
use crate::render::cpu::CpuSurface;
use crate::render::surface::FrameRGBA;

/// Default frame rate reported to sinks.
pub const DEFAULT_FPS: u32 = 60;

/// Shared flag that stops a running [`AnimationLoop`] before its next frame.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Fresh, uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Summary of one [`AnimationLoop::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoopStats {
    /// Frames requested.
    pub frames_requested: u64,
    /// Frames handed to the sink.
    pub frames_rendered: u64,
    /// Whether the token stopped the loop early.
    pub cancelled: bool,
}

/// Particle animation with its own raster surface.
///
/// Every frame moves each particle one step, then redraws the whole field on a transparent
/// background. Changing the mood respawns the particles.
#[derive(Debug)]
pub struct AnimationLoop {
    field: ParticleField,
    surface: CpuSurface,
    rng: Rng64,
    fps: u32,
}

impl AnimationLoop {
    /// Loop for `mood` on `canvas`, seeded for reproducible particles.
    pub fn new(mood: Mood, canvas: Canvas, seed: u64) -> ToonResult<Self> {
        let surface = CpuSurface::new(canvas)?;
        let mut rng = Rng64::new(seed);
        let field = ParticleField::spawn(mood, canvas, &mut rng);
        Ok(Self {
            field,
            surface,
            rng,
            fps: DEFAULT_FPS,
        })
    }

    /// Override the frame rate reported to sinks.
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps.max(1);
        self
    }

    /// Current particle field.
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// Switch to `mood`, discarding the current particles.
    pub fn set_mood(&mut self, mood: Mood) {
        tracing::debug!(from = %self.field.mood(), to = %mood, "respawning particles");
        self.field.set_mood(mood, &mut self.rng);
    }

    /// Advance one step and rasterize the result.
    pub fn next_frame(&mut self) -> FrameRGBA {
        self.field.step();
        self.field.draw(&mut self.surface);
        self.surface.read_back()
    }

    /// Render up to `frames` frames into `sink`, stopping early when `cancel` fires.
    ///
    /// The sink always sees `begin` and `end`, even for a cancelled run.
    #[tracing::instrument(level = "debug", skip(self, sink, cancel), fields(mood = %self.field.mood()))]
    pub fn run(
        &mut self,
        frames: u64,
        sink: &mut dyn FrameSink,
        cancel: &CancelToken,
    ) -> ToonResult<LoopStats> {
        let canvas = self.field.canvas();
        sink.begin(SinkConfig {
            width: canvas.width,
            height: canvas.height,
            fps: self.fps,
        })?;

        let mut stats = LoopStats {
            frames_requested: frames,
            ..LoopStats::default()
        };
        for idx in 0..frames {
            if cancel.is_cancelled() {
                stats.cancelled = true;
                break;
            }
            let frame = self.next_frame();
            sink.push_frame(idx, &frame)?;
            stats.frames_rendered += 1;
        }

        sink.end()?;
        tracing::debug!(
            rendered = stats.frames_rendered,
            cancelled = stats.cancelled,
            "animation loop finished"
        );
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mood/animation.rs"]
mod tests;
