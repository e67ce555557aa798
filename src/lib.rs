//! toonface draws parametric cartoon avatars and mood-reactive particle animations.
//!
//! - Describe an avatar with [`AvatarOptions`] (or draw one with [`randomize`])
//! - Render it with [`render_avatar`] onto any [`DrawSurface`], or let an [`AvatarRenderer`] own a
//!   CPU surface and hand back a [`FrameRGBA`]
//! - Export frames with [`export_png`], or stream a [`ParticleField`] through an [`AnimationLoop`]
//!   into a [`FrameSink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Avatar options, feature renderers and the composition pipeline.
pub mod avatar;
/// PNG export and frame sinks.
pub mod encode;
/// Moods, particle presets and the animation loop.
pub mod mood;
/// Recommendation table and music player simulation.
pub mod music;
/// Drawing surfaces.
pub mod render;
/// Path builders shared by every renderer.
pub mod shapes;

pub use crate::foundation::color::Rgb8;
pub use crate::foundation::core::{
    Affine, BezPath, Canvas, MAX_SURFACE_BYTES, MAX_SURFACE_EDGE, Point, Rect, Rgba8, Vec2,
};
pub use crate::foundation::error::{ToonError, ToonResult};
pub use crate::foundation::math::Rng64;

pub use crate::avatar::options::{
    Accessory, AvatarOptions, EyeStyle, HairStyle, MAX_BLUSH, MouthStyle, clamp_blush,
};
pub use crate::avatar::pipeline::{
    AvatarRenderer, BACKGROUND, RenderStatus, draw_avatar, render_avatar,
};
pub use crate::avatar::randomize::randomize;
pub use crate::encode::png::{encode_png, export_png};
pub use crate::encode::sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig};
pub use crate::mood::animation::{AnimationLoop, CancelToken, LoopStats};
pub use crate::mood::kind::{Mood, dominant_mood};
pub use crate::mood::particles::{MoodPreset, Particle, ParticleField, ParticleShape};
pub use crate::music::catalog::{Track, TrackCatalog};
pub use crate::music::player::{Player, Tick, format_time};
pub use crate::render::cpu::CpuSurface;
pub use crate::render::recording::RecordingSurface;
pub use crate::render::surface::{DrawSurface, FrameRGBA, Stage};
