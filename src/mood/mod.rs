//! Mood buckets and the particle animation keyed by them.

/// Frame loop and cancellation.
pub mod animation;
/// The mood enum and expression mapping.
pub mod kind;
/// Presets and particle simulation.
pub mod particles;
