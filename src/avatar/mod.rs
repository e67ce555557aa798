//! Procedural avatar: options, per-feature renderers and the composition pipeline.

/// Accessory overlays.
pub mod accessory;
/// Cheek blush.
pub mod blush;
/// Eyes and eyebrows.
pub mod eyes;
/// Hair silhouettes.
pub mod hair;
/// Face geometry derived from the canvas.
pub mod layout;
/// Mouth strokes.
pub mod mouth;
/// Option record and its closed style enums.
pub mod options;
/// Fixed z-order composition.
pub mod pipeline;
/// Random option generation.
pub mod randomize;
