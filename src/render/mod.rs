//! Drawing surfaces.
//!
//! Feature renderers talk to a [`surface::DrawSurface`]; [`cpu::CpuSurface`] rasterizes with
//! `vello_cpu` and [`recording::RecordingSurface`] keeps the calls for inspection.

/// `vello_cpu`-backed raster surface.
pub mod cpu;
/// Surface that records draw calls.
pub mod recording;
/// Surface trait, pipeline stages and read-back frames.
pub mod surface;
