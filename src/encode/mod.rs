//! Frame output.
//!
//! Sinks consume rendered frames in order; PNG helpers write single frames.

/// PNG encoding via the `image` crate.
pub mod png;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
