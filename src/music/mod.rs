//! Recommendation table and the simulated music player.

/// Genre-keyed track lists.
pub mod catalog;
/// Play/pause/skip transport.
pub mod player;
