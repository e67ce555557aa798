use crate::encode::png::export_png;
use crate::foundation::error::{ToonError, ToonResult};
use crate::render::surface::FrameRGBA;
use std::path::{Path, PathBuf};

/// Configuration handed to a [`FrameSink`] before the first frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SinkConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Nominal playback rate.
    pub fps: u32,
}

/// Consumer of rendered frames.
///
/// `push_frame` is called with strictly increasing indices, starting at 0, between one `begin`
/// and one `end`.
pub trait FrameSink: Send {
    /// Called once before any frame.
    fn begin(&mut self, cfg: SinkConfig) -> ToonResult<()>;
    /// Consume frame `idx`.
    fn push_frame(&mut self, idx: u64, frame: &FrameRGBA) -> ToonResult<()>;
    /// Called once after the last frame, including after cancellation.
    fn end(&mut self) -> ToonResult<()>;
}

/// Keeps every frame in memory. Handy for tests.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(u64, FrameRGBA)>,
    ended: bool,
}

impl InMemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured by `begin`.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Captured frames in push order.
    pub fn frames(&self) -> &[(u64, FrameRGBA)] {
        &self.frames
    }

    /// Whether `end` has been called since the last `begin`.
    pub fn ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> ToonResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: u64, frame: &FrameRGBA) -> ToonResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> ToonResult<()> {
        self.ended = true;
        Ok(())
    }
}

/// Writes each frame as `<prefix>_<index>.png` into a directory.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    prefix: String,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    /// Sink writing into `dir` with file names starting with `prefix`.
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            written: Vec::new(),
        }
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn frame_path(&self, idx: u64) -> PathBuf {
        self.dir.join(format!("{}_{idx:05}.png", self.prefix))
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> ToonResult<()> {
        if cfg.width == 0 || cfg.height == 0 {
            return Err(ToonError::validation("png sequence needs a non-empty frame"));
        }
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: u64, frame: &FrameRGBA) -> ToonResult<()> {
        let path = self.frame_path(idx);
        export_png(frame, &path)?;
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> ToonResult<()> {
        tracing::debug!(
            frames = self.written.len(),
            dir = %self.dir.display(),
            "png sequence finished"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
