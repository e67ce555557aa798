use crate::foundation::core::{BezPath, Canvas, Rect, Rgba8};
use crate::render::surface::{DrawSurface, Stage};
use kurbo::Shape;

/// What a recorded draw call did.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawKind {
    /// Surface reset to a color.
    Clear(Rgba8),
    /// Filled path.
    Fill(BezPath),
    /// Stroked path with its line width.
    Stroke(BezPath, f64),
}

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawCmd {
    /// Stage announced before this call, if any.
    pub stage: Option<Stage>,
    /// Operation and geometry.
    pub kind: DrawKind,
    /// Paint color.
    pub paint: Rgba8,
}

impl DrawCmd {
    /// Bounding box of the geometry; a clear covers the whole canvas and reports `None`.
    pub fn bounds(&self) -> Option<Rect> {
        match &self.kind {
            DrawKind::Clear(_) => None,
            DrawKind::Fill(p) => Some(p.bounding_box()),
            DrawKind::Stroke(p, w) => Some(p.bounding_box().inflate(w / 2.0, w / 2.0)),
        }
    }
}

/// Surface that records draw calls instead of rasterizing them.
///
/// Useful for tests and debugging: it makes stage order and per-stage draw counts observable
/// without pixel comparisons.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    canvas: Canvas,
    stage: Option<Stage>,
    stages: Vec<Stage>,
    cmds: Vec<DrawCmd>,
}

impl RecordingSurface {
    /// Create an empty recording for `canvas`.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            stage: None,
            stages: Vec::new(),
            cmds: Vec::new(),
        }
    }

    /// Recorded draw calls in issue order.
    pub fn commands(&self) -> &[DrawCmd] {
        &self.cmds
    }

    /// Stages in the order they were announced.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Draw calls attributed to `stage`.
    pub fn commands_in(&self, stage: Stage) -> impl Iterator<Item = &DrawCmd> {
        self.cmds.iter().filter(move |c| c.stage == Some(stage))
    }

    fn push(&mut self, kind: DrawKind, paint: Rgba8) {
        self.cmds.push(DrawCmd {
            stage: self.stage,
            kind,
            paint,
        });
    }
}

impl DrawSurface for RecordingSurface {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn clear(&mut self, color: Rgba8) {
        self.cmds.clear();
        self.push(DrawKind::Clear(color), color);
    }

    fn fill_path(&mut self, path: &BezPath, paint: Rgba8) {
        self.push(DrawKind::Fill(path.clone()), paint);
    }

    fn stroke_path(&mut self, path: &BezPath, width: f64, paint: Rgba8) {
        self.push(DrawKind::Stroke(path.clone(), width), paint);
    }

    fn stage(&mut self, stage: Stage) {
        if stage == Stage::Clear {
            self.stages.clear();
        }
        self.stage = Some(stage);
        self.stages.push(stage);
    }
}
