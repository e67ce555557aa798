use crate::foundation::core::{Canvas, Point};

/// Face geometry shared by every feature renderer.
///
/// All measurements are fractions of the canvas size, so a larger surface scales the avatar
/// without touching the renderers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceLayout {
    /// Face center.
    pub center: Point,
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
}

impl FaceLayout {
    /// Layout centered on `canvas`.
    pub fn for_canvas(canvas: Canvas) -> Self {
        Self {
            center: canvas.center(),
            width: f64::from(canvas.width),
            height: f64::from(canvas.height),
        }
    }

    /// `frac` of the width.
    pub fn w(&self, frac: f64) -> f64 {
        self.width * frac
    }

    /// `frac` of the height.
    pub fn h(&self, frac: f64) -> f64 {
        self.height * frac
    }

    /// Point offset from the center by `(fx·width, fy·height)`.
    pub fn at(&self, fx: f64, fy: f64) -> Point {
        Point::new(self.center.x + self.w(fx), self.center.y + self.h(fy))
    }

    /// Radius of the head disk.
    pub fn head_radius(&self) -> f64 {
        self.w(0.35)
    }

    /// Horizontal distance from the center line to each eye.
    pub fn eye_spacing(&self) -> f64 {
        self.w(0.12)
    }

    /// Vertical position of the eye line.
    pub fn eye_y(&self) -> f64 {
        self.center.y - self.w(0.05)
    }

    /// Vertical position of the mouth.
    pub fn mouth_y(&self) -> f64 {
        self.center.y + self.w(0.15)
    }

    /// Center of the eye on the viewer's left.
    pub fn left_eye(&self) -> Point {
        Point::new(self.center.x - self.eye_spacing(), self.eye_y())
    }

    /// Center of the eye on the viewer's right.
    pub fn right_eye(&self) -> Point {
        Point::new(self.center.x + self.eye_spacing(), self.eye_y())
    }
}
