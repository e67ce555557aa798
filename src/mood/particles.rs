//! Mood-reactive particle field.
//!
//! Each [`Mood`] selects a [`MoodPreset`]. A [`ParticleField`] spawns the preset's particles at
//! random positions, moves them one step per frame and bounces them off the canvas edges.

use crate::foundation::color::Rgb8;
use crate::foundation::core::{BezPath, Canvas, Point, Rgba8, Vec2};
use crate::foundation::math::Rng64;
use crate::mood::kind::Mood;
use crate::render::surface::{DrawSurface, Stage};
use crate::shapes::primitives::{circle, drop, square, star5, triangle};

/// Outline drawn for every particle of a preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleShape {
    /// Disk of radius `size`.
    Circle,
    /// Teardrop spanning `2·size` vertically.
    Drop,
    /// Apex-up triangle with base and height `size`.
    Triangle,
    /// Square of edge `size`.
    Square,
    /// Five-pointed star of outer radius `size`.
    Star,
}

impl ParticleShape {
    /// Path of this shape centered on `center`.
    pub fn path(self, center: Point, size: f64) -> BezPath {
        match self {
            ParticleShape::Circle => circle(center, size),
            ParticleShape::Drop => drop(center, size),
            ParticleShape::Triangle => triangle(center, size),
            ParticleShape::Square => square(center, size),
            ParticleShape::Star => star5(center, size),
        }
    }
}

/// Spawn parameters for one mood.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoodPreset {
    /// Number of particles.
    pub count: usize,
    /// Palette; each particle picks one uniformly.
    pub colors: &'static [Rgb8],
    /// Maximum speed per axis; velocities are drawn from `[-speed/2, speed/2)`.
    pub speed: f64,
    /// Smallest particle size.
    pub min_size: f64,
    /// Largest particle size (exclusive).
    pub max_size: f64,
    /// Particle outline.
    pub shape: ParticleShape,
}

const HAPPY: MoodPreset = MoodPreset {
    count: 50,
    colors: &[
        Rgb8::new(0xFF, 0xD7, 0x00),
        Rgb8::new(0xFF, 0xA5, 0x00),
        Rgb8::new(0xFF, 0x45, 0x00),
    ],
    speed: 2.0,
    min_size: 5.0,
    max_size: 15.0,
    shape: ParticleShape::Circle,
};

const SAD: MoodPreset = MoodPreset {
    count: 30,
    colors: &[
        Rgb8::new(0x46, 0x82, 0xB4),
        Rgb8::new(0x1E, 0x90, 0xFF),
        Rgb8::new(0x87, 0xCE, 0xEB),
    ],
    speed: 0.5,
    min_size: 3.0,
    max_size: 8.0,
    shape: ParticleShape::Drop,
};

const ANGRY: MoodPreset = MoodPreset {
    count: 70,
    colors: &[
        Rgb8::new(0xFF, 0x00, 0x00),
        Rgb8::new(0x8B, 0x00, 0x00),
        Rgb8::new(0xFF, 0x45, 0x00),
    ],
    speed: 3.0,
    min_size: 2.0,
    max_size: 10.0,
    shape: ParticleShape::Triangle,
};

const NEUTRAL: MoodPreset = MoodPreset {
    count: 40,
    colors: &[
        Rgb8::new(0x80, 0x80, 0x80),
        Rgb8::new(0xA9, 0xA9, 0xA9),
        Rgb8::new(0xD3, 0xD3, 0xD3),
    ],
    speed: 1.0,
    min_size: 4.0,
    max_size: 10.0,
    shape: ParticleShape::Square,
};

const SURPRISED: MoodPreset = MoodPreset {
    count: 60,
    colors: &[
        Rgb8::new(0x93, 0x70, 0xDB),
        Rgb8::new(0x8A, 0x2B, 0xE2),
        Rgb8::new(0xBA, 0x55, 0xD3),
    ],
    speed: 2.5,
    min_size: 3.0,
    max_size: 12.0,
    shape: ParticleShape::Star,
};

impl MoodPreset {
    /// Preset for `mood`.
    pub fn for_mood(mood: Mood) -> &'static MoodPreset {
        match mood {
            Mood::Happy => &HAPPY,
            Mood::Sad => &SAD,
            Mood::Angry => &ANGRY,
            Mood::Neutral => &NEUTRAL,
            Mood::Surprised => &SURPRISED,
        }
    }
}

/// One moving particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Center in pixels.
    pub position: Point,
    /// Displacement per frame.
    pub velocity: Vec2,
    /// Shape size in pixels.
    pub size: f64,
    /// Fill color.
    pub color: Rgb8,
    /// Fill opacity in `[0.3, 0.8)`.
    pub opacity: f64,
}

impl Particle {
    fn spawn(preset: &MoodPreset, canvas: Canvas, rng: &mut Rng64) -> Self {
        let x = rng.next_f64_01() * f64::from(canvas.width);
        let y = rng.next_f64_01() * f64::from(canvas.height);
        let size = rng.range_f64(preset.min_size, preset.max_size);
        let color = rng
            .pick(preset.colors)
            .copied()
            .unwrap_or(Rgb8::new(0x80, 0x80, 0x80));
        let vx = (rng.next_f64_01() - 0.5) * preset.speed;
        let vy = (rng.next_f64_01() - 0.5) * preset.speed;
        let opacity = rng.next_f64_01() * 0.5 + 0.3;
        Self {
            position: Point::new(x, y),
            velocity: Vec2::new(vx, vy),
            size,
            color,
            opacity,
        }
    }

    fn step(&mut self, width: f64, height: f64) {
        self.position += self.velocity;
        if self.position.x < 0.0 || self.position.x > width {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > height {
            self.velocity.y = -self.velocity.y;
        }
    }

    /// Paint this particle is filled with.
    pub fn paint(&self) -> Rgba8 {
        self.color.to_rgba().with_opacity(self.opacity)
    }
}

/// A mood's particles on a fixed canvas.
#[derive(Clone, Debug)]
pub struct ParticleField {
    mood: Mood,
    canvas: Canvas,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Spawn the particles of `mood`'s preset across `canvas`.
    pub fn spawn(mood: Mood, canvas: Canvas, rng: &mut Rng64) -> Self {
        let preset = MoodPreset::for_mood(mood);
        let particles = (0..preset.count)
            .map(|_| Particle::spawn(preset, canvas, rng))
            .collect();
        Self {
            mood,
            canvas,
            particles,
        }
    }

    /// Replace every particle with a fresh spawn for `mood`.
    pub fn set_mood(&mut self, mood: Mood, rng: &mut Rng64) {
        *self = Self::spawn(mood, self.canvas, rng);
    }

    /// Mood the particles were spawned for.
    pub fn mood(&self) -> Mood {
        self.mood
    }

    /// Canvas the particles bounce inside.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Current particle states.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self) {
        let (w, h) = (f64::from(self.canvas.width), f64::from(self.canvas.height));
        for p in &mut self.particles {
            p.step(w, h);
        }
    }

    /// Clear `surface` to transparent and draw every particle.
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        let shape = MoodPreset::for_mood(self.mood).shape;
        surface.stage(Stage::Particles);
        surface.clear(Rgba8::TRANSPARENT);
        for p in &self.particles {
            surface.fill_path(&shape.path(p.position, p.size), p.paint());
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mood/particles.rs"]
mod tests;
