//! A single firework particle.

use crate::physics::{Point, Projectile};
use crate::types::Rgb;

/// One spark: its physics plus how it is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub physics: Projectile,
    pub glyph: char,
    pub color: Rgb,
}

impl Particle {
    pub fn new(physics: Projectile, glyph: char, color: Rgb) -> Self {
        Self {
            physics,
            glyph,
            color,
        }
    }

    pub fn position(&self) -> Point {
        self.physics.position()
    }

    /// Integer grid cell for this particle, if it lies inside `width` x `height`.
    ///
    /// Positions are floored, so `(4.9, 0.2)` lands in cell `(4, 0)`. Anything
    /// negative, past the edge, or non-finite has no cell.
    pub fn cell(&self, width: u16, height: u16) -> Option<(u16, u16)> {
        let p = self.position();
        let x = p.x.floor();
        let y = p.y.floor();
        if !(x >= 0.0 && x < width as f64 && y >= 0.0 && y < height as f64) {
            return None;
        }
        Some((x as u16, y as u16))
    }
}
