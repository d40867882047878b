//! Simulation - the current burst plus the frame it is drawn into

use rand::Rng;

use crate::particle::Particle;
use crate::spawn::{spawn, Burst};
use crate::types::TICK_SECONDS;

/// Terminal grid dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Frame {
    pub width: u16,
    pub height: u16,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Particle set and frame size for one running animation.
#[derive(Debug, Clone)]
pub struct Simulation {
    particles: Burst,
    frame: Frame,
}

impl Simulation {
    /// Create a simulation with an initial burst sized to `frame`.
    pub fn new<R: Rng + ?Sized>(frame: Frame, rng: &mut R) -> Self {
        Self {
            particles: spawn(frame.width, frame.height, rng),
            frame,
        }
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Particles in spawn order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Discard the current burst and spawn a new one inside the current frame.
    pub fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.particles = spawn(self.frame.width, self.frame.height, rng);
    }

    /// Swap in a prepared burst.
    pub fn replace_particles(&mut self, burst: Burst) {
        self.particles = burst;
    }

    /// Store a new frame size. Existing particles are left where they are.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.frame = Frame::new(width, height);
    }

    /// Advance every particle by one fixed tick.
    pub fn advance(&mut self) {
        for p in self.particles.iter_mut() {
            p.physics.advance(TICK_SECONDS);
        }
    }
}
