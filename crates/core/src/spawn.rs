//! Burst spawning
//!
//! Every particle of a burst starts at the same origin with the same speed.
//! Particle `i` launches along `(cos(i), sin(i) / 2)` for integer radians
//! `i`, which gives the flattened, uneven spray rather than an even ring.

use arrayvec::ArrayVec;
use rand::Rng;

use crate::particle::Particle;
use crate::physics::{Point, Projectile, Vector};
use crate::rng::sample;
use crate::types::{
    GLYPHS, LAUNCH_SPEED_MAX, LAUNCH_SPEED_MIN, NUM_PARTICLES, PALETTE, TERMINAL_GRAVITY,
};

/// One generation of particles.
pub type Burst = ArrayVec<Particle, NUM_PARTICLES>;

/// Launch direction for the particle at `index`, scaled by `speed`.
pub fn launch_velocity(index: usize, speed: f64) -> Vector {
    let angle = index as f64;
    Vector::new(angle.cos() * speed, angle.sin() * speed / 2.0)
}

pub fn gravity() -> Vector {
    Vector::new(TERMINAL_GRAVITY.0, TERMINAL_GRAVITY.1)
}

/// Spawn a burst at a random origin inside a `width` x `height` frame.
///
/// The origin is drawn from `[0, width) x [0, height)`; a zero dimension
/// collapses that coordinate to 0.
pub fn spawn<R: Rng + ?Sized>(width: u16, height: u16, rng: &mut R) -> Burst {
    let origin = Point::new(
        rng.random::<f64>() * width as f64,
        rng.random::<f64>() * height as f64,
    );
    let speed = rng.random_range(LAUNCH_SPEED_MIN..LAUNCH_SPEED_MAX);
    spawn_at(origin, speed, rng)
}

/// Spawn a burst from a known origin and speed.
///
/// Only glyphs and colors are drawn from `rng`.
pub fn spawn_at<R: Rng + ?Sized>(origin: Point, speed: f64, rng: &mut R) -> Burst {
    let acceleration = gravity();
    (0..NUM_PARTICLES)
        .map(|i| {
            let physics = Projectile::new(origin, launch_velocity(i, speed), acceleration);
            let glyph = sample(&GLYPHS, rng);
            let color = sample(&PALETTE, rng);
            Particle::new(physics, glyph, color)
        })
        .collect()
}
