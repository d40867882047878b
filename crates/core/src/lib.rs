//! Particle simulation - pure, deterministic, and testable
//!
//! This crate owns the firework physics. It has **zero dependencies** on
//! terminal I/O; all randomness comes from a caller-supplied `rand::Rng`, so a
//! seeded generator reproduces a burst exactly.
//!
//! # Module Structure
//!
//! - [`physics`]: `Projectile` constant-acceleration kinematics
//! - [`particle`]: a projectile plus its glyph and color
//! - [`rng`]: uniform choice over fixed lists
//! - [`spawn`]: burst generation (shared origin and speed, per-index angle)
//! - [`simulation`]: current burst and frame size, advanced one tick at a time
//!
//! # Example
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use tui_fireworks_core::{Frame, Simulation};
//! use tui_fireworks_types::NUM_PARTICLES;
//!
//! let mut rng = StdRng::seed_from_u64(12345);
//! let mut sim = Simulation::new(Frame::new(80, 24), &mut rng);
//! assert_eq!(sim.particles().len(), NUM_PARTICLES);
//!
//! // One fixed 1/60 s step
//! sim.advance();
//!
//! // Any key other than quit starts over
//! sim.respawn(&mut rng);
//! ```
//!
//! # Timing
//!
//! [`Simulation::advance`] always steps by [`TICK_SECONDS`](types::TICK_SECONDS).
//! The host is expected to call it 60 times a second; missed ticks are not
//! replayed.

pub mod particle;
pub mod physics;
pub mod rng;
pub mod simulation;
pub mod spawn;

pub use tui_fireworks_types as types;

// Re-export commonly used types for convenience
pub use particle::Particle;
pub use physics::{Point, Projectile, Vector};
pub use rng::sample;
pub use simulation::{Frame, Simulation};
pub use spawn::{gravity, launch_velocity, spawn, spawn_at, Burst};
