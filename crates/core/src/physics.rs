//! Projectile physics - constant-acceleration kinematics
//!
//! A `Projectile` bundles position, velocity and a constant acceleration.
//! Each step integrates the exact closed-form solution over `dt`, so stepping
//! `n` times by `dt` lands on the same state as evaluating at `n * dt`
//! (up to floating-point rounding).

use std::ops::{Add, Mul};

/// A 2D point in cell coordinates (x to the right, y downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A 2D vector in cells per second (velocity) or cells per second squared
/// (acceleration).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, v: Vector) -> Point {
        Point::new(self.x + v.x, self.y + v.y)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, v: Vector) -> Vector {
        Vector::new(self.x + v.x, self.y + v.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, s: f64) -> Vector {
        Vector::new(self.x * s, self.y * s)
    }
}

/// Point mass under constant acceleration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    position: Point,
    velocity: Vector,
    acceleration: Vector,
}

impl Projectile {
    pub fn new(position: Point, velocity: Vector, acceleration: Vector) -> Self {
        Self {
            position,
            velocity,
            acceleration,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn velocity(&self) -> Vector {
        self.velocity
    }

    pub fn acceleration(&self) -> Vector {
        self.acceleration
    }

    /// Advance the projectile by `dt` seconds.
    ///
    /// Position uses the velocity from the start of the step:
    /// `p' = p + v*dt + a*dt²/2`, then `v' = v + a*dt`.
    pub fn advance(&mut self, dt: f64) -> Point {
        *self = self.at(dt);
        self.position
    }

    /// State after `t` seconds from the current one, without mutating.
    pub fn at(&self, t: f64) -> Projectile {
        let position = self.position + self.velocity * t + self.acceleration * (0.5 * t * t);
        let velocity = self.velocity + self.acceleration * t;
        Projectile {
            position,
            velocity,
            acceleration: self.acceleration,
        }
    }
}
