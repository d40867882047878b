//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, terminal rendering, input mapping).
//!
//! # Simulation Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAMES_PER_SECOND` | 60 | Fixed tick rate |
//! | `TICK_SECONDS` | 1/60 | Duration of one tick |
//! | `NUM_PARTICLES` | 50 | Particles per burst |
//! | `LAUNCH_SPEED_MIN` | 20 | Lower bound of the burst speed (inclusive) |
//! | `LAUNCH_SPEED_MAX` | 30 | Upper bound of the burst speed (exclusive) |
//! | `TERMINAL_GRAVITY` | (0, 9.81) | Constant acceleration, y grows downward |
//!
//! # Examples
//!
//! ```
//! use tui_fireworks_types::{Control, KeyAction, Rgb, NUM_PARTICLES, PALETTE, TICK_SECONDS};
//!
//! assert_eq!(NUM_PARTICLES, 50);
//! assert!((TICK_SECONDS * 60.0 - 1.0).abs() < 1e-12);
//!
//! // Palette colors parse from hex
//! assert_eq!(Rgb::from_hex("#fdff6a"), Some(PALETTE[0]));
//!
//! // Only the quit action stops the host loop
//! assert_eq!(KeyAction::Quit.control(), Control::Quit);
//! assert_eq!(KeyAction::Respawn.control(), Control::Continue);
//! ```

/// Simulation tick rate (ticks per second)
pub const FRAMES_PER_SECOND: u32 = 60;

/// Duration of a single tick in seconds
pub const TICK_SECONDS: f64 = 1.0 / FRAMES_PER_SECOND as f64;

/// Number of particles in every burst
pub const NUM_PARTICLES: usize = 50;

/// Minimum launch speed of a burst, in cells per second (inclusive)
pub const LAUNCH_SPEED_MIN: f64 = 20.0;

/// Maximum launch speed of a burst, in cells per second (exclusive)
pub const LAUNCH_SPEED_MAX: f64 = 30.0;

/// Downward acceleration applied to every particle, in cells per second squared.
///
/// Terminal rows grow downward, so gravity has a positive `y`.
pub const TERMINAL_GRAVITY: (f64, f64) = (0.0, 9.81);

/// Marker characters a particle may be drawn with.
pub const GLYPHS: [char; 3] = ['+', '*', '•'];

/// Colors a particle may be drawn with.
pub const PALETTE: [Rgb; 2] = [Rgb::new(0xfd, 0xff, 0x6a), Rgb::new(0xff, 0x71, 0x8d)];

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` (or `rrggbb`) hex string.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_fireworks_types::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#ff718d"), Some(Rgb::new(0xff, 0x71, 0x8d)));
    /// assert_eq!(Rgb::from_hex("ff718d"), Some(Rgb::new(0xff, 0x71, 0x8d)));
    /// assert_eq!(Rgb::from_hex("#fff"), None);
    /// ```
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// What a key press asks the animation to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Stop the animation and restore the terminal
    Quit,
    /// Replace the current burst with a new one
    Respawn,
}

impl KeyAction {
    /// Host loop outcome for this action.
    pub fn control(&self) -> Control {
        match self {
            KeyAction::Quit => Control::Quit,
            KeyAction::Respawn => Control::Continue,
        }
    }
}

/// Signal returned to the host loop after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_matches_hex_sources() {
        assert_eq!(Rgb::from_hex("#fdff6a"), Some(PALETTE[0]));
        assert_eq!(Rgb::from_hex("#ff718d"), Some(PALETTE[1]));
    }

    #[test]
    fn from_hex_rejects_garbage() {
        assert_eq!(Rgb::from_hex("#zzzzzz"), None);
        assert_eq!(Rgb::from_hex("#ff718d00"), None);
        assert_eq!(Rgb::from_hex("#ff71•"), None);
    }

    #[test]
    fn launch_speed_range_is_ordered() {
        assert!(LAUNCH_SPEED_MIN < LAUNCH_SPEED_MAX);
    }
}
