//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework beyond
//! `crossterm` event types. It maps key presses to [`crate::types::KeyAction`]
//! (quit or respawn) and forwards resizes.

pub mod map;

pub use tui_fireworks_types as types;

pub use map::{map_event, map_key, should_quit, HostEvent};
