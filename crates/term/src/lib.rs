//! Terminal rendering for the fireworks animation.
//!
//! Particles are rasterized into a simple framebuffer that can be turned into
//! a printable string or flushed to a terminal backend.
//!
//! - [`fb`]: styled cell grid plus plain/ANSI string output
//! - [`view`]: simulation -> framebuffer (pure, no I/O)
//! - [`renderer`]: crossterm raw-mode session with full and diff redraws

pub mod fb;
pub mod renderer;
pub mod view;

pub use tui_fireworks_core as core;
pub use tui_fireworks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::FireworksView;
