//! TUI Fireworks (workspace facade crate).
//!
//! Re-exports the member crates under `tui_fireworks::{core,input,term,types}`
//! and hosts [`App`], the synchronous state object a terminal loop drives.

pub mod app;

pub use tui_fireworks_core as core;
pub use tui_fireworks_input as input;
pub use tui_fireworks_term as term;
pub use tui_fireworks_types as types;

pub use app::App;
