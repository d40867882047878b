//! Key mapping from terminal events to animation actions.

use crate::types::KeyAction;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Host-level event the animation reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Key(KeyAction),
    Resize(u16, u16),
}

/// Check if key should quit the animation.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Map a key press to an action. Every key that does not quit respawns.
pub fn map_key(key: KeyEvent) -> KeyAction {
    if should_quit(key) {
        KeyAction::Quit
    } else {
        KeyAction::Respawn
    }
}

/// Map a raw crossterm event.
///
/// Terminal auto-repeat and key releases are ignored so holding a key does not
/// spawn a burst every frame on terminals that report them.
pub fn map_event(event: Event) -> Option<HostEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(HostEvent::Key(map_key(key))),
        Event::Resize(width, height) => Some(HostEvent::Resize(width, height)),
        _ => None,
    }
}
