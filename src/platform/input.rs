//! Key mapping from terminal events to host events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::HostEvent;
use crate::sim::GameEvent;

/// Map a key press to a host event; releases and repeats are ignored
pub fn map_key(key: KeyEvent) -> Option<HostEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if should_quit(key) {
        return Some(HostEvent::Quit);
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(HostEvent::Game(GameEvent::Flap))
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(HostEvent::Game(GameEvent::Restart)),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
