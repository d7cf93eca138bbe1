//! Key events to directional intent
//!
//! The host forwards logical key events; the mapper turns them into a
//! deduplicated intent of -1, 0 or +1.

use serde::{Deserialize, Serialize};

use crate::config::ControlsConfig;

/// Logical key identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    /// Any key not bound to a direction
    Other,
}

impl Key {
    /// Resolve a host key name ("ArrowLeft", ...) through the configured bindings
    pub fn from_name(name: &str, controls: &ControlsConfig) -> Self {
        if controls.left.iter().any(|k| k == name) {
            Key::Left
        } else if controls.right.iter().any(|k| k == name) {
            Key::Right
        } else {
            Key::Other
        }
    }
}

/// Raw key event forwarded by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(Key),
    Released(Key),
}

/// Player's current directional input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Intent {
    Left,
    #[default]
    Idle,
    Right,
}

impl Intent {
    /// Signed direction: -1, 0 or +1
    pub fn direction(self) -> f32 {
        match self {
            Intent::Left => -1.0,
            Intent::Idle => 0.0,
            Intent::Right => 1.0,
        }
    }
}

impl From<KeyEvent> for Intent {
    fn from(event: KeyEvent) -> Self {
        match event {
            KeyEvent::Pressed(Key::Left) => Intent::Left,
            KeyEvent::Pressed(Key::Right) => Intent::Right,
            KeyEvent::Pressed(Key::Other) => Intent::Idle,
            // Releasing any key stops the paddle, even if the other is still held
            KeyEvent::Released(_) => Intent::Idle,
        }
    }
}

/// Deduplicating key-event mapper
#[derive(Debug, Clone, Default)]
pub struct InputMapper {
    intent: Intent,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest intent
    pub fn intent(&self) -> Intent {
        self.intent
    }

    /// Apply an event; returns the new intent only if it changed
    pub fn apply(&mut self, event: KeyEvent) -> Option<Intent> {
        let next = Intent::from(event);
        if next == self.intent {
            return None;
        }
        log::trace!("Intent {:?} -> {:?}", self.intent, next);
        self.intent = next;
        Some(next)
    }
}
