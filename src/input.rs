//! Logical input
//!
//! The host translates its key or touch events into [`InputEvent`]s; the
//! simulation never sees key codes.

use crate::sim::GamePhase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Jump,
    Restart,
}

/// Events collected between ticks, drained at the start of each tick
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(8),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Take all pending events, leaving the queue empty
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

/// Default key bindings.
///
/// Space is context sensitive: it jumps while playing and restarts after a
/// game over. Key names are case-insensitive.
pub fn event_for_key(key: &str, phase: GamePhase) -> Option<InputEvent> {
    match (key.to_lowercase().as_str(), phase) {
        (" " | "space", GamePhase::Playing) => Some(InputEvent::Jump),
        (" " | "space", GamePhase::GameOver) => Some(InputEvent::Restart),
        ("arrowup" | "up" | "w", GamePhase::Playing) => Some(InputEvent::Jump),
        ("r" | "enter", GamePhase::GameOver) => Some(InputEvent::Restart),
        _ => None,
    }
}
