//! Host-owned queue of pending key events.

use std::collections::VecDeque;

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// A single key transition captured from the window system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    /// Physical key that changed.
    pub key: KeyCode,
    /// New state of the key.
    pub state: ElementState,
    /// Whether the window system flagged this as an auto-repeat.
    pub repeat: bool,
    /// Whether the window system generated this event itself, e.g. to
    /// report keys held while focus changed.
    pub synthetic: bool,
}

impl KeyInput {
    /// A fresh (non-repeat) press of `key`.
    #[must_use]
    pub const fn pressed(key: KeyCode) -> Self {
        Self {
            key,
            state: ElementState::Pressed,
            repeat: false,
            synthetic: false,
        }
    }

    /// An auto-repeat press of `key`.
    #[must_use]
    pub const fn repeated(key: KeyCode) -> Self {
        Self {
            key,
            state: ElementState::Pressed,
            repeat: true,
            synthetic: false,
        }
    }

    /// A release of `key`.
    #[must_use]
    pub const fn released(key: KeyCode) -> Self {
        Self {
            key,
            state: ElementState::Released,
            repeat: false,
            synthetic: false,
        }
    }

    /// Mark this event as generated by the window system.
    #[must_use]
    pub const fn into_synthetic(mut self) -> Self {
        self.synthetic = true;
        self
    }

    /// Convert a winit key event. Keys without a physical key code are dropped.
    #[must_use]
    pub fn from_event(event: &KeyEvent, synthetic: bool) -> Option<Self> {
        let PhysicalKey::Code(key) = event.physical_key else {
            return None;
        };
        Some(Self {
            key,
            state: event.state,
            repeat: event.repeat,
            synthetic,
        })
    }
}

/// FIFO of key events waiting for the frame loop.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: VecDeque<KeyInput>,
}

impl InputQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn push(&mut self, input: KeyInput) {
        self.events.push_back(input);
    }

    /// Append a winit key event, ignoring unidentified keys.
    pub fn push_event(&mut self, event: &KeyEvent, synthetic: bool) {
        if let Some(input) = KeyInput::from_event(event, synthetic) {
            self.push(input);
        }
    }

    /// Remove and yield all pending events in arrival order.
    pub fn drain(&mut self) -> impl Iterator<Item = KeyInput> + '_ {
        self.events.drain(..)
    }

    /// Number of pending events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_arrival_order() {
        let mut queue = InputQueue::new();
        queue.push(KeyInput::pressed(KeyCode::F12));
        queue.push(KeyInput::released(KeyCode::F12));
        queue.push(KeyInput::pressed(KeyCode::Escape));

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(
            drained,
            vec![
                KeyInput::pressed(KeyCode::F12),
                KeyInput::released(KeyCode::F12),
                KeyInput::pressed(KeyCode::Escape),
            ]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn len_tracks_pending() {
        let mut queue = InputQueue::new();
        assert_eq!(queue.len(), 0);
        queue.push(KeyInput::repeated(KeyCode::KeyA));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn synthetic_marks_only_that_flag() {
        let input = KeyInput::pressed(KeyCode::F12).into_synthetic();
        assert!(input.synthetic);
        assert!(!input.repeat);
        assert_eq!(input.state, ElementState::Pressed);
    }
}
