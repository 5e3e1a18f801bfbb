//! Keyboard input state tracking.

use hashbrown::HashMap;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::button_state::ButtonState;

/// Keyboard input state.
///
/// Tracks the state of every key that has been seen since creation.
#[derive(Debug, Default)]
pub struct KeyboardState {
    keys: HashMap<KeyCode, ButtonState>,
}

impl KeyboardState {
    /// Create a new keyboard state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a key transition.
    ///
    /// Returns `true` if this was a fresh press of `key`.
    pub fn process_key(&mut self, key: KeyCode, state: ElementState) -> bool {
        let button = self.keys.entry(key).or_default();
        match state {
            ElementState::Pressed => button.press(),
            ElementState::Released => {
                button.release();
                false
            }
        }
    }

    /// Returns `true` if the key is currently pressed.
    #[must_use]
    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.keys.get(&key).is_some_and(|s| s.is_pressed())
    }

    /// Returns `true` if the key was just pressed this frame.
    #[must_use]
    pub fn is_just_pressed(&self, key: KeyCode) -> bool {
        self.keys.get(&key).is_some_and(|s| s.is_just_pressed())
    }

    /// Returns `true` if the key was just released this frame.
    #[must_use]
    pub fn is_just_released(&self, key: KeyCode) -> bool {
        self.keys.get(&key).is_some_and(|s| s.is_just_released())
    }

    /// Called at end of frame to transition button states.
    pub fn end_frame(&mut self) {
        for state in self.keys.values_mut() {
            state.end_frame();
        }
    }

    /// Clear all key states, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_press_and_release() {
        let mut keyboard = KeyboardState::new();
        assert!(!keyboard.is_pressed(KeyCode::F12));

        assert!(keyboard.process_key(KeyCode::F12, ElementState::Pressed));
        assert!(keyboard.is_just_pressed(KeyCode::F12));

        keyboard.end_frame();
        assert!(keyboard.is_pressed(KeyCode::F12));
        assert!(!keyboard.is_just_pressed(KeyCode::F12));

        assert!(!keyboard.process_key(KeyCode::F12, ElementState::Released));
        assert!(keyboard.is_just_released(KeyCode::F12));

        keyboard.end_frame();
        assert!(!keyboard.is_pressed(KeyCode::F12));
        assert!(!keyboard.is_just_released(KeyCode::F12));
    }

    #[test]
    fn held_key_reports_one_fresh_press() {
        let mut keyboard = KeyboardState::new();
        let fresh = (0..5)
            .filter(|_| keyboard.process_key(KeyCode::Escape, ElementState::Pressed))
            .count();
        assert_eq!(fresh, 1);
    }

    #[test]
    fn keys_are_independent() {
        let mut keyboard = KeyboardState::new();
        keyboard.process_key(KeyCode::Escape, ElementState::Pressed);
        assert!(keyboard.process_key(KeyCode::F12, ElementState::Pressed));
        assert!(keyboard.is_pressed(KeyCode::Escape));
    }

    #[test]
    fn clear_forgets_held_keys() {
        let mut keyboard = KeyboardState::new();
        keyboard.process_key(KeyCode::F12, ElementState::Pressed);
        keyboard.clear();
        assert!(!keyboard.is_pressed(KeyCode::F12));
        assert!(keyboard.process_key(KeyCode::F12, ElementState::Pressed));
    }
}
