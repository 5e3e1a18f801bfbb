//! Edge-triggered hotkey dispatch.

use crate::hotkeys::HotkeyMap;
use crate::keyboard::KeyboardState;
use crate::queue::{InputQueue, KeyInput};

/// Turns queued key events into bound actions.
///
/// An action fires only on a fresh press of its key. Auto-repeat events and
/// presses of an already-held key are absorbed by the keyboard state.
/// Window-system presses (auto-repeat, or the synthetic press sent when focus
/// returns with a key held) never count as a press.
#[derive(Debug)]
pub struct HotkeyDispatcher<A> {
    keyboard: KeyboardState,
    hotkeys: HotkeyMap<A>,
}

impl<A: Copy + PartialEq> HotkeyDispatcher<A> {
    /// Create a dispatcher over the given bindings.
    #[must_use]
    pub fn new(hotkeys: HotkeyMap<A>) -> Self {
        Self {
            keyboard: KeyboardState::new(),
            hotkeys,
        }
    }

    /// Apply one key event, returning the action it triggers, if any.
    pub fn process(&mut self, input: KeyInput) -> Option<A> {
        if input.state.is_pressed() && (input.repeat || input.synthetic) {
            return None;
        }
        let fresh = self.keyboard.process_key(input.key, input.state);
        if !fresh {
            return None;
        }
        let action = self.hotkeys.action_for(input.key);
        if action.is_some() {
            tracing::debug!(key = ?input.key, "hotkey pressed");
        }
        action
    }

    /// Drain `queue`, yielding triggered actions in order, then settle key
    /// states for the next frame.
    pub fn drain(&mut self, queue: &mut InputQueue) -> impl Iterator<Item = A> {
        let actions: Vec<A> = queue
            .drain()
            .filter_map(|input| self.process(input))
            .collect();
        self.keyboard.end_frame();
        actions.into_iter()
    }

    /// Current keyboard state.
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// Forget held keys, e.g. after focus loss when releases may be missed.
    pub fn reset(&mut self) {
        self.keyboard.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Action {
        Quit,
        Toggle,
    }

    fn dispatcher() -> HotkeyDispatcher<Action> {
        HotkeyDispatcher::new(
            HotkeyMap::builder()
                .bind(KeyCode::Escape, Action::Quit)
                .bind(KeyCode::F12, Action::Toggle)
                .build(),
        )
    }

    #[test]
    fn held_key_fires_once() {
        let mut dispatcher = dispatcher();
        let mut queue = InputQueue::new();
        queue.push(KeyInput::pressed(KeyCode::F12));
        for _ in 0..10 {
            queue.push(KeyInput::repeated(KeyCode::F12));
        }
        let fired: Vec<_> = dispatcher.drain(&mut queue).collect();
        assert_eq!(fired, vec![Action::Toggle]);

        // Still held across a frame boundary.
        queue.push(KeyInput::repeated(KeyCode::F12));
        assert_eq!(dispatcher.drain(&mut queue).count(), 0);
    }

    #[test]
    fn separate_presses_fire_separately() {
        let mut dispatcher = dispatcher();
        let mut queue = InputQueue::new();
        queue.push(KeyInput::pressed(KeyCode::F12));
        queue.push(KeyInput::released(KeyCode::F12));
        queue.push(KeyInput::pressed(KeyCode::F12));
        queue.push(KeyInput::released(KeyCode::F12));

        let fired: Vec<_> = dispatcher.drain(&mut queue).collect();
        assert_eq!(fired, vec![Action::Toggle, Action::Toggle]);
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut dispatcher = dispatcher();
        assert_eq!(dispatcher.process(KeyInput::pressed(KeyCode::KeyW)), None);
        assert!(dispatcher.keyboard().is_pressed(KeyCode::KeyW));
    }

    #[test]
    fn order_is_preserved() {
        let mut dispatcher = dispatcher();
        let mut queue = InputQueue::new();
        queue.push(KeyInput::pressed(KeyCode::F12));
        queue.push(KeyInput::pressed(KeyCode::Escape));
        let fired: Vec<_> = dispatcher.drain(&mut queue).collect();
        assert_eq!(fired, vec![Action::Toggle, Action::Quit]);
    }

    #[test]
    fn reset_allows_new_press() {
        let mut dispatcher = dispatcher();
        assert_eq!(
            dispatcher.process(KeyInput::pressed(KeyCode::Escape)),
            Some(Action::Quit)
        );
        dispatcher.reset();
        assert_eq!(
            dispatcher.process(KeyInput::pressed(KeyCode::Escape)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn focus_cycle_while_held_fires_once() {
        let mut dispatcher = dispatcher();
        let mut queue = InputQueue::new();
        queue.push(KeyInput::pressed(KeyCode::F12));
        assert_eq!(dispatcher.drain(&mut queue).count(), 1);

        // Focus leaves with F12 held, then comes back.
        queue.push(KeyInput::released(KeyCode::F12).into_synthetic());
        dispatcher.reset();
        queue.push(KeyInput::pressed(KeyCode::F12).into_synthetic());
        queue.push(KeyInput::repeated(KeyCode::F12));
        queue.push(KeyInput::released(KeyCode::F12));
        assert_eq!(dispatcher.drain(&mut queue).count(), 0);

        // The next physical press fires again.
        queue.push(KeyInput::pressed(KeyCode::F12));
        let fired: Vec<_> = dispatcher.drain(&mut queue).collect();
        assert_eq!(fired, vec![Action::Toggle]);
    }

    #[test]
    fn repeat_after_reset_does_not_fire() {
        let mut dispatcher = dispatcher();
        assert!(dispatcher.process(KeyInput::pressed(KeyCode::Escape)).is_some());
        dispatcher.reset();
        assert_eq!(dispatcher.process(KeyInput::repeated(KeyCode::Escape)), None);
    }
}
