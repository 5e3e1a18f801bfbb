//! Button state tracking for keys.

/// State of a key.
///
/// Tracks press/release transitions so that an action bound to a key can
/// fire on the edge rather than the level:
/// - `JustPressed`: key went down since the last frame boundary
/// - `Pressed`: key is being held
/// - `JustReleased`: key went up since the last frame boundary
/// - `Released`: key is up
///
/// State transitions:
/// ```text
/// Released ─press()─> JustPressed ─end_frame()─> Pressed
///     ^                                             │
///     │                                          release()
///     │                                             v
///     └────────────end_frame()───────────── JustReleased
/// ```
///
/// A `JustReleased` key can be pressed again before the frame boundary,
/// which counts as a new press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    /// Key was pressed this frame.
    JustPressed,
    /// Key is being held down.
    Pressed,
    /// Key was released this frame.
    JustReleased,
    /// Key is not pressed.
    #[default]
    Released,
}

impl ButtonState {
    /// Returns `true` if the key is currently down (including just pressed).
    #[inline]
    #[must_use]
    pub const fn is_pressed(self) -> bool {
        matches!(self, Self::JustPressed | Self::Pressed)
    }

    /// Returns `true` if the key was pressed this frame.
    #[inline]
    #[must_use]
    pub const fn is_just_pressed(self) -> bool {
        matches!(self, Self::JustPressed)
    }

    /// Returns `true` if the key was released this frame.
    #[inline]
    #[must_use]
    pub const fn is_just_released(self) -> bool {
        matches!(self, Self::JustReleased)
    }

    /// Returns `true` if the key is up.
    #[inline]
    #[must_use]
    pub const fn is_released(self) -> bool {
        matches!(self, Self::JustReleased | Self::Released)
    }

    /// Transition to pressed state.
    ///
    /// Returns `true` only when this is a fresh press. Repeats delivered
    /// while the key is held leave the state untouched and return `false`.
    #[inline]
    pub fn press(&mut self) -> bool {
        if self.is_pressed() {
            return false;
        }
        *self = Self::JustPressed;
        true
    }

    /// Transition to released state.
    #[inline]
    pub fn release(&mut self) {
        if self.is_pressed() {
            *self = Self::JustReleased;
        }
    }

    /// Called at end of frame to settle just-pressed/released states.
    #[inline]
    pub fn end_frame(&mut self) {
        match *self {
            Self::JustPressed => *self = Self::Pressed,
            Self::JustReleased => *self = Self::Released,
            _ => {}
        }
    }
}
