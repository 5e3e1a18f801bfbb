//! Keyboard input handling for AccelerateRT.
//!
//! The window event handler never acts on keys directly. It pushes
//! [`KeyInput`]s into an [`InputQueue`] which the frame loop drains through a
//! [`HotkeyDispatcher`]. The dispatcher tracks per-key [`ButtonState`] so a
//! bound action fires exactly once per physical press, however long the key
//! is held.
//!
//! # Usage
//!
//! ```
//! use accelerate_input::{HotkeyDispatcher, HotkeyMap, InputQueue, KeyInput, KeyCode};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Action {
//!     Quit,
//! }
//!
//! let hotkeys = HotkeyMap::builder().bind(KeyCode::Escape, Action::Quit).build();
//! let mut dispatcher = HotkeyDispatcher::new(hotkeys);
//! let mut queue = InputQueue::new();
//!
//! queue.push(KeyInput::pressed(KeyCode::Escape));
//! let fired: Vec<_> = dispatcher.drain(&mut queue).collect();
//! assert_eq!(fired, vec![Action::Quit]);
//! ```

mod button_state;
mod dispatch;
mod hotkeys;
mod keyboard;
mod queue;

pub use button_state::ButtonState;
pub use dispatch::HotkeyDispatcher;
pub use hotkeys::{HotkeyMap, HotkeyMapBuilder};
pub use keyboard::KeyboardState;
pub use queue::{InputQueue, KeyInput};

// Re-export winit types commonly used with input
pub use winit::event::ElementState;
pub use winit::keyboard::KeyCode;
