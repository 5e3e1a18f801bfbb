//! Key-to-action bindings.

use hashbrown::HashMap;
use winit::keyboard::KeyCode;

/// Maps keys to caller-defined actions.
///
/// Each key maps to at most one action; an action may be bound to several
/// keys.
#[derive(Debug, Clone)]
pub struct HotkeyMap<A> {
    bindings: HashMap<KeyCode, A>,
}

impl<A> Default for HotkeyMap<A> {
    fn default() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }
}

impl<A: Copy + PartialEq> HotkeyMap<A> {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a map with a builder pattern.
    #[must_use]
    pub fn builder() -> HotkeyMapBuilder<A> {
        HotkeyMapBuilder::new()
    }

    /// Bind `key` to `action`, replacing any previous binding for that key.
    pub fn bind(&mut self, key: KeyCode, action: A) {
        self.bindings.insert(key, action);
    }

    /// Remove the binding for `key`.
    pub fn unbind(&mut self, key: KeyCode) {
        self.bindings.remove(&key);
    }

    /// Action bound to `key`, if any.
    #[must_use]
    pub fn action_for(&self, key: KeyCode) -> Option<A> {
        self.bindings.get(&key).copied()
    }

    /// Number of bound keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Builder for creating a hotkey map with a fluent API.
#[derive(Debug)]
pub struct HotkeyMapBuilder<A> {
    map: HotkeyMap<A>,
}

impl<A> Default for HotkeyMapBuilder<A> {
    fn default() -> Self {
        Self {
            map: HotkeyMap::default(),
        }
    }
}

impl<A: Copy + PartialEq> HotkeyMapBuilder<A> {
    /// Create a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a key to an action.
    #[must_use]
    pub fn bind(mut self, key: KeyCode, action: A) -> Self {
        self.map.bind(key, action);
        self
    }

    /// Build the map.
    #[must_use]
    pub fn build(self) -> HotkeyMap<A> {
        self.map
    }
}
