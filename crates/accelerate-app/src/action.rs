//! Host flags, the close latch, and the actions hotkeys can trigger.

use accelerate_input::{HotkeyMap, KeyCode};

/// Something a hotkey can ask the host to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostAction {
    /// Stop the frame loop.
    Close,
    /// Show or hide the UI overlay.
    ToggleOverlay,
}

/// `Escape` closes, `F12` toggles the overlay.
#[must_use]
pub fn default_hotkeys() -> HotkeyMap<HostAction> {
    HotkeyMap::builder()
        .bind(KeyCode::Escape, HostAction::Close)
        .bind(KeyCode::F12, HostAction::ToggleOverlay)
        .build()
}

/// Flags the UI content may read and write every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostFlags {
    /// Sleep at the end of each frame to hold the target frame rate.
    pub frame_limit: bool,
    /// Build and draw the UI overlay.
    pub show_overlay: bool,
}

impl Default for HostFlags {
    fn default() -> Self {
        Self {
            frame_limit: false,
            show_overlay: true,
        }
    }
}

impl HostFlags {
    pub fn toggle_overlay(&mut self) {
        self.show_overlay = !self.show_overlay;
    }

    /// Whether a frame runs a UI pass. Frames that don't must still drain
    /// the overlay's pending input so it is not replayed when shown again.
    #[must_use]
    pub const fn draws_overlay(&self, has_ui: bool) -> bool {
        self.show_overlay && has_ui
    }
}

/// One-way close request. Once set it stays set.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CloseLatch {
    requested: bool,
}

impl CloseLatch {
    #[must_use]
    pub const fn new() -> Self {
        Self { requested: false }
    }

    pub fn request(&mut self) {
        if !self.requested {
            tracing::info!("Close requested");
        }
        self.requested = true;
    }

    #[must_use]
    pub const fn is_requested(self) -> bool {
        self.requested
    }
}

impl HostAction {
    /// Apply this action to the host state.
    pub fn apply(self, flags: &mut HostFlags, close: &mut CloseLatch) {
        match self {
            Self::Close => close.request(),
            Self::ToggleOverlay => {
                flags.toggle_overlay();
                tracing::debug!(visible = flags.show_overlay, "Overlay toggled");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores() {
        let mut flags = HostFlags::default();
        let original = flags;
        flags.toggle_overlay();
        assert_ne!(flags, original);
        flags.toggle_overlay();
        assert_eq!(flags, original);
    }

    #[test]
    fn toggle_leaves_frame_limit_alone() {
        let mut flags = HostFlags {
            frame_limit: true,
            show_overlay: true,
        };
        flags.toggle_overlay();
        assert!(flags.frame_limit);
        assert!(!flags.show_overlay);
    }

    #[test]
    fn hidden_overlay_or_missing_ui_skips_the_pass() {
        let mut flags = HostFlags::default();
        assert!(flags.draws_overlay(true));
        assert!(!flags.draws_overlay(false));

        flags.toggle_overlay();
        assert!(!flags.draws_overlay(true));
        flags.toggle_overlay();
        assert!(flags.draws_overlay(true));
    }

    #[test]
    fn close_latch_is_one_way() {
        let mut close = CloseLatch::new();
        assert!(!close.is_requested());
        close.request();
        for _ in 0..3 {
            assert!(close.is_requested());
        }
        close.request();
        assert!(close.is_requested());
    }

    #[test]
    fn actions_apply_to_state() {
        let mut flags = HostFlags::default();
        let mut close = CloseLatch::new();

        HostAction::ToggleOverlay.apply(&mut flags, &mut close);
        assert!(!flags.show_overlay);
        assert!(!close.is_requested());

        HostAction::Close.apply(&mut flags, &mut close);
        assert!(close.is_requested());

        // Toggling after close does not reopen.
        HostAction::ToggleOverlay.apply(&mut flags, &mut close);
        assert!(close.is_requested());
    }

    #[test]
    fn default_bindings() {
        let hotkeys = default_hotkeys();
        assert_eq!(hotkeys.action_for(KeyCode::Escape), Some(HostAction::Close));
        assert_eq!(
            hotkeys.action_for(KeyCode::F12),
            Some(HostAction::ToggleOverlay)
        );
        assert_eq!(hotkeys.len(), 2);
    }
}
