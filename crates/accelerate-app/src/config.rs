//! Application configuration.

use std::time::Duration;

use accelerate_gl::ContextConfig;
use accelerate_input::{HotkeyMap, KeyCode};

use crate::action::{default_hotkeys, HostAction, HostFlags};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Window title.
    pub title: String,
    /// Initial window width.
    pub width: u32,
    /// Initial window height.
    pub height: u32,
    /// Frame rate held when frame limiting is on.
    pub target_fps: u32,
    /// Enable vsync.
    pub vsync: bool,
    /// Start with frame limiting on.
    pub frame_limit: bool,
    /// Start with the UI overlay visible.
    pub show_overlay: bool,
    /// Route GL debug output to the diagnostic sink (default: debug builds only).
    pub gl_debug: bool,
    /// Key bindings for host actions.
    pub hotkeys: HotkeyMap<HostAction>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "AccelerateRT".to_string(),
            width: 800,
            height: 600,
            target_fps: 60,
            vsync: true,
            frame_limit: false,
            show_overlay: true,
            gl_debug: cfg!(debug_assertions),
            hotkeys: default_hotkeys(),
        }
    }
}

impl AppConfig {
    /// Create a new config with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the window dimensions.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the target FPS used by frame limiting.
    #[must_use]
    pub fn with_target_fps(mut self, fps: u32) -> Self {
        self.target_fps = fps;
        self
    }

    /// Enable or disable vsync.
    #[must_use]
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Start with frame limiting on or off.
    #[must_use]
    pub fn with_frame_limit(mut self, frame_limit: bool) -> Self {
        self.frame_limit = frame_limit;
        self
    }

    /// Start with the overlay shown or hidden.
    #[must_use]
    pub fn with_overlay(mut self, show_overlay: bool) -> Self {
        self.show_overlay = show_overlay;
        self
    }

    /// Enable or disable GL debug output.
    #[must_use]
    pub fn with_gl_debug(mut self, gl_debug: bool) -> Self {
        self.gl_debug = gl_debug;
        self
    }

    /// Bind an extra key to a host action.
    #[must_use]
    pub fn with_hotkey(mut self, key: KeyCode, action: HostAction) -> Self {
        self.hotkeys.bind(key, action);
        self
    }

    /// Target frame period. A zero FPS is treated as one.
    #[must_use]
    pub fn frame_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.target_fps.max(1)))
    }

    /// Initial host flags.
    #[must_use]
    pub const fn flags(&self) -> HostFlags {
        HostFlags {
            frame_limit: self.frame_limit,
            show_overlay: self.show_overlay,
        }
    }

    pub(crate) fn context_config(&self) -> ContextConfig {
        ContextConfig {
            title: self.title.clone(),
            width: self.width,
            height: self.height,
            vsync: self.vsync,
            debug: self.gl_debug,
        }
    }
}
