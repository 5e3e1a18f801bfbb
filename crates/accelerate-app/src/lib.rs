//! Application host for AccelerateRT.
//!
//! The host owns the window, the GL context and the egui overlay, and exposes
//! a pull-style frame loop:
//!
//! ```no_run
//! use accelerate_app::{egui, init_logging, AppConfig, Host, HostPanel};
//!
//! fn main() -> accelerate_app::Result<()> {
//!     init_logging();
//!     let mut host = Host::new(AppConfig::default())?;
//!     while host.is_alive() {
//!         host.begin_frame();
//!         // draw with host.gl()
//!         host.end_frame(Some(|ctx: &egui::Context, panel: &mut HostPanel<'_>| {
//!             egui::Window::new("UI").show(ctx, |ui| panel.show(ui));
//!         }));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! `Escape` closes the window and `F12` toggles the overlay by default; see
//! [`AppConfig::with_hotkey`].

mod action;
mod config;
mod error;
mod host;
mod logging;
mod overlay;
mod pacing;
mod panel;
mod stats;

pub use action::{default_hotkeys, CloseLatch, HostAction, HostFlags};
pub use config::AppConfig;
pub use error::{HostError, Result};
pub use host::{Host, NoUi};
pub use logging::init_logging;
pub use pacing::FramePacer;
pub use panel::HostPanel;
pub use stats::FrameStats;

// Re-export commonly used types for convenience
pub use accelerate_gl::{DiagnosticSink, StreamSink, TracingSink};
pub use accelerate_input::KeyCode;
pub use egui;
pub use winit::dpi::PhysicalSize;
