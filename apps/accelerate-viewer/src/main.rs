//! AccelerateRT application shell.
//!
//! Opens an 800x600 window with an OpenGL 3.3 core context and an egui
//! overlay, then runs the frame loop until the window closes.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p accelerate-viewer
//! ```
//!
//! ## Keys
//!
//! - `Escape`: close the window
//! - `F12`: show/hide the overlay
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level (e.g., info, debug, trace). GL debug output is
//!   logged under the `gl` target.

mod ui;

use accelerate_app::{init_logging, AppConfig, Host};

fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "-h" || arg == "--help") {
        print_help();
        return Ok(());
    }

    init_logging();

    let mut host = Host::new(AppConfig::default())?;
    tracing::info!("Press F12 to toggle the overlay, Escape to quit");

    while host.is_alive() {
        host.begin_frame();

        host.end_frame(Some(ui::overlay));
    }

    Ok(())
}

fn print_help() {
    eprintln!(
        "AccelerateRT application shell

USAGE:
    cargo run -p accelerate-viewer

KEYS:
    Escape                  Close the window
    F12                     Show/hide the UI overlay

OTHER:
    -h, --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG                Set log level (e.g., info, debug, trace)"
    );
}
