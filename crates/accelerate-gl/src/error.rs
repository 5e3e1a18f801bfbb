//! GL error types.

use thiserror::Error;

/// Errors raised while bringing up the window and GL context.
#[derive(Error, Debug)]
pub enum GlError {
    /// The platform could not produce a GL display or config.
    #[error("Failed to init GL display: {0}")]
    Display(String),

    /// Display creation succeeded but no window came back.
    #[error("Failed to create window")]
    NoWindow,

    /// Context creation failed or it could not be made current.
    #[error("GL context error: {0}")]
    Context(#[from] glutin::error::Error),

    /// The window surface could not be created or presented.
    #[error("GL surface error: {0}")]
    Surface(#[source] glutin::error::Error),

    /// The window did not expose a usable native handle.
    #[error("Window handle unavailable: {0}")]
    Handle(#[from] raw_window_handle::HandleError),
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, GlError>;
