//! Host error types.

use accelerate_gl::GlError;
use thiserror::Error;

/// Fatal startup errors. Steady-state frame operations never return these.
#[derive(Error, Debug)]
pub enum HostError {
    /// The window system could not be initialised.
    #[error("Failed to init window system: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// Window or GL context creation failed.
    #[error(transparent)]
    Gl(#[from] GlError),

    /// The UI overlay renderer could not be created.
    #[error("Failed to init UI overlay: {0}")]
    Overlay(String),
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, HostError>;
