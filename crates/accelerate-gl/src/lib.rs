//! OpenGL layer for AccelerateRT.
//!
//! This crate provides:
//! - Window, GL 3.3 core context and surface creation via glutin
//! - Default render state and per-frame clears
//! - GL debug-output decoding and pluggable diagnostic sinks

pub mod context;
pub mod debug;
pub mod error;
pub mod sink;
pub mod state;

pub use context::{ContextConfig, RenderContext};
pub use debug::{DebugMessage, DebugSeverity, DebugSource, DebugType};
pub use error::{GlError, Result};
pub use sink::{DiagnosticSink, StreamSink, TracingSink};

// Re-export so downstream crates agree on the GL binding version
pub use glow;
