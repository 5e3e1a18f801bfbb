//! Destinations for GL debug messages.

use std::io::Write;

use parking_lot::Mutex;

use crate::debug::{DebugMessage, DebugSeverity};

/// Receives decoded GL debug messages.
///
/// The GL binding may invoke the callback from a driver thread, hence the
/// `Send + Sync` bound.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, message: &DebugMessage);
}

/// Forwards debug messages to `tracing`, with the level following severity.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, message: &DebugMessage) {
        match message.severity {
            DebugSeverity::High => tracing::error!(target: "gl", id = message.id, "{message}"),
            DebugSeverity::Medium => tracing::warn!(target: "gl", id = message.id, "{message}"),
            DebugSeverity::Low | DebugSeverity::Unknown(_) => {
                tracing::info!(target: "gl", id = message.id, "{message}");
            }
            DebugSeverity::Notification => {
                tracing::debug!(target: "gl", id = message.id, "{message}");
            }
        }
    }
}

/// Writes one formatted line per debug message to a stream.
#[derive(Debug)]
pub struct StreamSink<W> {
    writer: Mutex<W>,
}

impl<W: Write> StreamSink<W> {
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl StreamSink<std::io::Stderr> {
    /// Sink writing to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write + Send> DiagnosticSink for StreamSink<W> {
    fn report(&self, message: &DebugMessage) {
        let mut writer = self.writer.lock();
        // A diagnostic stream that cannot be written to has nowhere to report.
        let _ = writeln!(writer, "{message}");
    }
}
