//! Fixed-function GL state and per-frame clears.

use std::sync::Arc;

use glow::HasContext;

use crate::debug::DebugMessage;
use crate::sink::DiagnosticSink;

/// Enable depth testing, back-face culling (CCW front faces) and alpha
/// blending, with scissoring off.
pub fn apply_default_state(gl: &glow::Context) {
    // SAFETY: Caller holds a current context
    unsafe {
        gl.disable(glow::SCISSOR_TEST);
        gl.enable(glow::DEPTH_TEST);
        gl.enable(glow::CULL_FACE);
        gl.cull_face(glow::BACK);
        gl.front_face(glow::CCW);
        gl.enable(glow::BLEND);
        gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);
    }
}

/// Reset the viewport to the full framebuffer and clear colour and depth to
/// transparent black.
#[allow(clippy::cast_possible_wrap)]
pub fn clear_frame(gl: &glow::Context, width: u32, height: u32) {
    // SAFETY: Caller holds a current context
    unsafe {
        gl.viewport(0, 0, width as i32, height as i32);
        gl.clear_color(0.0, 0.0, 0.0, 0.0);
        gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
    }
}

/// Route GL debug output to `sink`.
///
/// All messages are enabled except notifications. Returns `false` without
/// touching state if the context lacks debug-output support.
pub fn install_debug_output(gl: &mut glow::Context, sink: Arc<dyn DiagnosticSink>) -> bool {
    if !gl.supports_debug() {
        tracing::warn!("GL debug output not supported by this context");
        return false;
    }

    // SAFETY: Caller holds a current context that supports KHR_debug
    unsafe {
        gl.enable(glow::DEBUG_OUTPUT);
        gl.enable(glow::DEBUG_OUTPUT_SYNCHRONOUS);
        gl.debug_message_callback(move |source, kind, id, severity, text| {
            sink.report(&DebugMessage::from_gl(source, kind, id, severity, text));
        });
        gl.debug_message_control(glow::DONT_CARE, glow::DONT_CARE, glow::DONT_CARE, &[], true);
        gl.debug_message_control(
            glow::DONT_CARE,
            glow::DONT_CARE,
            glow::DEBUG_SEVERITY_NOTIFICATION,
            &[],
            false,
        );
    }

    tracing::debug!("GL debug output enabled");
    true
}
