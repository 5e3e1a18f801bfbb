//! egui overlay drawn on top of the frame.

use std::sync::Arc;

use accelerate_gl::state::apply_default_state;
use egui::ViewportId;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::window::Window;

use crate::error::{HostError, Result};

/// egui context, winit input translation and GL painter.
pub(crate) struct Overlay {
    ctx: egui::Context,
    state: egui_winit::State,
    painter: egui_glow::Painter,
}

impl Overlay {
    pub(crate) fn new(window: &Window, gl: Arc<glow::Context>) -> Result<Self> {
        let painter = egui_glow::Painter::new(gl, "", None, false)
            .map_err(|e| HostError::Overlay(e.to_string()))?;

        let ctx = egui::Context::default();
        ctx.set_visuals(egui::Visuals::dark());

        #[allow(clippy::cast_possible_truncation)]
        let pixels_per_point = window.scale_factor() as f32;
        let state = egui_winit::State::new(
            ctx.clone(),
            ViewportId::ROOT,
            window,
            Some(pixels_per_point),
            window.theme(),
            Some(painter.max_texture_side()),
        );

        tracing::debug!("UI overlay initialised");
        Ok(Self {
            ctx,
            state,
            painter,
        })
    }

    /// Feed a window event to egui. Returns `true` if egui consumed it.
    pub(crate) fn on_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    /// Run one UI pass and draw it over the current back buffer.
    pub(crate) fn render(
        &mut self,
        window: &Window,
        size: PhysicalSize<u32>,
        mut build: impl FnMut(&egui::Context),
    ) {
        let raw_input = self.state.take_egui_input(window);
        let output = self.ctx.run(raw_input, |ctx| build(ctx));
        self.state
            .handle_platform_output(window, output.platform_output);

        let primitives = self.ctx.tessellate(output.shapes, output.pixels_per_point);
        self.painter.paint_and_update_textures(
            [size.width, size.height],
            output.pixels_per_point,
            &primitives,
            &output.textures_delta,
        );

        // The painter leaves its own blend/cull/depth state behind.
        apply_default_state(self.painter.gl());
    }

    /// Drop input gathered since the last pass, for frames that draw no UI.
    pub(crate) fn discard_input(&mut self, window: &Window) {
        let _ = self.state.take_egui_input(window);
    }

    /// Release GL resources. The context must still be current.
    pub(crate) fn destroy(&mut self) {
        self.painter.destroy();
    }
}
