//! Window and OpenGL context creation.

use std::num::NonZeroU32;
use std::sync::Arc;

use glow::HasContext;
use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::event_loop::EventLoop;
use winit::window::Window;

use crate::error::{GlError, Result};
use crate::sink::DiagnosticSink;
use crate::state;

/// Parameters for window and context creation.
#[derive(Debug, Clone)]
pub struct ContextConfig {
    /// Window title.
    pub title: String,
    /// Initial window width.
    pub width: u32,
    /// Initial window height.
    pub height: u32,
    /// Wait for vertical blank on swap.
    pub vsync: bool,
    /// Request a debug context and route `KHR_debug` output to a sink.
    pub debug: bool,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            title: "AccelerateRT".to_string(),
            width: 800,
            height: 600,
            vsync: true,
            debug: cfg!(debug_assertions),
        }
    }
}

/// A window with a current GL 3.3 core context.
///
/// Fields drop in declaration order: GL function table, surface, context,
/// then the window itself.
pub struct RenderContext {
    gl: Arc<glow::Context>,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    window: Window,
    debug_output: bool,
}

impl RenderContext {
    /// Create the window, GL context and surface, load GL, and apply default
    /// state.
    ///
    /// When `config.debug` is set, debug output is routed to `sink`.
    pub fn new(
        event_loop: &EventLoop<()>,
        config: &ContextConfig,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Result<Self> {
        let window_attributes = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(PhysicalSize::new(config.width, config.height));

        let template = ConfigTemplateBuilder::new()
            .with_alpha_size(8)
            .with_depth_size(24);

        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(window_attributes))
            .build(event_loop, template, pick_config)
            .map_err(|e| GlError::Display(e.to_string()))?;
        let window = window.ok_or(GlError::NoWindow)?;

        tracing::debug!(
            samples = gl_config.num_samples(),
            depth = gl_config.depth_size(),
            "Picked GL config"
        );

        let raw_handle = window.window_handle()?.as_raw();
        let context_attributes = ContextAttributesBuilder::new()
            .with_profile(GlProfile::Core)
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .with_debug(config.debug)
            .build(Some(raw_handle));

        let gl_display = gl_config.display();
        // SAFETY: The raw handle belongs to `window`, which outlives the context
        let not_current = unsafe { gl_display.create_context(&gl_config, &context_attributes)? };

        let surface_attributes = window.build_surface_attributes(Default::default())?;
        // SAFETY: The surface is dropped before `window`
        let surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attributes) }
            .map_err(GlError::Surface)?;
        let context = not_current.make_current(&surface)?;

        let interval = if config.vsync {
            SwapInterval::Wait(NonZeroU32::MIN)
        } else {
            SwapInterval::DontWait
        };
        if let Err(e) = surface.set_swap_interval(&context, interval) {
            tracing::warn!("Failed to set swap interval: {e}");
        }

        // SAFETY: The context is current on this thread
        let mut gl = unsafe {
            glow::Context::from_loader_function_cstr(|name| gl_display.get_proc_address(name))
        };

        let debug_output = config.debug && state::install_debug_output(&mut gl, sink);
        state::apply_default_state(&gl);

        let size = window.inner_size();
        tracing::info!(
            "GL context created: {}x{} ({:?})",
            size.width,
            size.height,
            gl.version()
        );

        Ok(Self {
            gl: Arc::new(gl),
            surface,
            context,
            window,
            debug_output,
        })
    }

    /// Shared GL function table.
    #[must_use]
    pub const fn gl(&self) -> &Arc<glow::Context> {
        &self.gl
    }

    /// The window backing this context.
    #[must_use]
    pub const fn window(&self) -> &Window {
        &self.window
    }

    /// Whether debug output was installed.
    #[must_use]
    pub const fn debug_output(&self) -> bool {
        self.debug_output
    }

    /// Current framebuffer size in physical pixels.
    #[must_use]
    pub fn framebuffer_size(&self) -> PhysicalSize<u32> {
        self.window.inner_size()
    }

    /// Resize the GL surface. Zero-sized requests (minimised window) are ignored.
    pub fn resize(&self, size: PhysicalSize<u32>) {
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return;
        };
        self.surface.resize(&self.context, width, height);
        tracing::debug!("Surface resized to {}x{}", size.width, size.height);
    }

    /// Reset viewport and clear for a new frame.
    pub fn clear(&self, size: PhysicalSize<u32>) {
        state::clear_frame(&self.gl, size.width, size.height);
    }

    /// Present the back buffer.
    pub fn swap_buffers(&self) -> Result<()> {
        self.surface
            .swap_buffers(&self.context)
            .map_err(GlError::Surface)
    }
}

/// Prefer the config with the most depth bits, then the fewest samples.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .reduce(|best, config| {
            let deeper = config.depth_size() > best.depth_size();
            let same_depth_fewer_samples =
                config.depth_size() == best.depth_size() && config.num_samples() < best.num_samples();
            if deeper || same_depth_fewer_samples {
                config
            } else {
                best
            }
        })
        .expect("display offered no GL configs")
}
