//! The application host and its frame loop.

use std::sync::Arc;
use std::time::{Duration, Instant};

use accelerate_gl::{DiagnosticSink, RenderContext, TracingSink};
use accelerate_input::{HotkeyDispatcher, InputQueue};
use tracing::{debug, error, info};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use crate::action::{CloseLatch, HostAction, HostFlags};
use crate::config::AppConfig;
use crate::error::Result;
use crate::overlay::Overlay;
use crate::pacing::FramePacer;
use crate::panel::HostPanel;
use crate::stats::FrameStats;

/// UI callback type for frames that draw no overlay content.
pub type NoUi = fn(&egui::Context, &mut HostPanel<'_>);

/// Owns the window, GL context and UI overlay, and drives the frame loop.
///
/// ```text
/// while host.is_alive() {
///     host.begin_frame();   // pump events, dispatch hotkeys, clear
///     /* draw */
///     host.end_frame(ui);   // overlay, swap, optional pacing sleep
/// }
/// ```
///
/// Teardown happens on drop in reverse acquisition order: UI overlay, GL
/// context and surface, window, then the event loop.
pub struct Host {
    shell: Shell,
    event_loop: EventLoop<()>,
}

/// Everything the winit handler touches while events are pumped.
struct Shell {
    overlay: Overlay,
    render: RenderContext,
    queue: InputQueue,
    dispatcher: HotkeyDispatcher<HostAction>,
    flags: HostFlags,
    close: CloseLatch,
    pacer: FramePacer,
    stats: FrameStats,
    size: PhysicalSize<u32>,
}

impl Host {
    /// Create the host, sending GL debug output to `tracing`.
    pub fn new(config: AppConfig) -> Result<Self> {
        Self::with_sink(config, Arc::new(TracingSink))
    }

    /// Create the host with a custom GL diagnostic sink.
    pub fn with_sink(config: AppConfig, sink: Arc<dyn DiagnosticSink>) -> Result<Self> {
        info!("{} starting...", config.title);

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let render = RenderContext::new(&event_loop, &config.context_config(), sink)?;
        let overlay = Overlay::new(render.window(), Arc::clone(render.gl()))?;
        let size = render.framebuffer_size();

        info!(debug_output = render.debug_output(), "Application ready!");

        Ok(Self {
            shell: Shell {
                overlay,
                render,
                queue: InputQueue::new(),
                dispatcher: HotkeyDispatcher::new(config.hotkeys.clone()),
                flags: config.flags(),
                close: CloseLatch::new(),
                pacer: FramePacer::new(config.frame_period()),
                stats: FrameStats::new(),
                size,
            },
            event_loop,
        })
    }

    /// `true` until a close is requested. Never becomes `true` again.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        !self.shell.close.is_requested()
    }

    /// Pump pending events, dispatch hotkeys, refresh the framebuffer size,
    /// clear, and start the frame timer.
    pub fn begin_frame(&mut self) {
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.shell);
        if let PumpStatus::Exit(code) = status {
            debug!(code, "Event loop exited");
            self.shell.close.request();
        }

        let shell = &mut self.shell;
        for action in shell.dispatcher.drain(&mut shell.queue) {
            action.apply(&mut shell.flags, &mut shell.close);
        }

        let size = shell.render.framebuffer_size();
        if size != shell.size {
            shell.render.resize(size);
            shell.size = size;
        }
        shell.render.clear(size);

        shell.stats.tick(Instant::now());
        shell.pacer.begin();
    }

    /// Build and draw the overlay (when visible and `ui` is given), present,
    /// then sleep off the rest of the frame budget if frame limiting is on.
    pub fn end_frame<F>(&mut self, ui: Option<F>)
    where
        F: FnMut(&egui::Context, &mut HostPanel<'_>),
    {
        let Shell {
            overlay,
            render,
            flags,
            stats,
            pacer,
            size,
            ..
        } = &mut self.shell;

        let draw = flags.draws_overlay(ui.is_some());
        match ui {
            Some(mut ui) if draw => {
                let mut panel = HostPanel::new(flags, stats, *size);
                overlay.render(render.window(), *size, |ctx| ui(ctx, &mut panel));
            }
            _ => overlay.discard_input(render.window()),
        }

        if let Err(e) = render.swap_buffers() {
            error!("Swap failed: {e}");
        }

        if flags.frame_limit {
            pacer.pace();
        }
    }

    /// Present without any overlay content.
    pub fn present(&mut self) {
        self.end_frame(None::<NoUi>);
    }

    /// Shared GL function table for drawing between `begin_frame` and
    /// `end_frame`.
    #[must_use]
    pub const fn gl(&self) -> &Arc<glow::Context> {
        self.shell.render.gl()
    }

    #[must_use]
    pub const fn window(&self) -> &Window {
        self.shell.render.window()
    }

    /// Framebuffer size read at the last `begin_frame`.
    #[must_use]
    pub const fn size(&self) -> PhysicalSize<u32> {
        self.shell.size
    }

    #[must_use]
    pub const fn flags(&self) -> &HostFlags {
        &self.shell.flags
    }

    pub fn flags_mut(&mut self) -> &mut HostFlags {
        &mut self.shell.flags
    }

    #[must_use]
    pub const fn stats(&self) -> &FrameStats {
        &self.shell.stats
    }
}

impl Drop for Host {
    fn drop(&mut self) {
        self.shell.stats.log_summary();
        info!("Starting cleanup...");
        self.shell.overlay.destroy();
        info!("Cleanup complete");
    }
}

impl ApplicationHandler for Shell {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {
        // Window and context are created before the first pump.
        debug!("Resumed");
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        // Hotkeys stay live even while egui has keyboard focus.
        self.overlay.on_window_event(self.render.window(), &event);

        match event {
            WindowEvent::CloseRequested => self.close.request(),
            WindowEvent::KeyboardInput {
                event,
                is_synthetic,
                ..
            } => self.queue.push_event(&event, is_synthetic),
            WindowEvent::Resized(size) => {
                self.render.resize(size);
                self.size = size;
            }
            WindowEvent::Focused(false) => self.dispatcher.reset(),
            _ => {}
        }
    }
}
