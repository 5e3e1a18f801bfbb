//! Host state exposed to UI content.

use winit::dpi::PhysicalSize;

use crate::action::HostFlags;
use crate::stats::FrameStats;

/// What the UI callback sees of the host for one frame.
pub struct HostPanel<'a> {
    flags: &'a mut HostFlags,
    stats: &'a FrameStats,
    size: PhysicalSize<u32>,
}

impl<'a> HostPanel<'a> {
    pub(crate) fn new(
        flags: &'a mut HostFlags,
        stats: &'a FrameStats,
        size: PhysicalSize<u32>,
    ) -> Self {
        Self { flags, stats, size }
    }

    #[must_use]
    pub fn flags(&self) -> &HostFlags {
        self.flags
    }

    pub fn flags_mut(&mut self) -> &mut HostFlags {
        self.flags
    }

    #[must_use]
    pub const fn stats(&self) -> &FrameStats {
        self.stats
    }

    /// Framebuffer size this frame.
    #[must_use]
    pub const fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    /// The host's own section: window size, FPS and the frame-limit toggle.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.label(format!("Window Size: {}x{}", self.size.width, self.size.height));
        ui.label(format!("FPS: {:.2}", self.stats.fps()));
        ui.checkbox(&mut self.flags.frame_limit, "FPS Limit");
        ui.label("Author: Teamclouday");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn panel_renders_headless() {
        let mut flags = HostFlags::default();
        let mut stats = FrameStats::new();
        stats.record(Duration::from_millis(16));

        let ctx = egui::Context::default();
        let mut panel = HostPanel::new(&mut flags, &stats, PhysicalSize::new(800, 600));
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| panel.show(ui));
        });
        assert_eq!(panel.size(), PhysicalSize::new(800, 600));
        assert!(!panel.flags().frame_limit);
    }

    #[test]
    fn panel_writes_through_to_flags() {
        let mut flags = HostFlags::default();
        let stats = FrameStats::new();
        {
            let mut panel = HostPanel::new(&mut flags, &stats, PhysicalSize::new(1, 1));
            panel.flags_mut().frame_limit = true;
            panel.flags_mut().toggle_overlay();
        }
        assert!(flags.frame_limit);
        assert!(!flags.show_overlay);
    }
}
