//! Overlay content.

use accelerate_app::egui;
use accelerate_app::HostPanel;

/// Declare the `UI` window: a `Configs` heading over a collapsible `App`
/// section that shows the host panel.
pub fn overlay(ctx: &egui::Context, panel: &mut HostPanel<'_>) {
    egui::Window::new("UI")
        .default_size([300.0, 200.0])
        .default_pos([5.0, 5.0])
        .show(ctx, |ui| {
            ui.heading("Configs");
            ui.separator();
            egui::CollapsingHeader::new("App")
                .default_open(true)
                .show(ui, |ui| panel.show(ui));
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_is_a_ui_callback() {
        fn assert_callback<F: FnMut(&egui::Context, &mut HostPanel<'_>)>(_: F) {}
        assert_callback(overlay);
    }
}
