use eframe::egui::{self, Ui};

use super::plot::Chart;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the chart title and how many cameras it covers.
pub fn top_bar(ui: &mut Ui, chart: &Chart) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong(chart.title());
        ui.separator();
        ui.label(format!("{} cameras plotted", chart.camera_count()));
        ui.separator();
        ui.weak("Close the window to return to the menu");
    });
}
