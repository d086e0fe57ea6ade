use crate::export;
use strata_core::level::LevelTable;
use strata_layout::LayoutConfig;
use strata_track::ProgressLog;

/// Toolbar side panel: tracking toggle, event count, SVG export.
pub fn show(
    ctx: &egui::Context,
    table: &LevelTable,
    config: &LayoutConfig,
    tracking: &mut bool,
    progress: &ProgressLog,
) {
    egui::Window::new("Chart")
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(8.0, 8.0))
        .resizable(false)
        .collapsible(true)
        .show(ctx, |ui| {
            ui.checkbox(tracking, "Track progress");
            if *tracking {
                ui.label(format!("{} events logged", progress.entries().len()));
            }

            ui.separator();
            if ui.button("Export SVG").clicked() {
                export::download_svg(table, config);
            }
        });
}
