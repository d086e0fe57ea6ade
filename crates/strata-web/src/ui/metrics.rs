use strata_core::level::LevelTable;

/// Metrics panel for the selected tier.
pub fn show(ctx: &egui::Context, table: &LevelTable, selected: Option<u8>, tracking: bool) {
    let Some(spec) = selected.and_then(|id| table.get(id)) else {
        return;
    };

    egui::Window::new("Metrics")
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-8.0, -8.0))
        .resizable(false)
        .collapsible(false)
        .title_bar(false)
        .show(ctx, |ui| {
            ui.heading(format!("Level {}: {}", spec.id, spec.label));
            egui::Grid::new("metrics-grid").num_columns(2).show(ui, |ui| {
                ui.label("D1 (Rate):");
                ui.label(format!("{}", spec.d1));
                ui.end_row();
                ui.label("D2 (Accel):");
                ui.label(format!("{}", spec.d2));
                ui.end_row();
                ui.label("D3 (Stability):");
                ui.label(format!("{}", spec.d3));
                ui.end_row();
            });
            if tracking {
                ui.separator();
                ui.colored_label(egui::Color32::LIGHT_GREEN, "Progress tracked & verified");
            }
        });
}
