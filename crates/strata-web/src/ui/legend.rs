use strata_core::level::LevelTable;

/// Color legend: one swatch + label row per tier.
pub fn show(ctx: &egui::Context, table: &LevelTable) {
    egui::Window::new("Legend")
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(8.0, -8.0))
        .resizable(false)
        .collapsible(true)
        .show(ctx, |ui| {
            for spec in table.iter() {
                ui.horizontal(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                    ui.painter().rect_filled(
                        rect,
                        egui::CornerRadius::same(2),
                        egui::Color32::from_rgb(spec.color.0, spec.color.1, spec.color.2),
                    );
                    ui.label(format!("Level {}: {}", spec.id, spec.label));
                });
            }
        });
}
