/// Chart title block.
pub fn show(ctx: &egui::Context) {
    egui::Area::new(egui::Id::new("header"))
        .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 8.0))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Artistic-Tech Expression Scale");
                ui.label("Dynamic 0-10 level tracking");
            });
        });
}
