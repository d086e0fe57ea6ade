/// Which stage of the interaction loop the user is in this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowStep {
    Capture,
    Interaction,
    Output,
}

impl FlowStep {
    /// Derive the stage from the frame's pointer state: idle captures,
    /// hovering interacts, a selection produces output.
    pub fn from_frame(hovered: Option<u8>, clicked_level: Option<u8>) -> Self {
        if clicked_level.is_some() {
            FlowStep::Output
        } else if hovered.is_some() {
            FlowStep::Interaction
        } else {
            FlowStep::Capture
        }
    }
}

/// Three-step flow strip across the top: UI Capture -> UX Interaction -> Output.
pub fn show(ctx: &egui::Context, step: FlowStep) {
    egui::Area::new(egui::Id::new("flow-indicator"))
        .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 48.0))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    step_label(ui, "UI Capture", step == FlowStep::Capture);
                    ui.label("\u{2192}");
                    step_label(ui, "UX Interaction", step == FlowStep::Interaction);
                    ui.label("\u{2192}");
                    step_label(ui, "Output", step == FlowStep::Output);
                });
            });
        });
}

fn step_label(ui: &mut egui::Ui, text: &str, active: bool) {
    if active {
        ui.colored_label(egui::Color32::WHITE, text);
    } else {
        ui.colored_label(egui::Color32::DARK_GRAY, text);
    }
}
