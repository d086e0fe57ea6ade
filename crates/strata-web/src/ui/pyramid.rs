//! Paints the laid-out pyramid into the background layer and maps
//! pointer positions between screen space and the chart viewbox.

use super::face_color;
use glam::Vec2;
use strata_core::constants::{LABEL_FONT_SIZE, VIEWBOX_HEIGHT, VIEWBOX_WIDTH};
use strata_layout::LevelSlab;

/// Uniform scale-and-center mapping from the 800x600 chart viewbox to
/// the canvas, preserving aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f32,
    pub offset: egui::Vec2,
}

impl ViewTransform {
    pub fn fit(screen: egui::Vec2) -> Self {
        let scale = (screen.x / VIEWBOX_WIDTH).min(screen.y / VIEWBOX_HEIGHT);
        let offset = egui::vec2(
            (screen.x - VIEWBOX_WIDTH * scale) / 2.0,
            (screen.y - VIEWBOX_HEIGHT * scale) / 2.0,
        );
        Self { scale, offset }
    }

    pub fn to_screen(&self, p: Vec2) -> egui::Pos2 {
        egui::pos2(p.x * self.scale + self.offset.x, p.y * self.scale + self.offset.y)
    }

    pub fn to_view(&self, p: egui::Pos2) -> Vec2 {
        Vec2::new(
            (p.x - self.offset.x) / self.scale,
            (p.y - self.offset.y) / self.scale,
        )
    }
}

/// Paint every slab, bottom tier first. Hovered slabs dim slightly; the
/// selected slab gets a white outline, exactly like the reference chart.
pub fn paint(
    ctx: &egui::Context,
    scene: &[LevelSlab<'_>],
    view: &ViewTransform,
    hovered: Option<u8>,
    selected: Option<u8>,
) {
    let painter = ctx.layer_painter(egui::LayerId::background());

    for slab in scene {
        let id = slab.spec.id;
        let geo = &slab.geometry;
        let is_hovered = hovered == Some(id);

        let stroke = if selected == Some(id) {
            egui::Stroke::new(2.0 * view.scale, egui::Color32::WHITE)
        } else {
            egui::Stroke::NONE
        };

        let front = face_color(slab.spec.color, is_hovered);
        let dark = face_color(slab.spec.dark_color, is_hovered);

        painter.add(egui::Shape::convex_polygon(
            to_screen_poly(view, &geo.right),
            dark,
            egui::Stroke::NONE,
        ));
        if let Some(top) = geo.top {
            painter.add(egui::Shape::convex_polygon(
                to_screen_poly(view, &top),
                dark,
                egui::Stroke::NONE,
            ));
        }
        painter.add(egui::Shape::convex_polygon(
            to_screen_poly(view, &geo.front),
            front,
            stroke,
        ));

        painter.text(
            view.to_screen(geo.center),
            egui::Align2::CENTER_CENTER,
            id,
            egui::FontId::proportional(LABEL_FONT_SIZE * view.scale),
            egui::Color32::WHITE,
        );
    }

    side_annotation(
        &painter,
        view,
        Vec2::new(50.0, 300.0),
        "Art as Abstract Protocol",
        -std::f32::consts::FRAC_PI_2,
    );
    side_annotation(
        &painter,
        view,
        Vec2::new(750.0, 300.0),
        "Functional + Aesthetic Integration",
        std::f32::consts::FRAC_PI_2,
    );
}

fn to_screen_poly(view: &ViewTransform, quad: &[Vec2; 4]) -> Vec<egui::Pos2> {
    quad.iter().map(|p| view.to_screen(*p)).collect()
}

fn side_annotation(
    painter: &egui::Painter,
    view: &ViewTransform,
    anchor: Vec2,
    text: &str,
    angle: f32,
) {
    let color = egui::Color32::GRAY;
    let galley = painter.layout_no_wrap(
        text.to_string(),
        egui::FontId::proportional(14.0 * view.scale),
        color,
    );
    let mut shape = egui::epaint::TextShape::new(view.to_screen(anchor), galley, color);
    shape.angle = angle;
    painter.add(shape);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_wide_screen_letterboxes_horizontally() {
        let view = ViewTransform::fit(egui::vec2(1600.0, 600.0));
        assert_eq!(view.scale, 1.0);
        assert_eq!(view.offset, egui::vec2(400.0, 0.0));
    }

    #[test]
    fn test_fit_exact_viewbox_is_identity() {
        let view = ViewTransform::fit(egui::vec2(800.0, 600.0));
        assert_eq!(view.scale, 1.0);
        assert_eq!(view.offset, egui::vec2(0.0, 0.0));
        assert_eq!(view.to_screen(Vec2::new(400.0, 300.0)), egui::pos2(400.0, 300.0));
    }

    #[test]
    fn test_screen_view_roundtrip() {
        let view = ViewTransform::fit(egui::vec2(1024.0, 768.0));
        let p = Vec2::new(123.0, 456.0);
        let back = view.to_view(view.to_screen(p));
        assert!((back - p).length() < 1e-3);
    }

    #[test]
    fn test_fit_small_screen_scales_down() {
        let view = ViewTransform::fit(egui::vec2(400.0, 300.0));
        assert_eq!(view.scale, 0.5);
    }
}
