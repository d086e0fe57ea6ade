//! SVG serialization of the laid-out chart.
//!
//! The engine itself hands out polygons; this module is the one place
//! that commits to a concrete path grammar, for export and for any
//! host that renders SVG directly.

use crate::config::LayoutConfig;
use crate::scene::{build_scene, LevelSlab};
use glam::Vec2;
use std::fmt::Write;
use strata_core::constants::{LABEL_FONT_SIZE, VIEWBOX_HEIGHT, VIEWBOX_WIDTH};
use strata_core::level::LevelTable;

/// Serialize a closed polygon as an SVG path: `M x y L x y ... Z`.
pub fn svg_path(points: &[Vec2]) -> String {
    let mut path = String::new();
    for (i, p) in points.iter().enumerate() {
        let op = if i == 0 { 'M' } else { 'L' };
        let _ = write!(path, "{op} {} {} ", fmt(p.x), fmt(p.y));
    }
    path.push('Z');
    path
}

/// Render the whole chart as a standalone SVG document.
pub fn render_document(table: &LevelTable, config: &LayoutConfig) -> String {
    let scene = build_scene(table, config);
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg">"#,
        fmt(VIEWBOX_WIDTH),
        fmt(VIEWBOX_HEIGHT)
    );
    for slab in &scene {
        write_slab(&mut out, slab);
    }
    let _ = writeln!(out, "</svg>");
    out
}

fn write_slab(out: &mut String, slab: &LevelSlab<'_>) {
    let geo = &slab.geometry;
    let _ = writeln!(
        out,
        r#"  <path d="{}" fill="{}"/>"#,
        svg_path(&geo.front),
        slab.spec.color.to_hex()
    );
    let _ = writeln!(
        out,
        r#"  <path d="{}" fill="{}"/>"#,
        svg_path(&geo.right),
        slab.spec.dark_color.to_hex()
    );
    if let Some(top) = geo.top {
        let _ = writeln!(
            out,
            r#"  <path d="{}" fill="{}"/>"#,
            svg_path(&top),
            slab.spec.dark_color.to_hex()
        );
    }
    let _ = writeln!(
        out,
        r#"  <text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" fill="white" font-size="{}" font-weight="bold">{}</text>"#,
        fmt(geo.center.x),
        fmt(geo.center.y),
        fmt(LABEL_FONT_SIZE),
        slab.spec.id
    );
}

/// Trim `.0` off whole numbers so paths read like hand-written SVG.
fn fmt(v: f32) -> String {
    if v == v.trunc() && v.abs() < 1e7 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_grammar() {
        let quad = [
            Vec2::new(200.0, 463.5),
            Vec2::new(600.0, 463.5),
            Vec2::new(582.0, 500.0),
            Vec2::new(218.0, 500.0),
        ];
        assert_eq!(
            svg_path(&quad),
            "M 200 463.5 L 600 463.5 L 582 500 L 218 500 Z"
        );
    }

    #[test]
    fn test_fmt_trims_whole_numbers() {
        assert_eq!(fmt(400.0), "400");
        assert_eq!(fmt(-25.0), "-25");
        assert_eq!(fmt(12.5), "12.5");
    }

    #[test]
    fn test_document_structure() {
        let doc = render_document(LevelTable::builtin(), &LayoutConfig::default());
        assert!(doc.starts_with(r#"<svg viewBox="0 0 800 600""#));
        assert!(doc.trim_end().ends_with("</svg>"));
        // 11 front + 11 right + 1 top cap
        assert_eq!(doc.matches("<path").count(), 23);
        assert_eq!(doc.matches("<text").count(), 11);
        assert!(doc.contains(r##"fill="#808000""##));
        assert!(doc.contains(r##"fill="#000066""##));
    }
}
