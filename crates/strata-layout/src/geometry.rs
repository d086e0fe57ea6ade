use crate::config::LayoutConfig;
use crate::projection::project;
use glam::Vec2;
use strata_core::constants::{VIEWPORT_SIDE_MARGIN, VIEWPORT_TOP_OFFSET};

/// Resolved placement of one tier within the chart viewbox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelBand {
    /// Top edge of the tier, viewbox coordinates.
    pub y: f32,
    /// Width of the tier's top edge. Unclamped: shrinks past zero for
    /// level/shrink combinations outside the reference range.
    pub width: f32,
    /// Left edge of the tier's top edge.
    pub x_offset: f32,
    /// Height of every tier (pyramid_height / total_levels).
    pub level_height: f32,
}

/// Resolve where a tier sits and how wide it is. Tiers stack bottom-up:
/// level 0 lowest, level `total_levels - 1` at the apex.
pub fn dimensions(level: u32, config: &LayoutConfig) -> LevelBand {
    let level = level as f32;
    let level_height = config.pyramid_height / config.total_levels as f32;
    let y = config.pyramid_height - (level + 1.0) * level_height + VIEWPORT_TOP_OFFSET;
    let width = config.base_width * (1.0 - config.shrink_factor * level);
    let x_offset = (config.base_width - width) / 2.0 + VIEWPORT_SIDE_MARGIN;
    LevelBand {
        y,
        width,
        x_offset,
        level_height,
    }
}

/// The three faces and label anchor of one pseudo-3D slab.
///
/// Faces are closed quads in paint order. `top` is present only for the
/// apex tier; every lower tier is capped by the slab above it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelGeometry {
    pub front: [Vec2; 4],
    pub right: [Vec2; 4],
    pub top: Option<[Vec2; 4]>,
    /// Label anchor: midpoint of the front top edge horizontally, and of
    /// the front left edge vertically. Deliberately not the centroid;
    /// the reference chart anchors labels slightly high.
    pub center: Vec2,
}

/// Build the slab geometry for one tier. Pure: the same `(level, config)`
/// always yields the same coordinates.
pub fn build_geometry(level: u32, config: &LayoutConfig) -> LevelGeometry {
    let band = dimensions(level, config);
    let LevelBand {
        y,
        width,
        x_offset,
        level_height,
    } = band;

    // The bottom edge insets by half a shrink step per side, so each
    // slab is a trapezoid whose bottom meets the tier below flush.
    let inset = config.shrink_factor * config.base_width / 2.0;

    let front_tl = project(x_offset, y, 0.0);
    let front_tr = project(x_offset + width, y, 0.0);
    let front_bl = project(x_offset + inset, y + level_height, 0.0);
    let front_br = project(x_offset + width - inset, y + level_height, 0.0);

    let back_tl = project(x_offset, y, config.depth);
    let back_tr = project(x_offset + width, y, config.depth);

    // Side face drops straight down in projected space from the back
    // top-right corner; this matches the reference chart exactly.
    let right = [
        front_tr,
        back_tr,
        Vec2::new(back_tr.x, back_tr.y + level_height),
        front_br,
    ];

    let top = (level + 1 == config.total_levels)
        .then(|| [front_tl, front_tr, back_tr, back_tl]);

    LevelGeometry {
        front: [front_tl, front_tr, front_br, front_bl],
        right,
        top,
        center: Vec2::new(
            (front_tl.x + front_tr.x) / 2.0,
            (front_tl.y + front_bl.y) / 2.0,
        ),
    }
}
