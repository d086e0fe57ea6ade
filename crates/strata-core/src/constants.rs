//! Single source of truth for the reference chart dimensions.
//! These match the viewbox the level colors and label sizes were tuned
//! against; `LayoutConfig::default()` in strata-layout reads from here.

/// Width of the bottom level's top edge, in viewbox units.
pub const BASE_WIDTH: f32 = 400.0;

/// Total height of the pyramid silhouette, in viewbox units.
pub const PYRAMID_HEIGHT: f32 = 400.0;

/// Number of discrete tiers (ids 0..=10).
pub const TOTAL_LEVELS: u32 = 11;

/// Fractional width reduction per tier. At the default 0.09 the apex
/// tier keeps 10% of the base width.
pub const SHRINK_FACTOR: f32 = 0.09;

/// Extrusion depth of the side face along the pseudo-3D depth axis.
pub const EXTRUSION_DEPTH: f32 = 50.0;

/// Fixed vertical offset pushing the pyramid down from the viewbox top.
pub const VIEWPORT_TOP_OFFSET: f32 = 100.0;

/// Fixed horizontal margin centering the pyramid in the viewbox.
pub const VIEWPORT_SIDE_MARGIN: f32 = 200.0;

/// Reference viewbox the chart was designed in.
pub const VIEWBOX_WIDTH: f32 = 800.0;
pub const VIEWBOX_HEIGHT: f32 = 600.0;

/// Point size of the per-level id label.
pub const LABEL_FONT_SIZE: f32 = 16.0;
