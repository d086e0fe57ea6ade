use serde::{Deserialize, Serialize};
use strata_core::constants::{
    BASE_WIDTH, EXTRUSION_DEPTH, PYRAMID_HEIGHT, SHRINK_FACTOR, TOTAL_LEVELS,
};

/// Caller-supplied chart proportions. `Default` gives the reference chart.
///
/// No validation happens here: a zero `pyramid_height` or `total_levels`
/// yields non-finite geometry downstream, and a `shrink_factor * level`
/// product of 1.0 or more yields zero- or negative-width tiers. Callers
/// wanting well-formed output keep `0 <= level < total_levels` and
/// `shrink_factor * (total_levels - 1) < 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Width of the bottom tier's top edge.
    pub base_width: f32,
    /// Total silhouette height.
    pub pyramid_height: f32,
    /// Number of tiers the height is divided into.
    pub total_levels: u32,
    /// Fractional width reduction per tier.
    pub shrink_factor: f32,
    /// Extrusion depth of the side face.
    pub depth: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_width: BASE_WIDTH,
            pyramid_height: PYRAMID_HEIGHT,
            total_levels: TOTAL_LEVELS,
            shrink_factor: SHRINK_FACTOR,
            depth: EXTRUSION_DEPTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_chart() {
        let config = LayoutConfig::default();
        assert_eq!(config.base_width, 400.0);
        assert_eq!(config.pyramid_height, 400.0);
        assert_eq!(config.total_levels, 11);
        assert_eq!(config.shrink_factor, 0.09);
        assert_eq!(config.depth, 50.0);
    }

    #[test]
    fn test_default_taper_stays_positive() {
        // With the reference shrink factor, even the apex tier keeps width.
        let config = LayoutConfig::default();
        let apex = (config.total_levels - 1) as f32;
        assert!(config.shrink_factor * apex < 1.0);
    }
}
