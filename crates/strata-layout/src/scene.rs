use crate::config::LayoutConfig;
use crate::geometry::{build_geometry, LevelGeometry};
use strata_core::level::{LevelSpec, LevelTable};

/// One tier paired with its slab geometry, ready for a paint pass.
#[derive(Debug, Clone)]
pub struct LevelSlab<'a> {
    pub spec: &'a LevelSpec,
    pub geometry: LevelGeometry,
}

/// Lay out every tier of the table in ascending id order (paint order:
/// lower tiers first, apex last). Cheap enough to run per frame.
pub fn build_scene<'a>(table: &'a LevelTable, config: &LayoutConfig) -> Vec<LevelSlab<'a>> {
    table
        .iter()
        .map(|spec| LevelSlab {
            spec,
            geometry: build_geometry(spec.id as u32, config),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_covers_table_in_order() {
        let scene = build_scene(LevelTable::builtin(), &LayoutConfig::default());
        assert_eq!(scene.len(), 11);
        for (i, slab) in scene.iter().enumerate() {
            assert_eq!(slab.spec.id as usize, i);
        }
    }

    #[test]
    fn test_only_last_slab_capped() {
        let scene = build_scene(LevelTable::builtin(), &LayoutConfig::default());
        let capped: Vec<u8> = scene
            .iter()
            .filter(|s| s.geometry.top.is_some())
            .map(|s| s.spec.id)
            .collect();
        assert_eq!(capped, vec![10]);
    }
}
