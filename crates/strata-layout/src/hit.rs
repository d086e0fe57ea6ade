//! Pointer hit testing over the laid-out scene.
//!
//! Scans slabs in descending id order so a slab painted later (nearer
//! the apex, overlapping its neighbor's extrusion) wins, the same way a
//! topmost box wins a DOM hit test.

use crate::scene::LevelSlab;
use glam::Vec2;

/// Find the tier under `pos` in viewbox coordinates, if any.
pub fn hit_test(scene: &[LevelSlab<'_>], pos: Vec2) -> Option<u8> {
    for slab in scene.iter().rev() {
        let geo = &slab.geometry;
        if point_in_quad(&geo.front, pos)
            || point_in_quad(&geo.right, pos)
            || geo.top.is_some_and(|top| point_in_quad(&top, pos))
        {
            return Some(slab.spec.id);
        }
    }
    None
}

/// Even-odd ray cast: count edges crossed by a horizontal ray from `p`.
fn point_in_quad(quad: &[Vec2; 4], p: Vec2) -> bool {
    let mut inside = false;
    let mut j = quad.len() - 1;
    for i in 0..quad.len() {
        let (a, b) = (quad[i], quad[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::scene::build_scene;
    use strata_core::level::LevelTable;

    #[test]
    fn test_point_in_quad_unit_square() {
        let square = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ];
        assert!(point_in_quad(&square, Vec2::new(0.5, 0.5)));
        assert!(!point_in_quad(&square, Vec2::new(1.5, 0.5)));
        assert!(!point_in_quad(&square, Vec2::new(0.5, -0.1)));
    }

    #[test]
    fn test_point_in_trapezoid() {
        let trapezoid = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(8.0, 5.0),
            Vec2::new(2.0, 5.0),
        ];
        assert!(point_in_quad(&trapezoid, Vec2::new(5.0, 2.5)));
        assert!(!point_in_quad(&trapezoid, Vec2::new(0.5, 4.5))); // outside the slant
    }

    #[test]
    fn test_hit_each_level_at_its_center() {
        let scene = build_scene(LevelTable::builtin(), &LayoutConfig::default());
        for slab in &scene {
            // The label anchor sits inside the front face.
            assert_eq!(hit_test(&scene, slab.geometry.center), Some(slab.spec.id));
        }
    }

    #[test]
    fn test_miss_outside_chart() {
        let scene = build_scene(LevelTable::builtin(), &LayoutConfig::default());
        assert_eq!(hit_test(&scene, Vec2::new(0.0, 0.0)), None);
        assert_eq!(hit_test(&scene, Vec2::new(790.0, 590.0)), None);
    }

    #[test]
    fn test_empty_scene_misses() {
        assert_eq!(hit_test(&[], Vec2::new(400.0, 300.0)), None);
    }
}
