use glam::Vec2;

/// Project a pseudo-3D point onto the 2D chart plane.
///
/// Fixed oblique (cabinet-style) projection: the depth axis shifts left
/// by half its magnitude and down by a quarter. Not a true isometric or
/// perspective transform. Total over all real inputs.
pub fn project(x: f32, y: f32, z: f32) -> Vec2 {
    Vec2::new(x - z * 0.5, y + z * 0.25)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_depth_is_identity() {
        assert_eq!(project(3.0, 7.0, 0.0), Vec2::new(3.0, 7.0));
    }

    #[test]
    fn test_depth_foreshortening() {
        // z=50 shifts 25 left and 12.5 down.
        assert_eq!(project(100.0, 200.0, 50.0), Vec2::new(75.0, 212.5));
    }

    #[test]
    fn test_affine() {
        // project(a + b) - project(0) == (project(a) - project(0)) + (project(b) - project(0))
        let origin = project(0.0, 0.0, 0.0);
        let a = (12.5, -3.0, 40.0);
        let b = (-7.0, 9.5, 10.0);
        let sum = project(a.0 + b.0, a.1 + b.1, a.2 + b.2) - origin;
        let parts = (project(a.0, a.1, a.2) - origin) + (project(b.0, b.1, b.2) - origin);
        assert_eq!(sum, parts);
    }

    #[test]
    fn test_origin_fixed() {
        assert_eq!(project(0.0, 0.0, 0.0), Vec2::ZERO);
    }

    #[test]
    fn test_total_over_negatives() {
        let p = project(-1000.0, -1000.0, -1000.0);
        assert!(p.x.is_finite() && p.y.is_finite());
        assert_eq!(p, Vec2::new(-500.0, -1250.0));
    }
}
