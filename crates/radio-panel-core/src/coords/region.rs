use super::NdcPoint;

/// Axis-aligned hit rectangle in NDC space.
///
/// Containment is inclusive on all four edges, matching press handling
/// against fixed button bounds.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct HitRegion {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl HitRegion {
    #[inline]
    pub const fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self { min_x, max_x, min_y, max_y }
    }

    /// Builds a region from a center point and half-extents.
    #[inline]
    pub const fn centered(cx: f32, cy: f32, half_w: f32, half_h: f32) -> Self {
        Self {
            min_x: cx - half_w,
            max_x: cx + half_w,
            min_y: cy - half_h,
            max_y: cy + half_h,
        }
    }

    #[inline]
    pub fn contains(self, p: NdcPoint) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_interior_point() {
        let r = HitRegion::new(-0.5, 0.5, -0.5, 0.5);
        assert!(r.contains(NdcPoint::new(0.0, 0.0)));
    }

    #[test]
    fn contains_is_edge_inclusive() {
        let r = HitRegion::new(-0.5, 0.5, -0.5, 0.5);
        assert!(r.contains(NdcPoint::new(-0.5, 0.5)));
        assert!(r.contains(NdcPoint::new(0.5, -0.5)));
    }

    #[test]
    fn rejects_outside_point() {
        let r = HitRegion::new(-0.5, 0.5, -0.5, 0.5);
        assert!(!r.contains(NdcPoint::new(0.51, 0.0)));
        assert!(!r.contains(NdcPoint::new(0.0, -0.51)));
    }

    #[test]
    fn centered_matches_explicit_bounds() {
        let r = HitRegion::centered(0.0, -0.6, 0.15, 0.1);
        let expected = HitRegion::new(-0.15, 0.15, -0.7, -0.5);
        assert!((r.min_x - expected.min_x).abs() < 1e-6);
        assert!((r.max_x - expected.max_x).abs() < 1e-6);
        assert!((r.min_y - expected.min_y).abs() < 1e-6);
        assert!((r.max_y - expected.max_y).abs() < 1e-6);
    }
}
