use core::ops::{Add, Mul, Sub};

/// 2D point in normalized device coordinates.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct NdcPoint {
    pub x: f32,
    pub y: f32,
}

impl NdcPoint {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for NdcPoint {
    type Output = NdcPoint;
    #[inline]
    fn add(self, rhs: NdcPoint) -> NdcPoint {
        NdcPoint::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for NdcPoint {
    type Output = NdcPoint;
    #[inline]
    fn sub(self, rhs: NdcPoint) -> NdcPoint {
        NdcPoint::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for NdcPoint {
    type Output = NdcPoint;
    #[inline]
    fn mul(self, rhs: f32) -> NdcPoint {
        NdcPoint::new(self.x * rhs, self.y * rhs)
    }
}

/// Converts a pixel-space pointer position to NDC.
///
/// Pixel space has its origin at the top-left with +Y down, so the Y axis
/// is flipped on the way into device space.
#[inline]
pub fn ndc_from_pixel(px: f32, py: f32, width: f32, height: f32) -> NdcPoint {
    NdcPoint::new((px / width) * 2.0 - 1.0, 1.0 - (py / height) * 2.0)
}

/// Inverse of [`ndc_from_pixel`] for the same window dimensions.
#[inline]
pub fn pixel_from_ndc(p: NdcPoint, width: f32, height: f32) -> (f32, f32) {
    (
        (p.x + 1.0) * 0.5 * width,
        (1.0 - p.y) * 0.5 * height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── pixel → NDC ───────────────────────────────────────────────────────

    #[test]
    fn window_center_maps_to_origin() {
        let p = ndc_from_pixel(400.0, 400.0, 800.0, 800.0);
        assert_eq!(p, NdcPoint::new(0.0, 0.0));
    }

    #[test]
    fn top_left_pixel_maps_to_upper_left_ndc() {
        let p = ndc_from_pixel(0.0, 0.0, 800.0, 800.0);
        assert_eq!(p, NdcPoint::new(-1.0, 1.0));
    }

    #[test]
    fn bottom_right_pixel_maps_to_lower_right_ndc() {
        let p = ndc_from_pixel(800.0, 800.0, 800.0, 800.0);
        assert_eq!(p, NdcPoint::new(1.0, -1.0));
    }

    // ── round trip ────────────────────────────────────────────────────────

    #[test]
    fn pixel_ndc_round_trip_recovers_pixel() {
        let cases = [(0.0, 0.0), (123.5, 617.25), (800.0, 800.0), (1.0, 799.0)];
        for (px, py) in cases {
            let ndc = ndc_from_pixel(px, py, 800.0, 600.0);
            let (rx, ry) = pixel_from_ndc(ndc, 800.0, 600.0);
            assert!((rx - px).abs() < 1e-4, "x: {rx} vs {px}");
            assert!((ry - py).abs() < 1e-4, "y: {ry} vs {py}");
        }
    }

    #[test]
    fn round_trip_with_non_square_window() {
        let ndc = ndc_from_pixel(321.0, 99.0, 1280.0, 720.0);
        let (rx, ry) = pixel_from_ndc(ndc, 1280.0, 720.0);
        assert!((rx - 321.0).abs() < 1e-4);
        assert!((ry - 99.0).abs() < 1e-4);
    }
}
