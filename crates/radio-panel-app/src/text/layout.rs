use super::RasterGlyph;

/// Screen-space placement of one glyph quad, in the same pixel coordinate
/// frame as the pen (`y` grows upward from the baseline).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GlyphQuad {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
    /// Pen x after this glyph.
    pub pen_advance: f32,
}

/// Places `glyph` at pen position (`pen_x`, `baseline_y`), scaling the
/// rasterized metrics by `scale`.
///
/// The bottom edge sits `(height - bearing_y)` below the baseline, which
/// lets descenders (g, y, p) dip under it while flat glyphs rest on it.
pub fn layout_glyph(pen_x: f32, baseline_y: f32, scale: f32, glyph: &RasterGlyph) -> GlyphQuad {
    let min_x = pen_x + glyph.bearing_x as f32 * scale;
    let min_y = baseline_y - (glyph.height as i32 - glyph.bearing_y) as f32 * scale;
    GlyphQuad {
        min_x,
        min_y,
        max_x: min_x + glyph.width as f32 * scale,
        max_y: min_y + glyph.height as f32 * scale,
        pen_advance: pen_x + glyph.advance_x * scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(width: u32, height: u32, bearing_x: i32, bearing_y: i32, advance_x: f32) -> RasterGlyph {
        RasterGlyph { bitmap: Vec::new(), width, height, bearing_x, bearing_y, advance_x }
    }

    #[test]
    fn flat_glyph_rests_on_baseline() {
        // bearing_y == height: no descender.
        let g = glyph(10, 20, 2, 20, 12.0);
        let q = layout_glyph(100.0, 50.0, 1.0, &g);
        assert_eq!(q.min_x, 102.0);
        assert_eq!(q.min_y, 50.0);
        assert_eq!(q.max_x, 112.0);
        assert_eq!(q.max_y, 70.0);
        assert_eq!(q.pen_advance, 112.0);
    }

    #[test]
    fn descender_dips_below_baseline() {
        let g = glyph(10, 20, 0, 14, 11.0);
        let q = layout_glyph(0.0, 0.0, 1.0, &g);
        assert_eq!(q.min_y, -6.0);
        assert_eq!(q.max_y, 14.0);
    }

    #[test]
    fn scale_shrinks_quad_and_advance() {
        let g = glyph(10, 20, 2, 20, 12.0);
        let q = layout_glyph(0.0, 0.0, 0.5, &g);
        assert_eq!(q.min_x, 1.0);
        assert_eq!(q.max_x, 6.0);
        assert_eq!(q.max_y, 10.0);
        assert_eq!(q.pen_advance, 6.0);
    }
}
