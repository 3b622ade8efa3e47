use anyhow::{Context, Result, anyhow};

/// Pixel size every label glyph is rasterized at. Quads are scaled down
/// from this when the draw command asks for a smaller on-screen size.
pub const FONT_PX_SIZE: f32 = 48.0;

/// One rasterized glyph: an 8-bit coverage bitmap plus the metrics needed
/// to place its quad relative to the pen position.
pub struct RasterGlyph {
    /// Row-major coverage values, `width * height` bytes. May be empty
    /// (e.g. the space character), in which case only `advance_x` matters.
    pub bitmap: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Horizontal offset from the pen to the bitmap's left edge, in pixels.
    pub bearing_x: i32,
    /// Vertical offset from the baseline to the bitmap's top edge, in pixels.
    pub bearing_y: i32,
    /// Pen advance after drawing this glyph, in pixels.
    pub advance_x: f32,
}

/// All printable-range ASCII glyphs of one face, rasterized once at startup.
pub struct GlyphSet {
    glyphs: Vec<RasterGlyph>,
}

impl GlyphSet {
    /// Looks up the glyph for `ch`, or `None` for non-ASCII input.
    pub fn get(&self, ch: char) -> Option<&RasterGlyph> {
        self.glyphs.get(ch as usize)
    }
}

const FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

/// Probes well-known system font locations, parses the first face found and
/// rasterizes the full ASCII range at [`FONT_PX_SIZE`].
///
/// Failing to find a usable face is fatal: the band label could never be
/// drawn, so the caller aborts startup.
pub fn load_glyph_set() -> Result<GlyphSet> {
    let (path, bytes) = FONT_PATHS
        .iter()
        .find_map(|p| std::fs::read(p).ok().map(|b| (*p, b)))
        .ok_or_else(|| anyhow!("no usable font found in {FONT_PATHS:?}"))?;
    log::info!("loading font {path}");

    let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
        .map_err(|e| anyhow!("{e}"))
        .with_context(|| format!("failed to parse font {path}"))?;

    let glyphs = (0u8..128)
        .map(|code| rasterize(&font, code as char))
        .collect();
    Ok(GlyphSet { glyphs })
}

fn rasterize(font: &fontdue::Font, ch: char) -> RasterGlyph {
    let (metrics, bitmap) = font.rasterize(ch, FONT_PX_SIZE);
    RasterGlyph {
        bitmap,
        width: metrics.width as u32,
        height: metrics.height as u32,
        bearing_x: metrics.xmin,
        // fontdue reports the bitmap *bottom* relative to the baseline;
        // placement wants the top edge.
        bearing_y: metrics.ymin + metrics.height as i32,
        advance_x: metrics.advance_width,
    }
}
