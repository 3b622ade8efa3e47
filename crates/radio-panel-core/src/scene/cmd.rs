use crate::coords::{Color, NdcPoint};

/// Filled circle, drawn from the baked triangle-fan primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: NdcPoint,
    /// Uniform scale applied to the baked radius.
    pub scale: f32,
    pub color: Color,
}

/// Filled axis-aligned rectangle, drawn from the unit-square primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub center: NdcPoint,
    /// Full width/height in NDC units.
    pub size: NdcPoint,
    pub color: Color,
}

/// Speaker grid (concentric rings + radial spokes) at unit scale.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCmd {
    pub center: NdcPoint,
    pub color: Color,
}

/// Glyph-quad text run.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// Pen start: left edge at the baseline, in NDC.
    pub origin: NdcPoint,
    /// Multiplier from glyph pixel metrics to NDC units.
    pub scale: f32,
    pub color: Color,
}

/// Renderer-agnostic draw command stream.
///
/// Extending the scene: add a variant here, a push helper on `DrawList`,
/// and handling in the matching renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Circle(CircleCmd),
    Rect(RectCmd),
    Grid(GridCmd),
    Text(TextCmd),
}
