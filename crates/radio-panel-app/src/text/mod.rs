//! Font/glyph collaborator.
//!
//! CPU side of text rendering: loads a TrueType face, rasterizes every
//! ASCII code point once at startup, and computes glyph-quad placement.
//! GPU upload and draw submission live in `render::text`.

mod face;
mod layout;

pub use face::{GlyphSet, RasterGlyph, load_glyph_set};
pub use layout::{GlyphQuad, layout_glyph};
