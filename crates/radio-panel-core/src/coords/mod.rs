//! Coordinate and color types shared across the panel.
//!
//! Canonical space:
//! - Normalized device coordinates (NDC), symmetric [-1, 1] × [-1, 1]
//! - Origin at the window center
//! - +X right, +Y up
//!
//! All hit-testing and all drawing happen in this space. Raw pointer
//! positions (pixel space, top-left origin, +Y down) must be converted
//! with [`ndc_from_pixel`] before use.

mod color;
mod ndc;
mod region;

pub use color::Color;
pub use ndc::{NdcPoint, ndc_from_pixel, pixel_from_ndc};
pub use region::HitRegion;
