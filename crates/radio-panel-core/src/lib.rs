//! Radio panel core crate.
//!
//! Pure simulation and geometry logic for the panel: coordinate spaces,
//! primitive vertex sets, control state machines, the per-frame draw
//! stream, and frame pacing. Nothing here touches the GPU or the window
//! system, so every piece is testable headlessly.

pub mod coords;
pub mod geometry;
pub mod panel;
pub mod scene;
pub mod state;
pub mod time;
