//! Panel state machines.
//!
//! Everything in this module advances exactly once per frame, owned by the
//! single render thread. Split:
//! - `anim` — pulsing-scale and blink-color oscillators
//! - `ui` — power/band/slider state
//! - `controls` — pointer hit-testing and press dispatch

mod anim;
mod controls;
mod ui;

pub use anim::{Blink, Pulse};
pub use controls::{BandToggle, Control, ControlSet, PowerSwitch, SliderHandle};
pub use ui::{Band, UiState};
