//! Pointer input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types; the
//! window runtime translates platform events into `InputEvent`s. The
//! panel only consumes the primary pointer button and cursor position, so
//! this is a pointer-only model — no keyboard, wheel, or IME.

mod frame;
mod platform;
mod state;
mod types;

pub use frame::InputFrame;
pub use platform::translate_window_event;
pub use state::InputState;
pub use types::MouseButton;
