//! Application seam between the window runtime and the panel logic.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
