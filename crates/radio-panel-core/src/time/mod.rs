//! Frame pacing.
//!
//! One [`FramePacer`] per render loop. Call [`FramePacer::begin`] at the
//! top of the frame and [`FramePacer::pace`] after presenting to sleep off
//! the remainder of the frame budget.

mod frame_pacer;

pub use frame_pacer::{FramePacer, FrameStart, sleep_budget};
