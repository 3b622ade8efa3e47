//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands in NDC space
//! - provide deterministic ordering (z-index + insertion order)
//!
//! The renderer consumes the stream in paint order each frame; the fixed
//! panel composition in [`crate::panel`] is the only producer.

mod cmd;
mod key;
mod list;

pub use cmd::{CircleCmd, DrawCmd, GridCmd, RectCmd, TextCmd};
pub use key::{SortKey, ZIndex};
pub use list::{DrawItem, DrawList};
