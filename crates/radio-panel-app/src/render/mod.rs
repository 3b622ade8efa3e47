//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and issue GPU commands via wgpu.
//! Each renderer is responsible for its own GPU resources (pipelines, buffers).
//!
//! Convention:
//! - Draw commands carry NDC coordinates; the vertex shaders pass them
//!   through after applying the per-instance offset and scale.

mod ctx;
mod mesh;
mod text;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::MeshRenderer;
pub use text::TextRenderer;
