//! Radio control panel binary.
//!
//! Wires the pieces together: logger, font, GPU-backed window runtime, and
//! the panel application itself.

mod app;
mod core;
mod device;
mod input;
mod logging;
mod render;
mod text;
mod window;

use anyhow::Result;

use crate::app::RadioApp;
use crate::device::GpuInit;
use crate::window::{Runtime, RuntimeConfig};

fn main() -> Result<()> {
    logging::init_logging();

    let glyph_set = text::load_glyph_set()?;

    let config = RuntimeConfig {
        title: "Radio Interface".to_string(),
        ..RuntimeConfig::default()
    };

    Runtime::run(config, GpuInit::default(), RadioApp::new(glyph_set))
}
