//! Logger initialization.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Respects `RUST_LOG` when set; otherwise defaults to info level.
/// This function is idempotent; subsequent calls are ignored.
pub fn init_logging() {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.init();

        log::debug!("logging initialized");
    });
}
