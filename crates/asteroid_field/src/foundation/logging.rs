//! Logging setup for the generator binary

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Defaults to `Info`; `RUST_LOG` still overrides per module.
pub fn init() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
