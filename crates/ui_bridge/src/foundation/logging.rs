//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system from `RUST_LOG`
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system with an explicit filter (e.g. the config's `log_level`)
///
/// `RUST_LOG` still wins when it is set. Calling this twice is harmless; the second
/// logger is dropped.
pub fn init_with_filter(filter: &str) {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(filter);
    if let Ok(env_filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&env_filter);
    }
    if builder.try_init().is_err() {
        log::debug!("Logger already initialized, keeping the existing one");
    }
}
