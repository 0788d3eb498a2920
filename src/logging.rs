//! env_logger setup driven by `[logging]`.

use env_logger::Env;

use crate::config::LoggingConfig;

/// Install the global logger.
///
/// `RUST_LOG` overrides the configured level. Returns `false` if a logger was
/// already installed, in which case nothing changes.
pub fn init(config: &LoggingConfig) -> bool {
    env_logger::Builder::from_env(Env::default().default_filter_or(config.level.as_str()))
        .format_timestamp_micros()
        .try_init()
        .is_ok()
}
