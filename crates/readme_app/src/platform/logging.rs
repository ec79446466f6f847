//! Platform logging initialization for the README studio.
//!
//! The terminal belongs to the UI, so log output always goes to a file.

use std::fs::File;

use simplelog::{Config, ConfigBuilder, WriteLogger};

use crate::cli::LogConfig;

/// Initialize the global logger writing to `config.path`.
///
/// A log file that cannot be created is reported on stderr and logging is
/// left disabled; the application still runs.
pub fn initialize(config: &LogConfig) {
    let file = match File::create(&config.path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!(
                "Warning: Could not create log file at {:?}: {}",
                config.path, err
            );
            return;
        }
    };

    let _ = WriteLogger::init(config.level, build_config(), file);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(log::LevelFilter::Error)
        .add_filter_allow_str("readme")
        .build()
}
