// src/logging/mod.rs
use std::fs::{self, OpenOptions};
use std::io;

use crate::core::Config;

/// Configure `env_logger` from the loaded config. With `LOG_FILE` set, records
/// go to that file instead of stderr so they never mix with printed passwords.
pub fn init(config: &Config) -> io::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(true)
        .parse_env("RUST_LOG");

    if let Some(path) = &config.log_file {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    // A second init (tests, embedding) keeps the first logger.
    if builder.try_init().is_err() {
        log::debug!("Logger already initialized");
    }

    Ok(())
}
