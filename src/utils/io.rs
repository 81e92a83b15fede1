// src/utils/io.rs
use std::io;
use std::path::PathBuf;

/// Get the application config directory, creating it when missing.
pub fn get_app_config_dir() -> io::Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "rustpassgen", "rust_passgen")
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "could not determine config directory"))?;
    let config_dir = proj_dirs.config_dir();

    // Create the directory if it doesn't exist
    if !config_dir.exists() {
        std::fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}
