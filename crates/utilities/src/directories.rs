//! Locations the color picker reads and writes.

use std::{fs::create_dir_all, io, path::PathBuf};

const APPLICATION_DIRECTORY: &str = "Color Picker";

/// Path to the config directory, created if missing.
///
/// Falls back to the working directory when the platform has no config directory.
pub fn config_dir() -> io::Result<PathBuf> {
    let dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APPLICATION_DIRECTORY);

    create_dir_all(&dir)?;

    Ok(dir)
}
