//! Filesystem helpers for TablePick.
//!
//! Data directory layout and seed file reading.

use std::path::{Path, PathBuf};

use tablepick_types::error::LoadError;

/// Environment variable overriding the data directory.
pub const ENV_DATA_DIR: &str = "TABLEPICK_DATA_DIR";

/// Resolve the data directory.
///
/// `TABLEPICK_DATA_DIR` if set, otherwise `~/.tablepick`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(ENV_DATA_DIR) {
        return PathBuf::from(dir);
    }

    // Use home directory fallback: ~/.tablepick
    if let Some(home) = dirs::home_dir() {
        return home.join(".tablepick");
    }

    // Last resort: current directory
    PathBuf::from(".tablepick")
}

/// Read a restaurant seed file into memory.
pub async fn read_seed_file(path: &Path) -> Result<String, LoadError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| LoadError::Io(format!("{}: {e}", path.display())))
}
