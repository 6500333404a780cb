//! Data directory layout.
//!
//! Everything Pathwise persists lives under one directory:
//! `config.toml`, an optional `personas.toml` override, the SQLite
//! database and the log file when `--log-file` is relative.

use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "PATHWISE_DATA_DIR";

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `PATHWISE_DATA_DIR` environment variable
/// 2. `~/.pathwise`
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".pathwise");
    }

    // Last resort: current directory
    PathBuf::from(".pathwise")
}

/// Create the data directory if it does not exist yet.
pub async fn ensure_data_dir(data_dir: &Path) -> Result<(), std::io::Error> {
    tokio::fs::create_dir_all(data_dir).await
}

pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}

pub fn personas_path(data_dir: &Path) -> PathBuf {
    data_dir.join("personas.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_data_dir_env_and_default() {
        // SAFETY: the only test touching this variable
        unsafe { std::env::set_var(DATA_DIR_ENV, "/tmp/pathwise-test") };
        assert_eq!(resolve_data_dir(), PathBuf::from("/tmp/pathwise-test"));

        unsafe { std::env::remove_var(DATA_DIR_ENV) };
        assert!(resolve_data_dir().ends_with(".pathwise"));
    }

    #[test]
    fn test_layout_paths() {
        let dir = PathBuf::from("/home/user/.pathwise");
        assert_eq!(config_path(&dir), dir.join("config.toml"));
        assert_eq!(personas_path(&dir), dir.join("personas.toml"));
    }

    #[tokio::test]
    async fn test_ensure_data_dir_creates_nested() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");
        ensure_data_dir(&nested).await.unwrap();
        assert!(nested.is_dir());
        // Second call is a no-op
        ensure_data_dir(&nested).await.unwrap();
    }
}
