//! Configuration loading.
//!
//! `config.toml` is forgiving: a missing or malformed file falls back to
//! defaults with a log line. The persona override is not: a
//! `personas.toml` that exists but does not parse or validate is a startup
//! error, since silently answering with the built-in personas would hide
//! the user's edit.

use std::path::Path;

use pathwise_core::persona::PersonaCatalog;
use pathwise_types::config::GlobalConfig;
use pathwise_types::error::CatalogError;

use crate::filesystem::{config_path, personas_path};

/// Load global configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`GlobalConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and
///   returns the default.
pub async fn load_global_config(data_dir: &Path) -> GlobalConfig {
    let config_path = config_path(data_dir);

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
    };

    match toml::from_str::<GlobalConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            GlobalConfig::default()
        }
    }
}

/// Load the persona catalog: `{data_dir}/personas.toml` if present,
/// otherwise the built-in one.
pub async fn load_persona_catalog(data_dir: &Path) -> Result<PersonaCatalog, CatalogError> {
    let path = personas_path(data_dir);

    match tokio::fs::read_to_string(&path).await {
        Ok(content) => {
            let catalog = PersonaCatalog::from_toml(&content)?;
            tracing::info!(path = %path.display(), "loaded persona overrides");
            Ok(catalog)
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => PersonaCatalog::builtin(),
        Err(err) => Err(CatalogError::Io(format!("{}: {err}", path.display()))),
    }
}
