//! Service configuration loader for TablePick.
//!
//! Reads `config.toml` from the data directory (`~/.tablepick/` in production)
//! and deserializes it into [`ServiceConfig`], then applies environment
//! overrides. Falls back to defaults when the file is missing or malformed.

use std::path::Path;

use tablepick_types::config::ServiceConfig;

/// Environment variable naming the restaurant collection.
pub const ENV_RESTAURANTS_TABLE: &str = "RESTAURANTS_TABLE";
/// Environment variable naming the history collection.
pub const ENV_HISTORY_TABLE: &str = "REQUESTS_HISTORY_TABLE";
/// Environment variable overriding the HTTP port.
pub const ENV_PORT: &str = "TABLEPICK_PORT";

/// Load configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`ServiceConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_service_config(data_dir: &Path) -> ServiceConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return ServiceConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return ServiceConfig::default();
        }
    };

    match toml::from_str::<ServiceConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            ServiceConfig::default()
        }
    }
}

/// Apply environment overrides on top of a loaded config.
///
/// `lookup` is `std::env::var(..).ok()` in production; tests pass a map.
/// An unparsable port is ignored with a warning.
pub fn apply_env_overrides<F>(mut config: ServiceConfig, lookup: F) -> ServiceConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(table) = lookup(ENV_RESTAURANTS_TABLE) {
        tracing::info!("{ENV_RESTAURANTS_TABLE} set, using collection '{table}'");
        config.restaurants_table = table;
    }

    if let Some(table) = lookup(ENV_HISTORY_TABLE) {
        tracing::info!("{ENV_HISTORY_TABLE} set, using collection '{table}'");
        config.history_table = table;
    }

    if let Some(port) = lookup(ENV_PORT) {
        match port.parse::<u16>() {
            Ok(port) => config.port = port,
            Err(e) => tracing::warn!("Invalid {ENV_PORT} value '{port}': {e}, keeping {}", config.port),
        }
    }

    config
}

/// Load `config.toml` and apply process environment overrides.
pub async fn resolve_service_config(data_dir: &Path) -> ServiceConfig {
    let config = load_service_config(data_dir).await;
    apply_env_overrides(config, |key| std::env::var(key).ok())
}
