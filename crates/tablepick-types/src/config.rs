//! Service configuration types for TablePick.
//!
//! `ServiceConfig` represents the `config.toml` in the data directory. It
//! names the two store collections and the HTTP bind address.

use serde::{Deserialize, Serialize};

/// Top-level configuration, resolved once at process start.
///
/// Loaded from `~/.tablepick/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Name of the restaurant collection (SQLite table).
    #[serde(default = "default_restaurants_table")]
    pub restaurants_table: String,

    /// Name of the request history collection (SQLite table).
    #[serde(default = "default_history_table")]
    pub history_table: String,

    /// SQLite database file, relative to the data directory.
    #[serde(default = "default_database_file")]
    pub database_file: String,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_restaurants_table() -> String {
    "restaurants".to_string()
}

fn default_history_table() -> String {
    "requests_history".to_string()
}

fn default_database_file() -> String {
    "tablepick.db".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            restaurants_table: default_restaurants_table(),
            history_table: default_history_table(),
            database_file: default_database_file(),
            host: default_host(),
            port: default_port(),
        }
    }
}
