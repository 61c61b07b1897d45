use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const PROGRAM_NAME: &str = "depot";
pub const PROGRAM_LOG_LEVEL: &str = "DEPOT_LOG_LEVEL";

/// Configured database backend kind, e.g. "sqlite3" or "postgres".
pub const DB_TYPE_VAR: &str = "DEPOT_DB_TYPE";
/// Development mode switch; any value other than "0"/"false" enables it.
pub const DEV_MODE_VAR: &str = "DEPOT_DEV";

const DEFAULT_DB_KIND: &str = "sqlite3";

pub fn xdg_or_home(xdg_var: &str, home_suffix: &str) -> PathBuf {
    if let Some(dir) = std::env::var_os(xdg_var) {
        PathBuf::from(dir)
    } else {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(home_suffix)
    }
}

/// Data directory for application state (settings, seed data).
pub fn depot_dir() -> PathBuf {
    xdg_or_home("XDG_DATA_HOME", ".local/share").join(PROGRAM_NAME)
}

/// Persistence-layer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Backend kind; governs identifier quoting downstream.
    pub kind: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            kind: DEFAULT_DB_KIND.to_owned(),
        }
    }
}

/// Process-wide service configuration, resolved once at boot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub database: DatabaseConfig,
    /// Gates development-only startup steps.
    #[serde(default)]
    pub dev: bool,
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        let kind = std::env::var(DB_TYPE_VAR)
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_DB_KIND.to_owned());

        let dev = std::env::var(DEV_MODE_VAR)
            .map(|v| !matches!(v.as_str(), "" | "0" | "false"))
            .unwrap_or(false);

        ServiceConfig {
            database: DatabaseConfig { kind },
            dev,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
