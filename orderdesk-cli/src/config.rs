//! Configuration file for the orderdesk CLI
//!
//! Optional TOML file, `~/.orderdesk/config.toml` unless `--config` names
//! another one. Command-line flags and their environment variables win
//! over the file; the file wins over built-in defaults.
//!
//! ```toml
//! [server]
//! bind = "0.0.0.0:5000"
//! cors_permissive = false
//! timeout_secs = 30
//!
//! [database]
//! url = "sqlite://orderdesk.db"
//!
//! [seed]
//! enabled = true
//! file = "/srv/orderdesk/seed.json"
//! ```

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use orderdesk_server::db::IN_MEMORY_URL;
use orderdesk_server::{ServerConfig, DEFAULT_TIMEOUT_SECS};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrderdeskConfig {
    pub server: ServerSection,
    pub database: DatabaseSection,
    pub seed: SeedSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSection {
    pub bind: Option<SocketAddr>,
    pub cors_permissive: Option<bool>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseSection {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedSection {
    pub enabled: Option<bool>,
    pub file: Option<PathBuf>,
}

impl OrderdeskConfig {
    /// Load the config file.
    ///
    /// An explicit path must exist. Without one, the default path is
    /// read if present and built-in defaults are used otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let path = Self::config_path();
        if path.exists() {
            Self::from_file(&path)
        } else {
            tracing::debug!("No config file at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Get default config file path: ~/.orderdesk/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".orderdesk/config.toml")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {:?} (invalid TOML)", path))?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn database_url(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.database.url.clone())
            .unwrap_or_else(|| IN_MEMORY_URL.to_string())
    }

    pub fn seed_enabled(&self, no_seed: bool) -> bool {
        !no_seed && self.seed.enabled.unwrap_or(true)
    }

    pub fn seed_file(&self, flag: Option<PathBuf>) -> Option<PathBuf> {
        flag.or_else(|| self.seed.file.clone())
    }

    pub fn server_config(
        &self,
        bind: Option<SocketAddr>,
        cors_permissive: bool,
        timeout_secs: Option<u64>,
    ) -> ServerConfig {
        let defaults = ServerConfig::default();
        let timeout = timeout_secs
            .or(self.server.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        ServerConfig {
            bind_addr: bind.or(self.server.bind).unwrap_or(defaults.bind_addr),
            cors_permissive: cors_permissive || self.server.cors_permissive.unwrap_or(false),
            request_timeout: Duration::from_secs(timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [server]
        bind = "0.0.0.0:8080"
        timeout_secs = 5

        [database]
        url = "sqlite://orderdesk.db"

        [seed]
        enabled = false
    "#;

    #[test]
    fn empty_config_uses_defaults() {
        let config: OrderdeskConfig = toml::from_str("").unwrap();

        assert_eq!(config.database_url(None), IN_MEMORY_URL);
        assert!(config.seed_enabled(false));
        assert_eq!(config.seed_file(None), None);

        let server = config.server_config(None, false, None);
        assert_eq!(server.bind_addr, ServerConfig::default().bind_addr);
        assert_eq!(server.request_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn file_values_apply() {
        let config: OrderdeskConfig = toml::from_str(SAMPLE).unwrap();

        assert_eq!(config.database_url(None), "sqlite://orderdesk.db");
        assert!(!config.seed_enabled(false));

        let server = config.server_config(None, false, None);
        assert_eq!(server.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(server.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn flags_override_file() {
        let config: OrderdeskConfig = toml::from_str(SAMPLE).unwrap();

        assert_eq!(
            config.database_url(Some("sqlite::memory:".into())),
            "sqlite::memory:"
        );
        let server = config.server_config(Some("127.0.0.1:9000".parse().unwrap()), true, Some(60));
        assert_eq!(server.bind_addr.port(), 9000);
        assert!(server.cors_permissive);
        assert_eq!(server.request_timeout, Duration::from_secs(60));
        assert_eq!(
            config.seed_file(Some(PathBuf::from("other.json"))),
            Some(PathBuf::from("other.json"))
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<OrderdeskConfig, _> = toml::from_str("[server]\nport = 1\n");
        assert!(result.is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = OrderdeskConfig::load(Some(Path::new("/nonexistent/orderdesk.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
