use crate::error::{Result, UserqlError};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "userql.yml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_database_url")]
    pub database_url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_database_url() -> String {
    "sqlite://userql.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

impl ServerConfig {
    /// Load settings from `path`, or from `userql.yml` under `dir` when no
    /// path is given. A missing default file yields the defaults; a missing
    /// explicit file is an error.
    pub fn load(path: Option<&Path>, dir: &Path) -> Result<Self> {
        let config_path = match path {
            Some(p) => {
                if !p.exists() {
                    return Err(UserqlError::Config(format!(
                        "Config file not found: {}",
                        p.display()
                    )));
                }
                p.to_path_buf()
            }
            None => {
                let candidate = dir.join(CONFIG_FILE_NAME);
                if !candidate.exists() {
                    tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let content = std::fs::read_to_string(&config_path)?;
        let config: ServerConfig = serde_yaml::from_str(&content)?;
        tracing::debug!(path = %config_path.display(), "Loaded config");
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.database_url.trim().is_empty() {
            return Err(UserqlError::Config(
                "database_url cannot be empty".to_string(),
            ));
        }
        if self.max_connections == 0 {
            return Err(UserqlError::Config(
                "max_connections must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_port(mut self, port: Option<u16>) -> Self {
        if let Some(p) = port {
            self.port = p;
        }
        self
    }

    pub fn with_host(mut self, host: Option<String>) -> Self {
        if let Some(h) = host {
            self.host = h;
        }
        self
    }

    pub fn with_database_url(mut self, database_url: Option<String>) -> Self {
        if let Some(url) = database_url {
            self.database_url = url;
        }
        self
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| UserqlError::Config(format!("Invalid listen address: {}", e)))
    }

    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 4000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.max_connections, 5);
        assert!(!config.is_in_memory());
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = ServerConfig::load(None, temp_dir.path()).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "port: 8080\ndatabase_url: \"sqlite::memory:\"\n",
        )
        .unwrap();

        let config = ServerConfig::load(None, temp_dir.path()).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.host, "0.0.0.0");
        assert!(config.is_in_memory());
    }

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.yml");
        let err = ServerConfig::load(Some(&missing), temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_rejects_zero_connections() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.yml");
        std::fs::write(&path, "max_connections: 0\n").unwrap();

        let err = ServerConfig::load(Some(&path), temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("max_connections"));
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = ServerConfig::default_path(temp_dir.path());
        let config = ServerConfig::default().with_port(Some(5000));
        config.save(&path).unwrap();

        let loaded = ServerConfig::load(None, temp_dir.path()).unwrap();
        assert_eq!(loaded.port, 5000);
    }

    #[test]
    fn test_overrides_take_precedence() {
        let config = ServerConfig::default()
            .with_port(Some(9000))
            .with_host(Some("127.0.0.1".to_string()))
            .with_database_url(None);
        assert_eq!(config.port, 9000);
        assert_eq!(config.database_url, "sqlite://userql.db");
        assert_eq!(
            config.socket_addr().unwrap(),
            "127.0.0.1:9000".parse::<SocketAddr>().unwrap()
        );
    }
}
