//! Server configuration.
//!
//! Values come from built-in defaults, an optional TOML file and finally
//! command-line overrides, in that order of precedence.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{RewardHubError, RewardHubResult};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Settings the web server is started with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Verbose logging and detailed error pages.
    pub debug: bool,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            // Off unless asked for: debug mode puts render errors in responses.
            debug: false,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub debug: bool,
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Parse a TOML config file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> RewardHubResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content).map_err(|source| RewardHubError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise start from defaults.
    pub fn load(path: Option<&Path>) -> RewardHubResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides. `debug` can only be switched on.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(host) = overrides.host {
            self.host = host;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(dir) = overrides.static_dir {
            self.static_dir = dir;
        }
        self.debug |= overrides.debug;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert!(!config.debug);
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rewardhub.toml");
        std::fs::write(&path, "port = 8080\ndebug = true\n").unwrap();

        let config = ServerConfig::load(Some(&path)).unwrap();
        assert_eq!(config.port, 8080);
        assert!(config.debug);
        assert_eq!(config.host, DEFAULT_HOST);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rewardhub.toml");
        std::fs::write(&path, "listen = \"0.0.0.0\"\n").unwrap();

        let err = ServerConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, RewardHubError::ConfigParse { .. }));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ServerConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, RewardHubError::Io(_)));
    }

    #[test]
    fn test_overrides_win_over_file() {
        let config = ServerConfig {
            port: 8080,
            debug: true,
            ..ServerConfig::default()
        }
        .with_overrides(ConfigOverrides {
            host: Some("0.0.0.0".to_string()),
            port: Some(9000),
            // Off unless asked for: debug mode puts render errors in responses.
            debug: false,
            static_dir: None,
        });

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert!(config.debug, "a false flag must not turn off debug from the file");
        assert_eq!(config.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
    }
}
