//! Configuration for the remote read endpoints.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Remote read endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL the `/trip` and `/country` paths are resolved against.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u32,
}

fn default_base_url() -> String {
    "http://localhost:3001".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_request_timeout() -> u32 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_seconds: default_connect_timeout(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
        }
    }
}

impl ApiConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.request_timeout_seconds))
    }
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/tripstore/config.toml` on Unix/macOS, or equivalent
    /// on other platforms via `dirs::config_dir()`. Falls back to the
    /// current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("tripstore").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads configuration from an explicit file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks that the base URL is present and carries an http scheme.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "api.base_url must not be empty".to_string(),
            });
        }

        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://")
        {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "api.base_url '{}' must use an http or https scheme",
                    self.api.base_url
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn full_file_parses() {
        let file = write_config(
            r#"
[api]
base_url = "http://localhost:4000"
connect_timeout_seconds = 2
request_timeout_seconds = 10
"#,
        );

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:4000");
        assert_eq!(config.api.connect_timeout(), Duration::from_secs(2));
        assert_eq!(config.api.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let file = write_config("[api]\nbase_url = \"http://example.test\"\n");

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.api.connect_timeout_seconds, 5);
        assert_eq!(config.api.request_timeout_seconds, 30);
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let file = write_config("");

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3001");
    }

    #[test]
    fn empty_base_url_fails_validation() {
        let file = write_config("[api]\nbase_url = \"\"\n");

        assert!(matches!(
            Config::load_from(file.path()),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn non_http_scheme_fails_validation() {
        let file = write_config("[api]\nbase_url = \"ftp://example.test\"\n");

        assert!(matches!(
            Config::load_from(file.path()),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn garbage_fails_to_parse() {
        let file = write_config("not toml at all {{{");

        assert!(matches!(
            Config::load_from(file.path()),
            Err(ConfigError::ParseError { .. })
        ));
    }
}
