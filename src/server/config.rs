//! Server configuration parsing.

use serde::Deserialize;
use std::path::Path;

use crate::stats::FilterPolicy;

/// Server configuration loaded from TOML file.
///
/// Every section has defaults, so an empty (or absent) file yields a
/// development configuration: localhost bind, permissive CORS, text logs.
/// The remote store and the share secret are configured through the
/// environment, not this file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server bind settings.
    pub server: ServerConfig,
    /// Cross-origin settings.
    pub cors: CorsConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Statistics settings.
    pub stats: StatsConfig,
}

/// Server bind settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1" or "0.0.0.0").
    pub bind: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// CORS settings. The web client is served from a different origin than the
/// API, so the defaults allow any origin for GET/POST/OPTIONS.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub enabled: bool,
    pub allow_origins: Vec<String>,
    pub allow_methods: Vec<String>,
    pub allow_headers: Vec<String>,
    /// Preflight cache lifetime in seconds.
    pub max_age: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allow_origins: vec!["*".to_string()],
            allow_methods: vec!["GET".to_string(), "POST".to_string(), "OPTIONS".to_string()],
            allow_headers: vec!["content-type".to_string()],
            max_age: 3600,
        }
    }
}

/// Logging settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (e.g., "info" or "tomo_index=debug").
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

/// Statistics settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Which records count toward the aggregate view.
    pub filter_policy: FilterPolicyName,
}

/// Named filter policy, as written in the config file.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterPolicyName {
    #[default]
    NonZeroTotal,
    AnyPositiveAnswer,
}

impl From<FilterPolicyName> for FilterPolicy {
    fn from(name: FilterPolicyName) -> Self {
        match name {
            FilterPolicyName::NonZeroTotal => FilterPolicy::NonZeroTotal,
            FilterPolicyName::AnyPositiveAnswer => FilterPolicy::AnyPositiveAnswer,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(path.as_ref().display().to_string(), e))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }

    /// Get the socket address string for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.bind, self.server.port)
    }
}

/// Configuration error.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading config file.
    Io(String, std::io::Error),
    /// TOML parse error.
    Parse(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "Failed to read config file '{}': {}", path, e),
            ConfigError::Parse(e) => write!(f, "Failed to parse config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
[server]
bind = "0.0.0.0"
port = 3000

[cors]
allow_origins = ["https://tomo.example.com"]

[logging]
level = "debug"
format = "json"

[stats]
filter_policy = "any-positive-answer"
"#;
        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.server.bind, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.cors.allow_origins, vec!["https://tomo.example.com"]);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(matches!(
            FilterPolicy::from(config.stats.filter_policy),
            FilterPolicy::AnyPositiveAnswer
        ));
    }

    #[test]
    fn test_empty_config_gets_defaults() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert!(config.cors.enabled);
        assert_eq!(config.cors.allow_origins, vec!["*"]);
        assert_eq!(config.logging.level, "info");
    }
}
