//! Execution configuration
//!
//! Stored as a `key = value` properties file next to the generated features.
//! Values from the environment (after loading `.env`) override the file.

use crate::error::{BddError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "config/config.properties";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_ENV: &str = "dev";

const ENV_OVERRIDES: [(&str, &str); 5] = [
    ("base_url", "OASBDD_BASE_URL"),
    ("auth_token", "OASBDD_AUTH_TOKEN"),
    ("timeout", "OASBDD_TIMEOUT"),
    ("log_level", "OASBDD_LOG_LEVEL"),
    ("env", "OASBDD_ENV"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
        }
    }
}

impl FromStr for LogLevel {
    type Err = BddError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "" | "INFO" => Ok(LogLevel::Info),
            "WARNING" | "WARN" => Ok(LogLevel::Warning),
            other => Err(BddError::ConfigError(format!(
                "unknown log level '{}' (expected DEBUG, INFO or WARNING)",
                other
            ))),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARNING"),
        }
    }
}

/// Read-only settings for executing scenarios.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    pub base_url: String,
    pub auth_token: Option<String>,
    pub timeout_secs: u64,
    pub log_level: LogLevel,
    pub env: String,
}

impl RunConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_level: LogLevel::default(),
            env: DEFAULT_ENV.to_string(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Load from a properties file, then apply `.env` and environment overrides
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            BddError::ConfigError(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        let mut properties = parse_properties(&content);
        apply_env_overrides(&mut properties);
        Self::from_properties(&properties)
    }

    /// Like [`RunConfig::load`], but a missing file is not an error and
    /// `overrides` (from command-line flags) win over every other source
    pub fn resolve(path: &Path, overrides: &IndexMap<String, String>) -> Result<Self> {
        let mut properties = if path.exists() {
            parse_properties(&fs::read_to_string(path)?)
        } else {
            tracing::debug!(path = %path.display(), "Config file not found; using environment only");
            IndexMap::new()
        };

        apply_env_overrides(&mut properties);
        properties.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self::from_properties(&properties).map_err(|e| match e {
            BddError::ConfigError(msg) => {
                BddError::ConfigError(format!("{} (config file: {})", msg, path.display()))
            }
            other => other,
        })
    }

    pub fn from_properties(properties: &IndexMap<String, String>) -> Result<Self> {
        let base_url = properties
            .get("base_url")
            .filter(|v| !v.is_empty())
            .cloned()
            .ok_or_else(|| BddError::ConfigError("'base_url' is not set".to_string()))?;

        let auth_token = properties
            .get("auth_token")
            .filter(|v| !v.is_empty())
            .cloned();

        let timeout_secs = match properties.get("timeout").filter(|v| !v.is_empty()) {
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                BddError::ConfigError(format!("'timeout' must be whole seconds, got '{}'", raw))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let log_level = match properties.get("log_level") {
            Some(raw) => raw.parse()?,
            None => LogLevel::default(),
        };

        let env = properties
            .get("env")
            .filter(|v| !v.is_empty())
            .cloned()
            .unwrap_or_else(|| DEFAULT_ENV.to_string());

        Ok(Self {
            base_url,
            auth_token,
            timeout_secs,
            log_level,
            env,
        })
    }

    pub fn to_properties(&self) -> String {
        format!(
            "base_url = {}\nauth_token = {}\ntimeout = {}\nlog_level = {}\nenv = {}\n",
            self.base_url,
            self.auth_token.as_deref().unwrap_or(""),
            self.timeout_secs,
            self.log_level,
            self.env
        )
    }

    /// Write the properties file, creating its directory
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_properties())?;
        Ok(())
    }
}

/// Parse `key = value` lines; blank lines and `#` comments are ignored
pub fn parse_properties(content: &str) -> IndexMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect()
}

fn apply_env_overrides(properties: &mut IndexMap<String, String>) {
    dotenv::dotenv().ok();

    for (key, var) in ENV_OVERRIDES {
        if let Ok(value) = std::env::var(var) {
            tracing::debug!(key, var, "Config value overridden from environment");
            properties.insert(key.to_string(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_properties() {
        let props = parse_properties(
            "# comment\nbase_url = https://api.example.com/v1?x=1\n\nauth_token =\nnot a pair\n",
        );
        assert_eq!(props["base_url"], "https://api.example.com/v1?x=1");
        assert_eq!(props["auth_token"], "");
        assert_eq!(props.len(), 2);
    }

    #[test]
    fn test_defaults_apply() {
        let props = parse_properties("base_url = http://localhost:8080\n");
        let config = RunConfig::from_properties(&props).unwrap();
        assert_eq!(config, RunConfig::new("http://localhost:8080"));
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_empty_token_means_no_token() {
        let props = parse_properties("base_url = http://a\nauth_token = \n");
        assert!(RunConfig::from_properties(&props).unwrap().auth_token.is_none());
    }

    #[test]
    fn test_missing_base_url_is_error() {
        let props = parse_properties("timeout = 5\n");
        assert!(matches!(
            RunConfig::from_properties(&props),
            Err(BddError::ConfigError(_))
        ));
    }

    #[test]
    fn test_invalid_values() {
        let props = parse_properties("base_url = http://a\ntimeout = soon\n");
        assert!(RunConfig::from_properties(&props).is_err());

        let props = parse_properties("base_url = http://a\nlog_level = TRACE\n");
        assert!(RunConfig::from_properties(&props).is_err());
    }

    #[test]
    fn test_resolve_with_missing_file_uses_overrides() {
        let dir = TempDir::new().unwrap();
        let mut overrides = IndexMap::new();
        overrides.insert("base_url".to_string(), "http://override".to_string());
        overrides.insert("timeout".to_string(), "3".to_string());

        let config = RunConfig::resolve(&dir.path().join("missing.properties"), &overrides).unwrap();
        assert_eq!(config.base_url, "http://override");
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn test_resolve_flags_win_over_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.properties");
        std::fs::write(&path, "base_url = http://file\nenv = qa\n").unwrap();

        let mut overrides = IndexMap::new();
        overrides.insert("auth_token".to_string(), "tok".to_string());

        let config = RunConfig::resolve(&path, &overrides).unwrap();
        assert_eq!(config.env, "qa");
        assert_eq!(config.auth_token.as_deref(), Some("tok"));
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("WARN".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!(LogLevel::Warning.as_filter(), "warn");
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config").join("config.properties");
        let config = RunConfig {
            auth_token: Some("abc".to_string()),
            timeout_secs: 30,
            log_level: LogLevel::Debug,
            env: "qa".to_string(),
            ..RunConfig::new("https://petstore.example.com/v2")
        };

        config.save(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("base_url = https://petstore.example.com/v2\n"));

        let reloaded = RunConfig::from_properties(&parse_properties(&content)).unwrap();
        assert_eq!(reloaded, config);
    }
}
