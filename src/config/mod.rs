//! Configuration module for dogfinder
//!
//! Settings are layered: built-in defaults, then the TOML file in the user's
//! config directory, then `DOGFINDER_*` environment variables.

mod setup;

pub use setup::{prompt_credentials, set_user};

use crate::api::{ApiError, ClientOptions, DEFAULT_BASE_URL, StatusPolicy};
use crate::search::{DEFAULT_SORT, PAGE_SIZES};
use crate::ui::output::StatusBarWriter;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Prefix of environment overrides, e.g. `DOGFINDER_PAGE_SIZE`
pub const ENV_PREFIX: &str = "DOGFINDER";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_page_size() -> usize {
    PAGE_SIZES[0]
}

fn default_sort() -> String {
    DEFAULT_SORT.to_string()
}

const fn default_notification_ttl_ms() -> u64 {
    StatusBarWriter::DEFAULT_TTL.as_millis() as u64
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DogfinderConfig {
    /// Root URL of the adoption service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Records per dashboard page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Sort directive sent with searches; empty sends none
    #[serde(default = "default_sort")]
    pub sort: String,

    /// How long a notification stays in the status bar
    #[serde(default = "default_notification_ttl_ms")]
    pub notification_ttl_ms: u64,

    /// How non-success responses reach callers
    #[serde(default)]
    pub status_policy: StatusPolicy,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Identifiers requested per search; the service default when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_size: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,

    /// Filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Write logs here instead of stderr
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl Default for DogfinderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
            sort: default_sort(),
            notification_ttl_ms: default_notification_ttl_ms(),
            status_policy: StatusPolicy::default(),
            request_timeout_secs: None,
            search_size: None,
            user_name: None,
            user_email: None,
            log_level: default_log_level(),
            log_file: None,
            quiet: false,
        }
    }
}

impl DogfinderConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("dogfinder").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, creating it with defaults if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load_layers(path, Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    fn load_layers(path: &Path, environment: Environment) -> Result<Self, ConfigError> {
        if !path.exists() {
            Self::default().save_to(path)?;
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .add_source(environment)
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Message("page_size must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be determined or
    /// the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// The sort directive, or `None` when sorting is disabled
    #[must_use]
    pub fn sort_directive(&self) -> Option<String> {
        Some(self.sort.trim().to_string()).filter(|s| !s.is_empty())
    }

    #[must_use]
    pub const fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Client settings derived from this configuration
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if `base_url` does not parse.
    pub fn client_options(&self) -> Result<ClientOptions, ApiError> {
        Ok(ClientOptions::new(&self.base_url)?
            .with_policy(self.status_policy)
            .with_timeout(self.request_timeout()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let mut map = config::Map::new();
        for (key, value) in vars {
            map.insert((*key).to_string(), (*value).to_string());
        }
        Environment::with_prefix(ENV_PREFIX).try_parsing(true).source(Some(map))
    }

    #[test]
    fn test_default_config() {
        let config = DogfinderConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.page_size, 10);
        assert_eq!(config.sort_directive().as_deref(), Some("breed:asc"));
        assert_eq!(config.notification_ttl(), Duration::from_millis(3000));
        assert_eq!(config.status_policy, StatusPolicy::Lenient);
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn test_first_load_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = DogfinderConfig::load_layers(&path, env(&[])).unwrap();

        assert!(path.exists());
        assert_eq!(config, DogfinderConfig::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let config = DogfinderConfig {
            page_size: 50,
            status_policy: StatusPolicy::Strict,
            request_timeout_secs: Some(15),
            user_name: Some("Ada".into()),
            user_email: Some("ada@example.com".into()),
            ..DogfinderConfig::default()
        };

        config.save_to(&path).unwrap();
        let loaded = DogfinderConfig::load_layers(&path, env(&[])).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "page_size = 20\nsort = \"\"\n").unwrap();

        let config = DogfinderConfig::load_layers(&path, env(&[])).unwrap();

        assert_eq!(config.page_size, 20);
        assert!(config.sort_directive().is_none());
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "page_size = 20\n").unwrap();

        let config = DogfinderConfig::load_layers(
            &path,
            env(&[
                ("DOGFINDER_PAGE_SIZE", "100"),
                ("DOGFINDER_BASE_URL", "http://localhost:9000"),
            ]),
        )
        .unwrap();

        assert_eq!(config.page_size, 100);
        assert_eq!(config.base_url, "http://localhost:9000");
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "page_size = 0\n").unwrap();

        assert!(DogfinderConfig::load_layers(&path, env(&[])).is_err());
    }

    #[test]
    fn test_client_options() {
        let config = DogfinderConfig {
            base_url: "http://localhost:8080/api".into(),
            request_timeout_secs: Some(5),
            status_policy: StatusPolicy::Strict,
            ..DogfinderConfig::default()
        };

        let options = config.client_options().unwrap();

        assert_eq!(options.base_url.as_str(), "http://localhost:8080/api/");
        assert_eq!(options.timeout, Some(Duration::from_secs(5)));
        assert_eq!(options.policy, StatusPolicy::Strict);
    }

    #[test]
    fn test_invalid_base_url() {
        let config = DogfinderConfig {
            base_url: "not a url".into(),
            ..DogfinderConfig::default()
        };
        assert!(config.client_options().is_err());
    }
}
