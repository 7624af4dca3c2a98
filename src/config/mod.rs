use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECONDS, DEFAULT_LISTEN_ADDR, LOG_FILE_NAME, cache,
};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Environment variables that override values from the config file
pub mod env_vars {
    pub const API_BASE_URL: &str = "FOOTBALL_API_BASE_URL";
    pub const API_KEY: &str = "FOOTBALL_API_KEY";
    pub const HTTP_TIMEOUT: &str = "FOOTBALL_HTTP_TIMEOUT";
    pub const CACHE_TTL: &str = "FOOTBALL_CACHE_TTL";
    pub const CACHE_MAX_ENTRIES: &str = "FOOTBALL_CACHE_MAX_ENTRIES";
    pub const OFFLINE: &str = "FOOTBALL_OFFLINE";
    pub const LISTEN_ADDR: &str = "FOOTBALL_LISTEN_ADDR";
    pub const LOG_FILE: &str = "FOOTBALL_LOG_FILE";
}

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the upstream football API. Should include https:// prefix.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Key sent with every upstream request
    #[serde(default)]
    pub api_key: String,
    /// HTTP timeout in seconds for upstream requests
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// How long a cached upstream result stays valid
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_seconds: u64,
    /// Maximum number of keys held per resource cache
    #[serde(default = "default_cache_max_entries")]
    pub cache_max_entries: usize,
    /// Whether the service starts serving fallback data
    #[serde(default)]
    pub offline_mode: bool,
    /// Socket address the HTTP server binds to
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_cache_ttl() -> u64 {
    cache::DEFAULT_TTL_SECONDS
}

fn default_cache_max_entries() -> usize {
    cache::DEFAULT_MAX_ENTRIES
}

fn default_listen_addr() -> String {
    DEFAULT_LISTEN_ADDR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: default_api_base_url(),
            api_key: String::new(),
            http_timeout_seconds: default_http_timeout(),
            cache_ttl_seconds: default_cache_ttl(),
            cache_max_entries: default_cache_max_entries(),
            offline_mode: false,
            listen_addr: default_listen_addr(),
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Falls back to defaults when no file exists; environment variables
    /// override file values and the result is validated.
    ///
    /// # Environment Variables
    /// - `FOOTBALL_API_BASE_URL` - Override upstream base URL
    /// - `FOOTBALL_API_KEY` - Override upstream API key
    /// - `FOOTBALL_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    /// - `FOOTBALL_CACHE_TTL` - Override cache TTL in seconds
    /// - `FOOTBALL_CACHE_MAX_ENTRIES` - Override per-resource cache capacity
    /// - `FOOTBALL_OFFLINE` - Override startup offline mode (`true`/`false`/`1`/`0`)
    /// - `FOOTBALL_LISTEN_ADDR` - Override server listen address
    /// - `FOOTBALL_LOG_FILE` - Override log file path
    pub async fn load() -> Result<Self, AppError> {
        Self::load_with(&get_config_path(), |name| std::env::var(name).ok()).await
    }

    /// Loads `config_path` (or defaults when it is missing), applies
    /// overrides from `lookup`, adds a missing base URL scheme and validates.
    pub(crate) async fn load_with<F>(config_path: &str, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = if Path::new(config_path).exists() {
            Self::load_from_path(config_path).await?
        } else {
            Config::default()
        };

        config.apply_overrides(lookup);
        config.api_base_url = with_default_scheme(&config.api_base_url);
        config.validate()?;

        Ok(config)
    }

    /// Applies overrides looked up by environment variable name.
    ///
    /// Values that fail to parse are ignored and the existing setting kept.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(env_vars::API_BASE_URL) {
            self.api_base_url = base_url;
        }

        if let Some(api_key) = lookup(env_vars::API_KEY) {
            self.api_key = api_key;
        }

        if let Some(timeout) = lookup(env_vars::HTTP_TIMEOUT).and_then(|s| s.parse().ok()) {
            self.http_timeout_seconds = timeout;
        }

        if let Some(ttl) = lookup(env_vars::CACHE_TTL).and_then(|s| s.parse().ok()) {
            self.cache_ttl_seconds = ttl;
        }

        if let Some(max) = lookup(env_vars::CACHE_MAX_ENTRIES).and_then(|s| s.parse().ok()) {
            self.cache_max_entries = max;
        }

        if let Some(offline) = lookup(env_vars::OFFLINE).and_then(|s| parse_flag(&s)) {
            self.offline_mode = offline;
        }

        if let Some(listen_addr) = lookup(env_vars::LISTEN_ADDR) {
            self.listen_addr = listen_addr;
        }

        if let Some(log_file_path) = lookup(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - The API key is masked
    /// - Handles case when no config file exists
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            for (label, value) in config.display_rows() {
                println!("{label}:");
                println!("{value}");
                println!("────────────────────────────────────");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    fn display_rows(&self) -> Vec<(&'static str, String)> {
        let api_key = if self.api_key.is_empty() {
            "(not set)".to_string()
        } else {
            "********".to_string()
        };
        let log_file = match &self.log_file_path {
            Some(custom_path) => custom_path.clone(),
            None => format!("{}/{LOG_FILE_NAME}\n(Default location)", get_log_dir_path()),
        };

        vec![
            ("API Base URL", self.api_base_url.clone()),
            ("API Key", api_key),
            ("HTTP Timeout", format!("{} seconds", self.http_timeout_seconds)),
            ("Cache TTL", format!("{} seconds", self.cache_ttl_seconds)),
            ("Cache Capacity", format!("{} entries per resource", self.cache_max_entries)),
            ("Offline Mode At Startup", self.offline_mode.to_string()),
            ("Listen Address", self.listen_addr.clone()),
            ("Log File Location", log_file),
        ]
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and ensures the base
    /// URL carries a scheme (`https://` is added when missing).
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(&Config {
            api_base_url: with_default_scheme(&self.api_base_url),
            ..self.clone()
        })?;

        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Prefixes `https://` when the base URL has no `http://` or `https://` scheme.
///
/// Empty values are returned unchanged so validation still rejects them.
pub fn with_default_scheme(base_url: &str) -> String {
    if base_url.is_empty() || base_url.starts_with("http://") || base_url.starts_with("https://")
    {
        base_url.to_string()
    } else {
        format!("https://{base_url}")
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
