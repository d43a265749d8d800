//! Application configuration management.
//!
//! Handles loading, saving, and accessing application configuration including
//! generator tuning, word service connection details, and user preferences.
//! Configuration is persisted as TOML on disk.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{WgError, WgResult};
use crate::platform::Platform;

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Puzzle generator tuning.
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Word service connection settings.
    #[serde(default)]
    pub word_service: WordServiceConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Display/output settings relevant to the CLI.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Puzzle generator tuning parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Maximum whole-grid generation attempts before reporting failure.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Number of words requested per puzzle when using a theme.
    #[serde(default = "default_words_per_puzzle")]
    pub words_per_puzzle: usize,

    /// Default theme used when none is specified.
    #[serde(default = "default_theme")]
    pub default_theme: String,
}

/// Word service connection configuration.
///
/// The word service is the generative-text endpoint that produces themed
/// word lists. When unconfigured or unreachable, built-in packs are used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordServiceConfig {
    /// Word service base URL (e.g., "https://words.example.com").
    #[serde(default)]
    pub address: String,

    /// API key sent with every request.
    #[serde(default)]
    pub api_key: String,

    /// Custom HTTP headers as key-value pairs.
    #[serde(default)]
    pub custom_headers: std::collections::HashMap<String, String>,

    /// API request timeout in milliseconds.
    #[serde(default = "default_api_timeout")]
    pub api_timeout_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for log files. If empty, uses default location.
    #[serde(default)]
    pub directory: String,

    /// Enable JSON structured logging output.
    #[serde(default)]
    pub json_output: bool,
}

/// Display settings relevant to CLI output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Show word placements (the solution) alongside generated grids.
    #[serde(default)]
    pub show_solution: bool,

    /// Separate grid letters with spaces when rendering.
    #[serde(default = "default_true")]
    pub spaced_grid: bool,
}

// Default value functions for serde

fn default_max_attempts() -> u32 {
    constants::MAX_GENERATION_ATTEMPTS
}

fn default_words_per_puzzle() -> usize {
    constants::DEFAULT_WORDS_PER_PUZZLE
}

fn default_theme() -> String {
    constants::themes::ANIMALS.to_string()
}

fn default_api_timeout() -> u64 {
    constants::DEFAULT_API_TIMEOUT_MS
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            word_service: WordServiceConfig::default(),
            logging: LoggingConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            words_per_puzzle: default_words_per_puzzle(),
            default_theme: default_theme(),
        }
    }
}

impl Default for WordServiceConfig {
    fn default() -> Self {
        Self {
            address: String::new(),
            api_key: String::new(),
            custom_headers: std::collections::HashMap::new(),
            api_timeout_ms: default_api_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: String::new(),
            json_output: false,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_solution: false,
            spaced_grid: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default config file path.
    pub fn load_default() -> WgResult<Self> {
        let path = Self::default_config_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> WgResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to the default config file path.
    pub fn save_default(&self) -> WgResult<()> {
        let path = Self::default_config_path()?;
        self.save_to_file(&path)
    }

    /// Save configuration to a specific file path.
    pub fn save_to_file(&self, path: &Path) -> WgResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| WgError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> WgResult<PathBuf> {
        let config_dir = Platform::config_dir()?;
        Ok(config_dir.join("config.toml"))
    }

    /// Get the effective log directory, using the configured path or the default.
    pub fn effective_log_dir(&self) -> WgResult<PathBuf> {
        if self.logging.directory.is_empty() {
            let data_dir = Platform::data_dir()?;
            Ok(data_dir.join("logs"))
        } else {
            Ok(PathBuf::from(&self.logging.directory))
        }
    }

    /// Check whether the word service connection is configured.
    pub fn is_word_service_configured(&self) -> bool {
        !self.word_service.address.is_empty()
    }

    /// Sanitize and normalize a word service address.
    ///
    /// Ensures the address has a scheme and strips trailing slashes.
    pub fn sanitize_service_address(address: &str) -> String {
        let trimmed = address.trim().trim_matches('"').trim();
        if trimmed.is_empty() {
            return String::new();
        }

        let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("https://{trimmed}")
        };

        with_scheme.trim_end_matches('/').to_string()
    }
}

/// Thread-safe configuration holder for shared access across services.
#[derive(Clone)]
pub struct ConfigHandle {
    inner: Arc<RwLock<AppConfig>>,
}

impl ConfigHandle {
    /// Create a new configuration handle.
    pub fn new(config: AppConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Read the configuration.
    pub async fn read(&self) -> tokio::sync::RwLockReadGuard<'_, AppConfig> {
        self.inner.read().await
    }

    /// Write/update the configuration.
    pub async fn write(&self) -> tokio::sync::RwLockWriteGuard<'_, AppConfig> {
        self.inner.write().await
    }

    /// Save the current configuration to disk.
    pub async fn save(&self) -> WgResult<()> {
        let config = self.inner.read().await;
        config.save_default()
    }
}
