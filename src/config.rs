use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Placeholder key shipped in sample env files; treated as "no key".
pub const PLACEHOLDER_API_KEY: &str = "your_free_api_key_here";

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub provider: ProviderConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Deployment environment name, reported by the health endpoint
    #[serde(default = "default_environment")]
    pub environment: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the HTTP API
    #[serde(default = "default_host")]
    pub host: String,
    /// HTTP API port (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// SportsDataIO API key. Fixtures are served when absent.
    #[serde(default)]
    pub api_key: Option<String>,
    /// SportsDataIO NBA base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Number of most recent games used to build a snapshot
    #[serde(default = "default_recent_games")]
    pub recent_games: usize,
}

impl ProviderConfig {
    /// The configured key, unless it is missing, blank or the sample placeholder.
    pub fn usable_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty() && *k != PLACEHOLDER_API_KEY)
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            recent_games: default_recent_games(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable JSON formatted logs
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_base_url() -> String {
    "https://api.sportsdata.io/v3/nba".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_recent_games() -> usize {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

/// `SPORTS_DATA_API_KEY` / `SPORTS_DATA_BASE_URL`, applied over every other layer
#[derive(Debug, Clone, Default)]
pub struct ProviderOverrides {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

impl AppConfig {
    /// Load configuration from files and environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let env_name =
            std::env::var("PROPLINE_ENV").unwrap_or_else(|_| default_environment());
        let overrides = ProviderOverrides {
            api_key: std::env::var("SPORTS_DATA_API_KEY").ok(),
            base_url: std::env::var("SPORTS_DATA_BASE_URL").ok(),
        };

        Self::load_layered(config_dir.as_ref(), &env_name, overrides)
    }

    /// Layered load for an explicit environment name and provider overrides
    pub fn load_layered(
        config_dir: &Path,
        env_name: &str,
        overrides: ProviderOverrides,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // Start with default values
            .set_default("server.host", default_host())?
            .set_default("server.port", default_port() as i64)?
            .set_default("provider.base_url", default_base_url())?
            .set_default("provider.timeout_ms", default_timeout_ms() as i64)?
            .set_default("provider.recent_games", default_recent_games() as i64)?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            // Load default config file
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Load environment-specific config (e.g., config/production.toml)
            .add_source(File::from(config_dir.join(env_name)).required(false))
            // Override with environment variables (PROPLINE_SERVER__PORT, etc.)
            .add_source(
                Environment::with_prefix("PROPLINE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            // The selected environment always wins over file contents
            .set_override("environment", env_name)?;

        if let Some(key) = overrides.api_key {
            builder = builder.set_override("provider.api_key", key)?;
        }
        if let Some(url) = overrides.base_url {
            builder = builder.set_override("provider.base_url", url)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Create a default configuration for CLI usage
    pub fn default_config() -> Self {
        Self {
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
            },
            provider: ProviderConfig::default(),
            logging: LoggingConfig::default(),
            environment: default_environment(),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.server.port == 0 {
            errors.push("server.port must be non-zero".to_string());
        }

        if self.provider.base_url.trim().is_empty() {
            errors.push("provider.base_url must not be empty".to_string());
        }

        if self.provider.timeout_ms == 0 {
            errors.push("provider.timeout_ms must be positive".to_string());
        }

        if self.provider.recent_games == 0 {
            errors.push("provider.recent_games must be at least 1".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.provider.recent_games, 5);
    }

    #[test]
    fn test_validate_collects_every_problem() {
        let mut config = AppConfig::default_config();
        config.server.port = 0;
        config.provider.recent_games = 0;
        config.provider.timeout_ms = 0;

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_placeholder_key_is_not_usable() {
        let mut provider = ProviderConfig::default();
        assert_eq!(provider.usable_api_key(), None);

        provider.api_key = Some(PLACEHOLDER_API_KEY.to_string());
        assert_eq!(provider.usable_api_key(), None);

        provider.api_key = Some("   ".to_string());
        assert_eq!(provider.usable_api_key(), None);

        provider.api_key = Some("abc123".to_string());
        assert_eq!(provider.usable_api_key(), Some("abc123"));
    }

    /// Fresh config directory under the system temp dir
    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("propline-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_environment_name_wins_over_files() {
        let dir = scratch_dir("env-name");
        std::fs::write(dir.join("default.toml"), "environment = \"development\"\n").unwrap();
        std::fs::write(dir.join("production.toml"), "[server]\nport = 8080\n").unwrap();

        let config =
            AppConfig::load_layered(&dir, "production", ProviderOverrides::default()).unwrap();
        assert_eq!(config.environment, "production");
        assert_eq!(config.server.port, 8080);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_sports_data_overrides_beat_files() {
        let dir = scratch_dir("overrides");
        std::fs::write(
            dir.join("default.toml"),
            "[provider]\napi_key = \"from-file\"\nbase_url = \"https://file.example\"\n",
        )
        .unwrap();

        let config = AppConfig::load_layered(&dir, "development", ProviderOverrides::default())
            .unwrap();
        assert_eq!(config.provider.api_key.as_deref(), Some("from-file"));

        let overrides = ProviderOverrides {
            api_key: Some("from-env".to_string()),
            base_url: Some("https://env.example/v3/nba".to_string()),
        };
        let config = AppConfig::load_layered(&dir, "development", overrides).unwrap();
        assert_eq!(config.provider.usable_api_key(), Some("from-env"));
        assert_eq!(config.provider.base_url, "https://env.example/v3/nba");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_from_missing_dir_uses_defaults() {
        let config = AppConfig::load_from("does/not/exist").unwrap();
        assert!(!config.provider.base_url.is_empty());
        assert!(config.server.port > 0);
    }
}
