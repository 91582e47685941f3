use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StratosConfig {
    #[serde(default)]
    pub builder: BuilderConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Timing knobs for the agent builder's simulated replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuilderConfig {
    #[serde(default = "default_base_delay")]
    pub response_base_delay_ms: u64,

    #[serde(default = "default_jitter")]
    pub response_jitter_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_true")]
    pub color: bool,

    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,

    #[serde(default)]
    pub compact: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub json_format: bool,
}

fn default_base_delay() -> u64 {
    1500
}

fn default_jitter() -> u64 {
    1000
}

fn default_true() -> bool {
    true
}

fn default_datetime_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            response_base_delay_ms: default_base_delay(),
            response_jitter_ms: default_jitter(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            datetime_format: default_datetime_format(),
            compact: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json_format: false,
        }
    }
}

impl StratosConfig {
    pub fn load() -> Result<Self, ConfigLoadError> {
        Self::load_from_paths(get_config_paths())
    }

    pub fn load_from_paths(paths: Vec<PathBuf>) -> Result<Self, ConfigLoadError> {
        load_dotenv_files();

        let mut builder = ConfigBuilder::builder();

        for path in paths {
            if path.exists() {
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("STRATOS")
                .separator("_")
                .try_parsing(true),
        );

        let config = builder.build()?;

        let mut stratos_config: StratosConfig = config.try_deserialize()?;

        if let Ok(level) = std::env::var("STRATOS_LOG_LEVEL") {
            stratos_config.logging.level = level;
        } else if let Ok(level) = std::env::var("RUST_LOG") {
            stratos_config.logging.level = level;
        }

        if let Ok(base) = std::env::var("STRATOS_RESPONSE_BASE_DELAY_MS") {
            if let Ok(ms) = base.parse() {
                stratos_config.builder.response_base_delay_ms = ms;
            }
        }

        if let Ok(jitter) = std::env::var("STRATOS_RESPONSE_JITTER_MS") {
            if let Ok(ms) = jitter.parse() {
                stratos_config.builder.response_jitter_ms = ms;
            }
        }

        stratos_config.validate()?;

        Ok(stratos_config)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.builder.response_base_delay_ms == 0 {
            return Err(ConfigLoadError::InvalidValue {
                key: "builder.response_base_delay_ms".to_string(),
                message: "Must be greater than 0".to_string(),
            });
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        let level_lower = self.logging.level.to_lowercase();
        if !valid_levels.contains(&level_lower.as_str()) && !level_lower.contains('=') {
            return Err(ConfigLoadError::InvalidValue {
                key: "logging.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Must be one of: {:?}",
                    self.logging.level, valid_levels
                ),
            });
        }

        Ok(())
    }

    pub fn log_level(&self) -> &str {
        &self.logging.level
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join("stratos.toml"));
    }

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("stratos").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".stratos").join("config.toml"));
        paths.push(home.join(".config").join("stratos").join("config.toml"));
    }

    paths
}

fn load_dotenv_files() {
    let env_paths = get_dotenv_paths();

    for path in env_paths {
        if path.exists() {
            let _ = dotenvy::from_path(&path);
        }
    }
}

fn get_dotenv_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(".env"));
        paths.push(cwd.join(".env.local"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".stratos").join(".env"));
    }

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("stratos").join(".env"));
    }

    paths
}

pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("stratos"))
}

pub fn ensure_config_dir() -> Result<PathBuf, std::io::Error> {
    let config_dir = get_config_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine config directory",
        )
    })?;

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)?;
    }

    Ok(config_dir)
}
