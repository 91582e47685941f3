use anyhow::Result;
use stratos_core::{BuilderConfig, ResponseTiming, StratosConfig};

/// CLI view over the layered core configuration: built-in defaults, an
/// optional `stratos.toml`, then `STRATOS_` environment variables.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub log_level: String,
    pub builder: BuilderConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            builder: BuilderConfig::default(),
        }
    }
}

#[allow(dead_code)]
impl CliConfig {
    pub fn load() -> Result<Self> {
        let core = StratosConfig::load()?;

        Ok(Self {
            log_level: core.logging.level.clone(),
            builder: core.builder,
        })
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn timing(&self) -> ResponseTiming {
        ResponseTiming::from_config(&self.builder)
    }
}
