use crate::app::SourceEndpoints;
use crate::common::constants::{
    DEFAULT_PORT, DUMMY_JSON_URL, ENV_OUTPUT_VARIANT, ENV_PORT, ENV_SOURCE_A_URL, ENV_SOURCE_B_URL,
    FAKE_STORE_URL,
};
use crate::common::error::{CatalogError, Result};
use crate::domain::OutputVariant;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub sources: SourcesConfig,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub source_a_url: String,
    pub source_b_url: String,
    /// No request timeout when unset
    pub timeout_seconds: Option<u64>,
    pub output_variant: OutputVariant,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            source_a_url: FAKE_STORE_URL.to_string(),
            source_b_url: DUMMY_JSON_URL.to_string(),
            timeout_seconds: None,
            output_variant: OutputVariant::default(),
        }
    }
}

impl SourcesConfig {
    pub fn endpoints(&self) -> SourceEndpoints {
        SourceEndpoints {
            source_a_url: self.source_a_url.clone(),
            source_b_url: self.source_b_url.clone(),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Config {
    /// Load from a TOML file (defaults when it does not exist), then apply
    /// `CATALOG_*` environment overrides.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let mut config = Self::from_file(path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(path)?;

        let config: Config = toml::from_str(&config_content)?;
        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Apply overrides from a key lookup; `std::env::var` in production.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| CatalogError::Config(format!("{} must be a port number, got '{}'", ENV_PORT, port)))?;
        }
        if let Some(url) = lookup(ENV_SOURCE_A_URL) {
            self.sources.source_a_url = url;
        }
        if let Some(url) = lookup(ENV_SOURCE_B_URL) {
            self.sources.source_b_url = url;
        }
        if let Some(variant) = lookup(ENV_OUTPUT_VARIANT) {
            self.sources.output_variant = variant.parse()?;
        }
        Ok(())
    }
}
