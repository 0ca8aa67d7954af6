use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::codegen::{NamingStyle, TargetLanguage};

use super::{defaults, envconfig::EnvConfig, validate};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub logging: LoggingConfig,
    pub database: Option<DatabaseConfig>,
    pub output: OutputConfig,
}

impl GeneratorConfig {
    /// Loads `.env` and `POCO_*` variables. Validation is left to the caller so
    /// command-line overrides can be applied first.
    pub fn from_env() -> Result<Self> {
        <Self as EnvConfig>::from_env()
    }

    pub fn validate(&self) -> Result<()> {
        <Self as EnvConfig>::validate(self)
    }
}

impl EnvConfig for GeneratorConfig {
    fn validate(&self) -> Result<()> {
        validate::validate(self)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub rust_log: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            rust_log: defaults::DEFAULT_RUST_LOG.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_db_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_db_min_idle")]
    pub min_idle: u32,
    /// Restricts the catalog read to one schema. Ignored by SQLite.
    #[serde(default)]
    pub schema: Option<String>,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: default_db_max_connections(),
            min_idle: default_db_min_idle(),
            schema: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub namespace: String,
    pub language: TargetLanguage,
    pub naming: NamingStyle,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(defaults::DEFAULT_OUTPUT_DIRECTORY),
            namespace: defaults::DEFAULT_NAMESPACE.to_string(),
            language: TargetLanguage::default(),
            naming: NamingStyle::default(),
        }
    }
}

fn default_db_max_connections() -> u32 {
    defaults::DEFAULT_DB_MAX_CONNECTIONS as u32
}

fn default_db_min_idle() -> u32 {
    defaults::DEFAULT_DB_MIN_IDLE as u32
}
