//! Main application configuration
//!
//! Configuration comes from a TOML file or from environment variables, with
//! every field falling back to its default.

use crate::config::ranking::RankingSettings;
use crate::error::RankingError;
use crate::ranking::criterion::parse_criteria_list;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::env;
use std::path::Path;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub ranking: RankingSettings,
    pub output: OutputSettings,
}

/// Service-level settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Name used in log output
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// How standings are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = RankingError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(RankingError::ConfigurationError {
                message: format!("Unknown output format: {}", other),
            }),
        }
    }
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "standings".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config {}: {}", path.display(), e))?;
        let config = Self::from_toml_str(&contents)?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: AppConfig =
            toml::from_str(contents).map_err(|e| anyhow!("Failed to parse config: {}", e))?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(name) = env::var("SERVICE_NAME") {
            config.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.service.log_level = log_level;
        }

        if let Ok(criteria) = env::var("RANKING_CRITERIA") {
            config.ranking.criteria = parse_criteria_list(&criteria)
                .map_err(|e| anyhow!("Invalid RANKING_CRITERIA value: {}", e))?;
        }
        if let Ok(parallel) = env::var("RANKING_PARALLEL") {
            config.ranking.parallel = parallel
                .parse()
                .map_err(|_| anyhow!("Invalid RANKING_PARALLEL value: {}", parallel))?;
        }

        if let Ok(format) = env::var("OUTPUT_FORMAT") {
            config.output.format = format
                .parse()
                .map_err(|e| anyhow!("Invalid OUTPUT_FORMAT value: {}", e))?;
        }

        validate_config(&config)?;
        Ok(config)
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => {
            return Err(RankingError::ConfigurationError {
                message: format!("Invalid log level: {}", config.service.log_level),
            }
            .into())
        }
    }

    if config.ranking.criteria.is_empty() {
        return Err(RankingError::ConfigurationError {
            message: "At least one ranking criterion must be configured".to_string(),
        }
        .into());
    }

    let mut seen = HashSet::new();
    for criterion in &config.ranking.criteria {
        if !seen.insert(criterion) {
            return Err(RankingError::ConfigurationError {
                message: format!("Ranking criterion listed twice: {}", criterion),
            }
            .into());
        }
    }

    Ok(())
}
