//! Configuration for influence-core
//!
//! Centralized configuration for ingestion (column names, missing-value
//! handling, zero-follower policy) and ranking.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Number of recommendations returned when the caller does not say
pub const DEFAULT_TOP_N: usize = 5;

/// System-wide configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    /// Dataset ingestion settings
    pub ingest: IngestConfig,
    /// Ranking settings
    pub ranking: RankingConfig,
}

/// Default field delimiter; with this setting a `.tsv` file is read tab-separated
pub const DEFAULT_DELIMITER: char = ',';

/// Dataset ingestion configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Field delimiter. Left at the default, the file extension decides.
    pub delimiter: char,
    /// Which cells make a row count as incomplete
    pub missing_values: MissingValueScope,
    /// What to do with rows whose follower count is zero
    pub zero_followers: ZeroFollowerPolicy,
    /// Header names of the required columns
    pub columns: ColumnMapping,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            missing_values: MissingValueScope::AllColumns,
            zero_followers: ZeroFollowerPolicy::Drop,
            columns: ColumnMapping::default(),
        }
    }
}

impl IngestConfig {
    /// Validate ingestion settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        let columns = [
            &self.columns.username,
            &self.columns.followers,
            &self.columns.average_views,
        ];

        if columns.iter().any(|c| c.trim().is_empty()) {
            return Err(ConfigError::InvalidColumns(
                "column names must not be empty".to_string(),
            ));
        }

        if columns[0] == columns[1] || columns[0] == columns[2] || columns[1] == columns[2] {
            return Err(ConfigError::InvalidColumns(
                "username, followers and average_views must be distinct columns".to_string(),
            ));
        }

        if !self.delimiter.is_ascii() {
            return Err(ConfigError::OutOfRange(format!(
                "delimiter '{}' is not an ASCII character",
                self.delimiter
            )));
        }

        Ok(())
    }
}

/// Header names for the three required columns
///
/// Matching is exact: case and spacing must agree with the file header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    pub username: String,
    pub followers: String,
    pub average_views: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            username: "username".to_string(),
            followers: "followers".to_string(),
            average_views: "Average views".to_string(),
        }
    }
}

/// Scope of the missing-value row filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingValueScope {
    /// An empty cell in any column drops the row
    AllColumns,
    /// Only empty username, followers or average views cells drop the row
    RequiredColumns,
}

/// Handling of rows with zero followers, where engagement rate is undefined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroFollowerPolicy {
    /// Treat the row as missing data: drop it and count it
    Drop,
    /// Abort ingestion
    Reject,
}

/// Ranking configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Number of recommendations to return
    pub top_n: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl RecommenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Load and validate configuration from a `.toml` or `.json` file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(&contents)?,
            Some("json") => Self::from_json(&contents)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or_default().to_string(),
                ))
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ingest.validate()?;

        if self.ranking.top_n == 0 {
            return Err(ConfigError::OutOfRange(
                "ranking.top_n must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration loading or validation error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Column mapping is unusable
    #[error("Invalid columns: {0}")]
    InvalidColumns(String),

    /// Value is out of valid range
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    /// Config file extension is not recognized
    #[error("Unsupported config format: '{0}'")]
    UnsupportedFormat(String),

    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(String),
}
