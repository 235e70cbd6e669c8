//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;

/// Driver configuration, read from `config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneNetConfig {
    /// Weight given to streets declared without one
    #[serde(default = "default_weight")]
    pub default_weight: f64,

    /// Output format when `--format` is not passed
    #[serde(default)]
    pub format: OutputFormat,

    /// Log filter used when neither `--log-level` nor `--verbose` is passed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

fn default_weight() -> f64 {
    1.0
}

impl Default for ZoneNetConfig {
    fn default() -> Self {
        Self {
            default_weight: default_weight(),
            format: OutputFormat::default(),
            log_level: None,
        }
    }
}
