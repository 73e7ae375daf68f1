//! Configuration module
//!
//! Values are resolved in this order: command-line flags, environment
//! variables (handled by clap), the TOML file, then the defaults below.

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use letalone_core::TARGET_RECALL;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Report configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct ReportConfig {
    /// Output locations and table format
    #[serde(default)]
    pub output: OutputConfig,

    /// Figure configuration
    #[serde(default)]
    pub plot: PlotConfig,

    /// Metric configuration
    #[serde(default)]
    pub metrics: MetricsConfig,
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for tables
    pub out_dir: PathBuf,

    /// Directory for figures
    pub fig_dir: PathBuf,

    /// Format of the metrics table written by `report`
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("out"),
            fig_dir: PathBuf::from("figs"),
            format: OutputFormat::Csv,
        }
    }
}

/// Figure-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PlotConfig {
    /// Figure width in pixels
    pub width: u32,

    /// Figure height in pixels
    pub height: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
        }
    }
}

/// Metric-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct MetricsConfig {
    /// Recall value at which point metrics are reported
    pub target_recall: f64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            target_recall: TARGET_RECALL,
        }
    }
}

impl ReportConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Reject values the report cannot be generated with
    pub fn validate(&self) -> Result<(), CliError> {
        let target = self.metrics.target_recall;
        if !(0.0..=1.0).contains(&target) {
            return Err(CliError::ConfigError(format!(
                "metrics.target_recall must be within [0, 1], got {target}"
            )));
        }
        if self.plot.width == 0 || self.plot.height == 0 {
            return Err(CliError::ConfigError(
                "plot.width and plot.height must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
