//! Model ablation variants

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ablation configuration whose precision curve is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelVariant {
    /// All cues enabled
    Full,
    /// Syntactic parallelism cue removed
    NoParallelism,
    /// Licensing (negation/downward-entailing) cue removed
    NoLicensing,
}

impl ModelVariant {
    /// All variants in reporting order
    pub const ALL: [ModelVariant; 3] = [
        ModelVariant::Full,
        ModelVariant::NoParallelism,
        ModelVariant::NoLicensing,
    ];

    /// Identifier used in tables
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelVariant::Full => "full",
            ModelVariant::NoParallelism => "no_parallelism",
            ModelVariant::NoLicensing => "no_licensing",
        }
    }

    /// Legend label used in figures
    pub fn label(&self) -> &'static str {
        match self {
            ModelVariant::Full => "Full model",
            ModelVariant::NoParallelism => "No parallelism",
            ModelVariant::NoLicensing => "No licensing",
        }
    }
}

impl fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelVariant {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "full" => Ok(ModelVariant::Full),
            "no_parallelism" => Ok(ModelVariant::NoParallelism),
            "no_licensing" => Ok(ModelVariant::NoLicensing),
            _ => Err(CoreError::UnknownModel(s.to_string())),
        }
    }
}
