//! Corpus identifiers and cross-corpus evaluation directions

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Universal Dependencies English treebanks used in the study
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Corpus {
    /// Georgetown University Multilayer corpus
    Gum,
    /// English Web Treebank
    Ewt,
}

impl Corpus {
    /// All corpora in reporting order
    pub const ALL: [Corpus; 2] = [Corpus::Gum, Corpus::Ewt];

    /// Lowercase identifier used in tables and file names
    pub fn as_str(&self) -> &'static str {
        match self {
            Corpus::Gum => "gum",
            Corpus::Ewt => "ewt",
        }
    }

    /// Display name used in figures
    pub fn display_name(&self) -> &'static str {
        match self {
            Corpus::Gum => "GUM",
            Corpus::Ewt => "EWT",
        }
    }
}

impl fmt::Display for Corpus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Corpus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gum" => Ok(Corpus::Gum),
            "ewt" => Ok(Corpus::Ewt),
            _ => Err(CoreError::UnknownCorpus(s.to_string())),
        }
    }
}

/// Ordered (train, test) pair identifying one cross-corpus setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Direction {
    train: Corpus,
    test: Corpus,
}

impl Direction {
    /// Both evaluation directions in reporting order
    pub const ALL: [Direction; 2] = [
        Direction::new(Corpus::Gum, Corpus::Ewt),
        Direction::new(Corpus::Ewt, Corpus::Gum),
    ];

    /// Create a direction from its training and test corpora
    pub const fn new(train: Corpus, test: Corpus) -> Self {
        Self { train, test }
    }

    /// Corpus the model was trained on
    pub fn train(&self) -> Corpus {
        self.train
    }

    /// Corpus the model was evaluated on
    pub fn test(&self) -> Corpus {
        self.test
    }

    /// Human-readable label, e.g. `GUM → EWT`
    pub fn label(&self) -> String {
        format!(
            "{} → {}",
            self.train.display_name(),
            self.test.display_name()
        )
    }

    /// File-name friendly slug, e.g. `gum_to_ewt`
    pub fn slug(&self) -> String {
        format!("{}_to_{}", self.train.as_str(), self.test.as_str())
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}→{}", self.train, self.test)
    }
}
