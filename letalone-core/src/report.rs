//! Report rows handed to the tabular exporters

use crate::corpus::{Corpus, Direction};
use crate::curves::CurveSet;
use crate::error::Result;
use crate::metrics::{compute_metrics_at, MetricsRecord};
use crate::model::ModelVariant;
use serde::{Deserialize, Serialize};

/// One row of the metrics table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRow {
    pub train: Corpus,
    pub test: Corpus,
    pub model: ModelVariant,
    pub auc: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl MetricsRow {
    pub fn new(direction: Direction, model: ModelVariant, record: MetricsRecord) -> Self {
        Self {
            train: direction.train(),
            test: direction.test(),
            model,
            auc: record.auc,
            precision: record.precision,
            recall: record.recall,
            f1: record.f1,
        }
    }

    pub fn direction(&self) -> Direction {
        Direction::new(self.train, self.test)
    }
}

/// Compute one row per (direction, model), directions first
pub fn build_report(curves: &CurveSet, target_recall: f64) -> Result<Vec<MetricsRow>> {
    let mut rows = Vec::with_capacity(curves.len() * ModelVariant::ALL.len());
    for (direction, curve) in curves.iter() {
        for (model, precision) in curve.traces() {
            let record = compute_metrics_at(precision, curve.recall(), target_recall)?;
            rows.push(MetricsRow::new(direction, model, record));
        }
    }
    Ok(rows)
}

/// One row of the hand-picked error-example table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorExample {
    pub corpus: Corpus,
    pub sentence_id: String,
    pub label: u8,
    pub prediction: u8,
}

/// Fixed examples quoted in the write-up: one miss and one false alarm
pub fn error_examples() -> [ErrorExample; 2] {
    [
        ErrorExample {
            corpus: Corpus::Gum,
            sentence_id: "syn-gum-3".to_string(),
            label: 1,
            prediction: 0,
        },
        ErrorExample {
            corpus: Corpus::Ewt,
            sentence_id: "syn-ewt-7".to_string(),
            label: 0,
            prediction: 1,
        },
    ]
}
