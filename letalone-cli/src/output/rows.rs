//! Column layout of the exported tables

use letalone_core::{CorpusStats, ErrorExample, MetricsRow};

/// A row that can be laid out as text cells
pub trait TableRow {
    /// Column headers, in output order
    fn headers() -> &'static [&'static str]
    where
        Self: Sized;

    /// Cell values, in the same order as [`TableRow::headers`]
    fn cells(&self) -> Vec<String>;
}

impl TableRow for MetricsRow {
    fn headers() -> &'static [&'static str] {
        &["train", "test", "model", "auc", "precision", "recall", "f1"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.train.to_string(),
            self.test.to_string(),
            self.model.to_string(),
            format!("{:.4}", self.auc),
            format!("{:.4}", self.precision),
            format!("{:.4}", self.recall),
            format!("{:.4}", self.f1),
        ]
    }
}

impl TableRow for ErrorExample {
    fn headers() -> &'static [&'static str] {
        &["corpus", "sentence_id", "label", "prediction"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.corpus.to_string(),
            self.sentence_id.clone(),
            self.label.to_string(),
            self.prediction.to_string(),
        ]
    }
}

impl TableRow for CorpusStats {
    fn headers() -> &'static [&'static str] {
        &[
            "corpus",
            "n_tokens",
            "parallelism_rate",
            "licensing_rate",
            "top_y_heads",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.corpus.to_string(),
            self.n_tokens.to_string(),
            format!("{:.4}", self.parallelism_rate),
            format!("{:.4}", self.licensing_rate),
            self.top_y_heads.clone(),
        ]
    }
}
