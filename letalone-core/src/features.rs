//! Per-corpus summary statistics over extracted *let alone* instances

use crate::collostruction::collostruction_scores;
use crate::corpus::Corpus;
use serde::{Deserialize, Serialize};

/// One extracted *let alone* instance with its cue features
///
/// Field names match the columns of the upstream feature table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRow {
    pub sentence_id: String,
    #[serde(default)]
    pub x_form: Option<String>,
    #[serde(default)]
    pub y_form: Option<String>,
    pub upos_x: String,
    pub upos_y: String,
    /// 1 when the X and Y heads are syntactically parallel
    pub parallelism: u8,
    /// 1 when a licensing cue (negation etc.) precedes the anchor
    pub licensing: u8,
    pub dist_x_anchor: u32,
    pub dist_anchor_y: u32,
    pub corpus: Corpus,
}

impl FeatureRow {
    /// Lowercased Y-head form; missing forms become the empty string
    pub fn y_form_normalized(&self) -> String {
        self.y_form.as_deref().unwrap_or_default().to_lowercase()
    }
}

/// Summary row for one corpus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusStats {
    pub corpus: Corpus,
    pub n_tokens: usize,
    pub parallelism_rate: f64,
    pub licensing_rate: f64,
    pub top_y_heads: String,
}

fn rate(rows: &[&FeatureRow], flag: impl Fn(&FeatureRow) -> u8) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    let hits: u64 = rows.iter().map(|&r| u64::from(flag(r))).sum();
    hits as f64 / rows.len() as f64
}

/// Instance counts, cue rates and top Y-heads for GUM then EWT
pub fn corpus_stats(rows: &[FeatureRow]) -> Vec<CorpusStats> {
    let mut collos = collostruction_scores(rows);

    Corpus::ALL
        .iter()
        .map(|&corpus| {
            let subset: Vec<&FeatureRow> = rows.iter().filter(|r| r.corpus == corpus).collect();
            CorpusStats {
                corpus,
                n_tokens: subset.len(),
                parallelism_rate: rate(&subset, |r| r.parallelism),
                licensing_rate: rate(&subset, |r| r.licensing),
                top_y_heads: collos.remove(&corpus).unwrap_or_default(),
            }
        })
        .collect()
}
