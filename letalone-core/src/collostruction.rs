//! Collostruction ranking of Y-head words across the two corpora
//!
//! Each Y-head form gets a 2×2 contingency table (corpus × form/other form)
//! scored with the log-likelihood statistic G². The form is credited to the
//! corpus where its relative frequency is higher.

use crate::constants::{LLR_EPSILON, TOP_Y_HEADS};
use crate::corpus::Corpus;
use crate::features::FeatureRow;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// G² for a 2×2 table
///
/// `a`/`b` are the form and other-form counts in the first corpus, `c`/`d`
/// the same in the second. Empty cells contribute nothing.
///
/// Expected counts follow the extractor that produced the published
/// `let_alone_stats.csv`: `b` is compared against form × second corpus and
/// `c` against other × first corpus, so scores stay comparable with it.
pub fn log_likelihood(a: f64, b: f64, c: f64, d: f64) -> f64 {
    let total = a + b + c + d;
    if total <= 0.0 {
        return 0.0;
    }

    let form = a + c;
    let other = b + d;
    let first = a + b;
    let second = c + d;

    let cells = [
        (a, form * first / total),
        (b, form * second / total),
        (c, other * first / total),
        (d, other * second / total),
    ];

    2.0 * cells
        .iter()
        .filter(|(observed, _)| *observed > 0.0)
        .map(|&(observed, expected)| {
            observed * ((observed + LLR_EPSILON) / (expected + LLR_EPSILON)).ln()
        })
        .sum::<f64>()
}

fn form_counts(rows: &[&FeatureRow]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for row in rows {
        *counts.entry(row.y_form_normalized()).or_insert(0) += 1;
    }
    counts
}

/// Top Y-head forms per corpus as `form:score` pairs joined by `"; "`
///
/// Both corpora are always present in the result. Unless the rows cover
/// exactly two corpora, every entry is empty.
pub fn collostruction_scores(rows: &[FeatureRow]) -> BTreeMap<Corpus, String> {
    let mut results: BTreeMap<Corpus, String> =
        Corpus::ALL.iter().map(|&c| (c, String::new())).collect();

    let mut corpora: Vec<Corpus> = Vec::new();
    for row in rows {
        if !corpora.contains(&row.corpus) {
            corpora.push(row.corpus);
        }
    }
    let [corpus_a, corpus_b] = match corpora.as_slice() {
        [a, b] => [*a, *b],
        _ => return results,
    };

    let in_a: Vec<&FeatureRow> = rows.iter().filter(|r| r.corpus == corpus_a).collect();
    let in_b: Vec<&FeatureRow> = rows.iter().filter(|r| r.corpus == corpus_b).collect();
    let counts_a = form_counts(&in_a);
    let counts_b = form_counts(&in_b);
    let total_a = in_a.len() as f64;
    let total_b = in_b.len() as f64;

    let mut forms: Vec<&String> = counts_a.keys().chain(counts_b.keys()).collect();
    forms.sort();
    forms.dedup();

    let mut scored: BTreeMap<Corpus, Vec<(&str, f64)>> = BTreeMap::new();
    for form in forms {
        let a = counts_a.get(form).copied().unwrap_or(0) as f64;
        let c = counts_b.get(form).copied().unwrap_or(0) as f64;
        let g2 = log_likelihood(a, total_a - a, c, total_b - c);

        let freq_a = if total_a > 0.0 { a / total_a } else { 0.0 };
        let freq_b = if total_b > 0.0 { c / total_b } else { 0.0 };
        let preferred = match freq_a.partial_cmp(&freq_b) {
            Some(Ordering::Greater) => corpus_a,
            Some(Ordering::Less) => corpus_b,
            _ => continue,
        };
        scored.entry(preferred).or_default().push((form.as_str(), g2));
    }

    for (corpus, mut forms) in scored {
        forms.sort_by(|x, y| {
            y.1.partial_cmp(&x.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| x.0.cmp(y.0))
        });
        let top: Vec<String> = forms
            .iter()
            .take(TOP_Y_HEADS)
            .map(|(form, score)| format!("{form}:{score:.2}"))
            .collect();
        results.insert(corpus, top.join("; "));
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(corpus: Corpus, y_form: &str) -> FeatureRow {
        FeatureRow {
            sentence_id: format!("{corpus}-{y_form}"),
            x_form: None,
            y_form: Some(y_form.to_string()),
            upos_x: "NOUN".to_string(),
            upos_y: "NOUN".to_string(),
            parallelism: 1,
            licensing: 0,
            dist_x_anchor: 1,
            dist_anchor_y: 1,
            corpus,
        }
    }

    #[test]
    fn test_log_likelihood_independent_table() {
        assert_eq!(log_likelihood(1.0, 1.0, 1.0, 1.0), 0.0);
    }

    #[test]
    fn test_log_likelihood_known_value() {
        let g2 = log_likelihood(2.0, 1.0, 0.0, 3.0);
        assert!((g2 - 5.205_379_370_885_767).abs() < 1e-9);
    }

    #[test]
    fn test_log_likelihood_empty_table() {
        assert_eq!(log_likelihood(0.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_scores_assign_forms_to_preferring_corpus() {
        let rows = vec![
            row(Corpus::Gum, "mind"),
            row(Corpus::Gum, "Mind"),
            row(Corpus::Gum, "walk"),
            row(Corpus::Ewt, "run"),
            row(Corpus::Ewt, "walk"),
            row(Corpus::Ewt, "walk"),
        ];

        let scores = collostruction_scores(&rows);
        assert_eq!(scores[&Corpus::Gum], "mind:5.21");
        assert_eq!(scores[&Corpus::Ewt], "run:8.03; walk:0.68");
    }

    #[test]
    fn test_off_diagonal_expected_counts_use_extractor_cells() {
        // form only in the first corpus: a=2, b=1, c=0, d=3 over N=6
        let expected = 2.0 * (2.0 * 2.0_f64.ln() + 3.0 * 1.5_f64.ln());
        assert!((log_likelihood(2.0, 1.0, 0.0, 3.0) - expected).abs() < 1e-9);
        assert!((log_likelihood(0.0, 3.0, 1.0, 2.0) - 8.025_401_146_354_783).abs() < 1e-6);
    }

    #[test]
    fn test_scores_skip_equal_frequencies() {
        let rows = vec![row(Corpus::Gum, "walk"), row(Corpus::Ewt, "walk")];
        let scores = collostruction_scores(&rows);
        assert_eq!(scores[&Corpus::Gum], "");
        assert_eq!(scores[&Corpus::Ewt], "");
    }

    #[test]
    fn test_scores_single_corpus_is_empty() {
        let rows = vec![row(Corpus::Gum, "walk"), row(Corpus::Gum, "run")];
        let scores = collostruction_scores(&rows);
        assert_eq!(scores.len(), 2);
        assert!(scores.values().all(String::is_empty));
    }

    #[test]
    fn test_scores_keep_top_five() {
        let mut rows: Vec<FeatureRow> = ["a", "b", "c", "d", "e", "f", "g"]
            .iter()
            .map(|f| row(Corpus::Gum, f))
            .collect();
        rows.push(row(Corpus::Ewt, "z"));

        let scores = collostruction_scores(&rows);
        assert_eq!(scores[&Corpus::Gum].split("; ").count(), 5);
        assert!(scores[&Corpus::Gum].starts_with("a:"));
        assert!(scores[&Corpus::Ewt].starts_with("z:"));
    }
}
