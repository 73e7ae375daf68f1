//! Precision-recall metrics for the ablation curves

use crate::constants::TARGET_RECALL;
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Summary metrics for one (direction, model) curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    /// Area under the precision-recall curve (trapezoidal rule)
    pub auc: f64,
    /// Precision at the threshold point
    pub precision: f64,
    /// Recall at the threshold point
    pub recall: f64,
    /// F1 score: 2 * (precision * recall) / (precision + recall)
    pub f1: f64,
}

/// Harmonic mean of precision and recall, 0.0 when both are zero
pub fn f1_score(precision: f64, recall: f64) -> f64 {
    if precision + recall > 0.0 {
        2.0 * (precision * recall) / (precision + recall)
    } else {
        0.0
    }
}

/// Trapezoidal integral of `y` over `x` in the given point order
///
/// Widths are signed and the points are not sorted, so a curve walked from
/// high to low `x` integrates to a negative area.
pub fn trapezoidal_auc(x: &[f64], y: &[f64]) -> f64 {
    x.windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| (xs[1] - xs[0]) * (ys[1] + ys[0]) / 2.0)
        .sum()
}

/// Index of the recall value closest to `target`; ties keep the first index
///
/// Returns `None` for an empty slice. NaN recall values are never selected
/// unless every value is NaN, in which case index 0 is returned.
pub fn threshold_index(recall: &[f64], target: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &r) in recall.iter().enumerate() {
        let distance = (r - target).abs();
        let closer = match best {
            None => true,
            Some((_, d)) => distance < d || (d.is_nan() && !distance.is_nan()),
        };
        if closer {
            best = Some((i, distance));
        }
    }
    best.map(|(i, _)| i)
}

/// Compute PR-AUC and point metrics at recall ≈ 0.5
pub fn compute_metrics(precision: &[f64], recall: &[f64]) -> Result<MetricsRecord> {
    compute_metrics_at(precision, recall, TARGET_RECALL)
}

/// Compute PR-AUC and point metrics at the recall closest to `target`
///
/// # Errors
///
/// Returns [`CoreError::LengthMismatch`] when the sequences differ in length
/// and [`CoreError::EmptyInput`] when both are empty.
pub fn compute_metrics_at(
    precision: &[f64],
    recall: &[f64],
    target: f64,
) -> Result<MetricsRecord> {
    if precision.len() != recall.len() {
        return Err(CoreError::LengthMismatch {
            recall: recall.len(),
            precision: precision.len(),
        });
    }

    let idx = threshold_index(recall, target).ok_or(CoreError::EmptyInput)?;
    let auc = trapezoidal_auc(recall, precision);
    let (p, r) = (precision[idx], recall[idx]);

    Ok(MetricsRecord {
        auc,
        precision: p,
        recall: r,
        f1: f1_score(p, r),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f1_zero_denominator() {
        assert_eq!(f1_score(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_f1_balanced() {
        assert_eq!(f1_score(0.5, 0.5), 0.5);
        assert!((f1_score(0.75, 0.5) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_trapezoidal_auc_linear() {
        let x = [0.0, 0.5, 1.0];
        let y = [1.0, 0.75, 0.5];
        assert!((trapezoidal_auc(&x, &y) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_trapezoidal_auc_reversed_order_is_negative() {
        let x = [1.0, 0.5, 0.0];
        let y = [0.5, 0.75, 1.0];
        assert!((trapezoidal_auc(&x, &y) + 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_trapezoidal_auc_single_point() {
        assert_eq!(trapezoidal_auc(&[0.3], &[0.9]), 0.0);
    }

    #[test]
    fn test_threshold_index_exact_match() {
        let recall = [0.0, 0.25, 0.5, 0.75, 1.0];
        assert_eq!(threshold_index(&recall, 0.5), Some(2));
    }

    #[test]
    fn test_threshold_index_tie_keeps_first() {
        let recall = [0.0, 0.4, 0.6, 1.0];
        assert_eq!(threshold_index(&recall, 0.5), Some(1));
    }

    #[test]
    fn test_threshold_index_skips_nan() {
        let recall = [f64::NAN, 0.9, 0.45];
        assert_eq!(threshold_index(&recall, 0.5), Some(2));
    }

    #[test]
    fn test_threshold_index_empty() {
        assert_eq!(threshold_index(&[], 0.5), None);
    }

    #[test]
    fn test_compute_metrics_point_values() {
        let recall = [0.0, 0.5, 1.0];
        let precision = [1.0, 0.8, 0.4];
        let metrics = compute_metrics(&precision, &recall).unwrap();

        assert_eq!(metrics.precision, 0.8);
        assert_eq!(metrics.recall, 0.5);
        assert!((metrics.f1 - 2.0 * 0.8 * 0.5 / 1.3).abs() < 1e-12);
        assert!((metrics.auc - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_compute_metrics_length_mismatch() {
        let recall = vec![0.0; 21];
        let precision = vec![1.0; 20];
        let err = compute_metrics(&precision, &recall).unwrap_err();
        assert_eq!(
            err,
            CoreError::LengthMismatch {
                recall: 21,
                precision: 20
            }
        );
    }

    #[test]
    fn test_compute_metrics_empty() {
        assert_eq!(compute_metrics(&[], &[]), Err(CoreError::EmptyInput));
    }

    #[test]
    fn test_compute_metrics_zero_point() {
        let recall = [0.0, 0.5];
        let precision = [0.0, 0.0];
        let metrics = compute_metrics_at(&precision, &recall, 0.1).unwrap();
        assert_eq!(metrics.recall, 0.0);
        assert_eq!(metrics.precision, 0.0);
        assert_eq!(metrics.f1, 0.0);
    }

    #[test]
    fn test_compute_metrics_custom_target() {
        let recall = [0.0, 0.25, 0.5, 0.75, 1.0];
        let precision = [1.0, 0.9, 0.8, 0.7, 0.6];
        let metrics = compute_metrics_at(&precision, &recall, 0.8).unwrap();
        assert_eq!(metrics.recall, 0.75);
        assert_eq!(metrics.precision, 0.7);
    }
}
