//! Property tests for the metrics calculator

use letalone_core::metrics::{threshold_index, trapezoidal_auc};
use letalone_core::*;
use proptest::prelude::*;

fn unit() -> impl Strategy<Value = f64> {
    0.0f64..=1.0
}

proptest! {
    #[test]
    fn f1_lies_between_zero_and_max(p in unit(), r in unit()) {
        let f1 = f1_score(p, r);
        prop_assert!(f1 >= 0.0);
        prop_assert!(f1 <= p.max(r) + 1e-12);
        if p + r > 0.0 {
            prop_assert!((f1 - 2.0 * p * r / (p + r)).abs() < 1e-12);
        } else {
            prop_assert_eq!(f1, 0.0);
        }
    }

    #[test]
    fn threshold_index_is_closest_and_first(recall in prop::collection::vec(unit(), 1..40)) {
        let idx = threshold_index(&recall, 0.5).unwrap();
        let best = (recall[idx] - 0.5).abs();
        for (i, r) in recall.iter().enumerate() {
            let d = (r - 0.5).abs();
            prop_assert!(d >= best);
            if i < idx {
                prop_assert!(d > best);
            }
        }
    }

    #[test]
    fn linear_curve_auc_is_exact(intercept in 0.5f64..1.0, slope in 0.0f64..1.0) {
        let formula = LinearPrecision::new(intercept, slope);
        let curve = Curve::from_formulas(recall_grid(RECALL_GRID_POINTS), &[formula; 3]);
        let metrics = compute_metrics(curve.precision(ModelVariant::Full), curve.recall()).unwrap();
        prop_assert!((metrics.auc - (intercept - slope / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn mismatched_lengths_always_fail(n in 1usize..40, extra in 1usize..5) {
        let recall = recall_grid(n);
        let precision = vec![0.5; n + extra];
        prop_assert!(
            matches!(
                compute_metrics(&precision, &recall),
                Err(CoreError::LengthMismatch { .. })
            ),
            "expected a length mismatch error"
        );
    }

    #[test]
    fn reversing_points_negates_auc(points in prop::collection::vec((unit(), unit()), 2..30)) {
        let (x, y): (Vec<f64>, Vec<f64>) = points.into_iter().unzip();
        let forward = trapezoidal_auc(&x, &y);
        let xr: Vec<f64> = x.iter().rev().copied().collect();
        let yr: Vec<f64> = y.iter().rev().copied().collect();
        prop_assert!((forward + trapezoidal_auc(&xr, &yr)).abs() < 1e-9);
    }
}
