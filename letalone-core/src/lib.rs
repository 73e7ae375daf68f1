//! Core computations for the cross-corpus *let alone* evaluation report
//!
//! This crate is free of I/O. It provides:
//!
//! - [`curves`]: the synthetic precision-recall curves for each
//!   (train, test) direction and model ablation
//! - [`metrics`]: PR-AUC and point precision/recall/F1 at recall ≈ 0.5
//! - [`report`]: the rows handed to the tabular exporters
//! - [`features`] and [`collostruction`]: per-corpus summary statistics
//!
//! # Example
//!
//! ```
//! use letalone_core::{build_report, generate_curves, TARGET_RECALL};
//!
//! let rows = build_report(&generate_curves(), TARGET_RECALL).unwrap();
//! assert_eq!(rows.len(), 6);
//! assert!(rows.iter().all(|row| row.recall == 0.5));
//! ```

pub mod collostruction;
pub mod constants;
pub mod corpus;
pub mod curves;
pub mod error;
pub mod features;
pub mod metrics;
pub mod model;
pub mod report;

pub use collostruction::{collostruction_scores, log_likelihood};
pub use constants::{RECALL_GRID_POINTS, TARGET_RECALL};
pub use corpus::{Corpus, Direction};
pub use curves::{generate_curves, recall_grid, Curve, CurveSet, LinearPrecision};
pub use error::{CoreError, Result};
pub use features::{corpus_stats, CorpusStats, FeatureRow};
pub use metrics::{compute_metrics, compute_metrics_at, f1_score, MetricsRecord};
pub use model::ModelVariant;
pub use report::{build_report, error_examples, ErrorExample, MetricsRow};
