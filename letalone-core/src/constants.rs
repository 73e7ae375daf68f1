//! Constants for the evaluation report
//!
//! Centralizes the fixed values shared by the curve generator, the metrics
//! calculator and the corpus statistics.

/// Number of points on the shared recall grid (0.0 to 1.0, step 0.05)
pub const RECALL_GRID_POINTS: usize = 21;

/// Operating point at which point precision, recall and F1 are reported
pub const TARGET_RECALL: f64 = 0.5;

/// Number of Y-head words kept per corpus in the collostruction ranking
pub const TOP_Y_HEADS: usize = 5;

/// Smoothing term inside the G² logarithms
pub const LLR_EPSILON: f64 = 1e-12;

/// Output file names consumed by the document pipeline
pub mod file_names {
    /// Metrics table stem; the extension follows the chosen format
    pub const METRICS_STEM: &str = "pr_metrics";

    /// Fixed two-row error-example table
    pub const ERROR_EXAMPLES: &str = "error_examples.csv";

    /// Per-corpus summary statistics
    pub const CORPUS_STATS: &str = "let_alone_stats.csv";

    /// Figure file prefix; followed by the direction slug
    pub const FIGURE_PREFIX: &str = "pr_curve_";
}
