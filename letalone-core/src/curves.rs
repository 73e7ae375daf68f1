//! Synthetic precision-recall curve generation
//!
//! Every curve shares one evenly spaced recall grid and derives its precision
//! values from a fixed linear formula per (direction, model) pair. The values
//! are placeholders for the figures in the write-up, so precision is left
//! unclamped even where a formula would leave [0, 1].

use crate::constants::RECALL_GRID_POINTS;
use crate::corpus::{Corpus, Direction};
use crate::model::ModelVariant;

/// Precision as a linear function of recall: `intercept - slope * recall`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearPrecision {
    pub intercept: f64,
    pub slope: f64,
}

impl LinearPrecision {
    pub const fn new(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    /// Evaluate the formula at a single recall value
    pub fn at(&self, recall: f64) -> f64 {
        self.intercept - self.slope * recall
    }
}

/// Precision formulas for a direction, indexed in `ModelVariant::ALL` order
///
/// Returns `None` for in-corpus directions, which the study does not report.
pub fn precision_formulas(direction: Direction) -> Option<[LinearPrecision; 3]> {
    match (direction.train(), direction.test()) {
        (Corpus::Gum, Corpus::Ewt) => Some([
            LinearPrecision::new(1.0, 0.5),
            LinearPrecision::new(0.9, 0.6),
            LinearPrecision::new(0.85, 0.55),
        ]),
        (Corpus::Ewt, Corpus::Gum) => Some([
            LinearPrecision::new(0.95, 0.45),
            LinearPrecision::new(0.8, 0.6),
            LinearPrecision::new(0.8, 0.55),
        ]),
        _ => None,
    }
}

/// `points` evenly spaced values from 0.0 to 1.0 inclusive
///
/// Each value is computed as `i / (points - 1)` so grid points such as 0.5
/// are exact. A single point yields `[0.0]`.
pub fn recall_grid(points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![0.0],
        n => {
            let last = (n - 1) as f64;
            (0..n).map(|i| i as f64 / last).collect()
        }
    }
}

/// Recall grid plus one precision sequence per model variant
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    recall: Vec<f64>,
    precision: [Vec<f64>; 3],
}

impl Curve {
    /// Evaluate `formulas` over a shared recall grid
    pub fn from_formulas(recall: Vec<f64>, formulas: &[LinearPrecision; 3]) -> Self {
        let precision: [Vec<f64>; 3] =
            formulas.map(|f| recall.iter().map(|&r| f.at(r)).collect());
        Self { recall, precision }
    }

    /// Shared recall grid
    pub fn recall(&self) -> &[f64] {
        &self.recall
    }

    /// Precision sequence of one model variant
    pub fn precision(&self, model: ModelVariant) -> &[f64] {
        &self.precision[model as usize]
    }

    /// Iterate over `(model, precision)` pairs in reporting order
    pub fn traces(&self) -> impl Iterator<Item = (ModelVariant, &[f64])> + '_ {
        ModelVariant::ALL
            .into_iter()
            .map(move |model| (model, self.precision(model)))
    }

    /// Number of points on the curve
    pub fn len(&self) -> usize {
        self.recall.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recall.is_empty()
    }
}

/// Curves for every reported direction, in `Direction::ALL` order
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSet {
    curves: Vec<(Direction, Curve)>,
}

impl CurveSet {
    /// Curve for a direction, if it is reported
    pub fn get(&self, direction: Direction) -> Option<&Curve> {
        self.curves
            .iter()
            .find(|(d, _)| *d == direction)
            .map(|(_, curve)| curve)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Direction, &Curve)> + '_ {
        self.curves.iter().map(|(d, curve)| (*d, curve))
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

/// Build the synthetic curves for both cross-corpus directions
///
/// Deterministic and side-effect free: repeated calls return bit-identical
/// sequences.
pub fn generate_curves() -> CurveSet {
    let grid = recall_grid(RECALL_GRID_POINTS);
    let curves = Direction::ALL
        .into_iter()
        .filter_map(|direction| {
            precision_formulas(direction)
                .map(|formulas| (direction, Curve::from_formulas(grid.clone(), &formulas)))
        })
        .collect();

    CurveSet { curves }
}
