//! Metrics and pairwise-matrix construction
//!
//! Every statistic in this workspace consumes n×n pairwise matrices. A
//! [`Metric`] describes how those matrices come to be: either the caller
//! already holds them ([`Metric::Precomputed`]) or a whole-matrix function
//! builds them from an (n, p) sample ([`Metric::Custom`]). This replaces the
//! nullable-callable convention of comparable libraries with an explicit
//! two-variant choice.

use crate::{validation, Result};
use nalgebra::DMatrix;
use std::fmt;
use std::sync::Arc;

/// A whole-matrix metric: maps an (n, p) sample to its n×n pairwise matrix
pub type MetricFn = Arc<dyn Fn(&DMatrix<f64>) -> DMatrix<f64> + Send + Sync>;

/// How pairwise matrices are obtained from test inputs
#[derive(Clone)]
pub enum Metric {
    /// Inputs are already square symmetric pairwise matrices
    Precomputed,
    /// Inputs are raw samples; the function computes the pairwise matrix
    Custom(MetricFn),
}

impl Metric {
    /// Euclidean distance metric
    pub fn euclidean() -> Self {
        Metric::Custom(Arc::new(euclidean))
    }

    /// Gaussian (RBF) kernel metric with bandwidth γ = 1/p
    pub fn gaussian() -> Self {
        Metric::Custom(Arc::new(gaussian))
    }

    /// Inputs are already pairwise matrices
    pub fn precomputed() -> Self {
        Metric::Precomputed
    }

    /// User-supplied whole-matrix metric
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&DMatrix<f64>) -> DMatrix<f64> + Send + Sync + 'static,
    {
        Metric::Custom(Arc::new(f))
    }

    /// Whether inputs bypass metric evaluation
    pub fn is_precomputed(&self) -> bool {
        matches!(self, Metric::Precomputed)
    }

    /// Produce the pairwise matrix for one input
    ///
    /// In precomputed mode the input is validated as square and symmetric
    /// and passed through content-unchanged; otherwise the metric function
    /// is applied.
    pub fn build(&self, x: &DMatrix<f64>) -> Result<DMatrix<f64>> {
        match self {
            Metric::Precomputed => {
                validation::check_pairwise(x, "input")?;
                Ok(x.clone())
            }
            Metric::Custom(f) => Ok(f(x)),
        }
    }
}

impl Default for Metric {
    fn default() -> Self {
        Metric::euclidean()
    }
}

impl fmt::Debug for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Precomputed => write!(f, "Metric::Precomputed"),
            Metric::Custom(_) => write!(f, "Metric::Custom(..)"),
        }
    }
}

fn squared_row_distance(x: &DMatrix<f64>, i: usize, j: usize) -> f64 {
    let mut acc = 0.0;
    for c in 0..x.ncols() {
        let d = x[(i, c)] - x[(j, c)];
        acc += d * d;
    }
    acc
}

/// Pairwise Euclidean distances between the rows of `x`
pub fn euclidean(x: &DMatrix<f64>) -> DMatrix<f64> {
    let n = x.nrows();
    let mut d = DMatrix::zeros(n, n);
    for i in 0..n {
        for j in (i + 1)..n {
            let dist = squared_row_distance(x, i, j).sqrt();
            d[(i, j)] = dist;
            d[(j, i)] = dist;
        }
    }
    d
}

/// Pairwise Gaussian (RBF) kernel similarities between the rows of `x`
///
/// `k(i, j) = exp(-γ ||x_i − x_j||²)` with γ = 1/p, so the diagonal is 1.
pub fn gaussian(x: &DMatrix<f64>) -> DMatrix<f64> {
    let n = x.nrows();
    let gamma = 1.0 / x.ncols().max(1) as f64;
    let mut k = DMatrix::zeros(n, n);
    for i in 0..n {
        k[(i, i)] = 1.0;
        for j in (i + 1)..n {
            let sim = (-gamma * squared_row_distance(x, i, j)).exp();
            k[(i, j)] = sim;
            k[(j, i)] = sim;
        }
    }
    k
}
