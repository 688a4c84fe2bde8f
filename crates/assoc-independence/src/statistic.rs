//! The statistic contract and test-result type

use assoc_core::Result;
use nalgebra::DMatrix;
use std::fmt;

/// A dependence statistic over two pairwise matrices
///
/// Implementations are pure: for fixed inputs `compute` returns the same
/// value on every call, and inputs are never mutated. Larger values mean
/// stronger evidence against independence (all tests here are right-tailed).
pub trait StatisticAlgorithm: Send + Sync {
    /// Compute the statistic for two same-shape pairwise matrices
    fn compute(&self, x: &DMatrix<f64>, y: &DMatrix<f64>) -> Result<f64>;

    /// Statistic name for diagnostics
    fn name(&self) -> &'static str;

    /// Minimum number of samples the statistic is defined for
    fn min_samples(&self) -> usize {
        3
    }
}

impl<S: StatisticAlgorithm + ?Sized> StatisticAlgorithm for &S {
    fn compute(&self, x: &DMatrix<f64>, y: &DMatrix<f64>) -> Result<f64> {
        (**self).compute(x, y)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn min_samples(&self) -> usize {
        (**self).min_samples()
    }
}

/// Outcome of a permutation test
///
/// All fields are populated in one shot per test invocation; the null
/// distribution is kept as a diagnostic artifact and always holds exactly
/// `reps` entries.
#[derive(Debug, Clone)]
pub struct TestResult {
    /// Observed test statistic
    pub stat: f64,
    /// Permutation p-value, always in (0, 1]
    pub pvalue: f64,
    /// Statistic values under permuted relabelings, one per trial
    pub null_dist: Vec<f64>,
}

impl TestResult {
    /// Number of permutation replications behind the p-value
    pub fn reps(&self) -> usize {
        self.null_dist.len()
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "stat: {:.4}, p-value: {:.4} ({} permutations)",
            self.stat,
            self.pvalue,
            self.reps()
        )
    }
}
