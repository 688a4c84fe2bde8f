//! High-level independence test API
//!
//! An [`IndependenceTest`] bundles a statistic with the metric that builds
//! its pairwise matrices and the resampling configuration, exposing the
//! conventional `test(x, y)` entry point. Factory functions construct the
//! standard tests: [`hhg`], [`dcorr`], and the kernel-based [`hsic`].

use crate::{HhgStat, PermutationTest, StatisticAlgorithm, TestResult, TraceStat, DEFAULT_REPS};
use assoc_core::{validation, Metric, Result, Workers};
use nalgebra::DMatrix;

/// A configured independence test
///
/// `x` and `y` are (n, p) and (n, q) sample matrices sharing their row
/// count; with [`Metric::Precomputed`] they are instead square symmetric
/// (n, n) pairwise matrices consumed as-is. All validation runs before any
/// permutation trial is dispatched.
#[derive(Clone, Debug)]
pub struct IndependenceTest<S> {
    algorithm: S,
    metric: Metric,
    reps: usize,
    workers: Workers,
    seed: Option<u64>,
}

impl<S: StatisticAlgorithm> IndependenceTest<S> {
    /// Create a test for `algorithm` with the Euclidean distance metric
    pub fn new(algorithm: S) -> Self {
        Self {
            algorithm,
            metric: Metric::euclidean(),
            reps: DEFAULT_REPS,
            workers: Workers::All,
            seed: None,
        }
    }

    /// Replace the metric applied to both inputs
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Set the number of permutation replications
    pub fn with_reps(mut self, reps: usize) -> Self {
        self.reps = reps;
        self
    }

    /// Set the worker-pool request for the permutation trials
    pub fn with_workers(mut self, workers: Workers) -> Self {
        self.workers = workers;
        self
    }

    /// Fix the root seed for a reproducible null distribution
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The statistic algorithm driving this test
    pub fn algorithm(&self) -> &S {
        &self.algorithm
    }

    /// Compute the observed statistic alone, without resampling
    pub fn statistic(&self, x: &DMatrix<f64>, y: &DMatrix<f64>) -> Result<f64> {
        let (distx, disty) = self.build_matrices(x, y)?;
        self.algorithm.compute(&distx, &disty)
    }

    /// Run the permutation test
    ///
    /// Returns the observed statistic, the corrected p-value, and the null
    /// distribution as a diagnostic artifact.
    pub fn test(&self, x: &DMatrix<f64>, y: &DMatrix<f64>) -> Result<TestResult> {
        let (distx, disty) = self.build_matrices(x, y)?;
        let engine = self.workers.engine()?;

        let mut runner = PermutationTest::new(engine).with_reps(self.reps);
        if let Some(seed) = self.seed {
            runner = runner.with_seed(seed);
        }
        runner.execute(&self.algorithm, &distx, &disty)
    }

    fn build_matrices(
        &self,
        x: &DMatrix<f64>,
        y: &DMatrix<f64>,
    ) -> Result<(DMatrix<f64>, DMatrix<f64>)> {
        validation::check_paired_samples(x, y, self.algorithm.min_samples())?;
        Ok((self.metric.build(x)?, self.metric.build(y)?))
    }
}

/// Heller-Heller-Gorfine test with Euclidean distances
pub fn hhg() -> IndependenceTest<HhgStat> {
    IndependenceTest::new(HhgStat::new())
}

/// Distance correlation test with Euclidean distances
pub fn dcorr() -> IndependenceTest<TraceStat> {
    IndependenceTest::new(TraceStat::new())
}

/// Kernel independence test (Hsic)
///
/// The same trace statistic as [`dcorr`], instantiated with Gaussian-kernel
/// similarity matrices; statistic, permutation protocol, and p-value are
/// delegated unchanged.
pub fn hsic() -> IndependenceTest<TraceStat> {
    IndependenceTest::new(TraceStat::new()).with_metric(Metric::gaussian())
}
